//! Post-parse validation of the model response.
//!
//! Typed deserialization already rejects missing required fields and values
//! outside the closed enumerations. This pass checks what the wire schema
//! cannot express: numeric ranges and a usable roadmap. Every problem is
//! collected so one failed call reports the full list.

use crate::models::analysis::CareerAnalysis;

const MAX_SCORE: f64 = 100.0;
const MAX_LEVEL: f64 = 10.0;

/// Returns all shape problems in the analysis; empty means valid.
pub fn validate_analysis(analysis: &CareerAnalysis) -> Vec<String> {
    let mut problems = Vec::new();

    check_score(
        &mut problems,
        "career_summary.overall_readiness_score",
        analysis.career_summary.overall_readiness_score,
    );

    for (i, role) in analysis.target_roles_analysis.iter().enumerate() {
        check_score(
            &mut problems,
            &format!("target_roles_analysis[{i}].fit_score"),
            role.fit_score,
        );
    }

    for (i, gap) in analysis.skill_gap_matrix.iter().enumerate() {
        check_level(
            &mut problems,
            &format!("skill_gap_matrix[{i}].current_level"),
            gap.current_level,
        );
        check_level(
            &mut problems,
            &format!("skill_gap_matrix[{i}].expected_level"),
            gap.expected_level,
        );
        if !gap.gap.is_finite() {
            problems.push(format!("skill_gap_matrix[{i}].gap is not a finite number"));
        }
    }

    let roadmap = &analysis.career_architecture_roadmap;
    if roadmap.phases.is_empty() {
        problems.push("career_architecture_roadmap.phases is empty".to_string());
    }
    check_duration(
        &mut problems,
        "career_architecture_roadmap.estimated_duration_months",
        roadmap.estimated_duration_months,
    );
    for (i, phase) in roadmap.phases.iter().enumerate() {
        check_duration(
            &mut problems,
            &format!("career_architecture_roadmap.phases[{i}].estimated_time_months"),
            phase.estimated_time_months,
        );
    }

    problems
}

fn check_score(problems: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() || !(0.0..=MAX_SCORE).contains(&value) {
        problems.push(format!("{field} must be within 0-100, got {value}"));
    }
}

fn check_level(problems: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() || !(0.0..=MAX_LEVEL).contains(&value) {
        problems.push(format!("{field} must be within 0-10, got {value}"));
    }
}

fn check_duration(problems: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        problems.push(format!("{field} must be a non-negative duration, got {value}"));
    }
}
