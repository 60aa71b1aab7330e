//! Dashboard renderer: a pure function of the analysis record.
//!
//! Derives the radar series from the skill-gap matrix, precomputes display
//! labels, and attaches the static accent tables. No mutation, no network
//! access, no business logic.

pub mod styles;

use serde::Serialize;

use crate::models::analysis::{AnalysisRecord, GapPriority, RiskLevel};
use crate::dashboard::styles::{priority_accent, risk_accent, Accent};

pub const CAPABILITY_PANEL_TITLES: [&str; 4] = [
    "Technical Stack",
    "Domain Depth",
    "Cognitive Patterns",
    "Leadership & Comm",
];

pub const ADVICE_PANEL_TITLES: [&str; 3] = [
    "Core Focus Area",
    "Strategic Anti-Patterns",
    "High-Leverage Moves",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary: SummaryPanel,
    pub target_roles: Vec<TargetRoleCard>,
    pub capabilities: Vec<CapabilityPanel>,
    pub radar: Vec<RadarPoint>,
    pub gap_table: Vec<GapRow>,
    pub roadmap: RoadmapView,
    pub advice: Vec<AdvicePanel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub current_state: String,
    pub career_strengths: Vec<String>,
    pub career_risks: Vec<String>,
    /// Clamped to 0-100 for the readiness ring.
    pub readiness_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRoleCard {
    pub role: String,
    pub fit_score: f64,
    pub fit_label: String,
    pub why_this_role: String,
    pub risk_level: RiskLevel,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityPanel {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// One radar-chart point: the gap matrix reshaped to current vs required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub skill: String,
    pub current: f64,
    pub required: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRow {
    pub skill: String,
    pub level_transition: String,
    pub gap_label: String,
    pub priority: GapPriority,
    pub accent: Accent,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapView {
    pub target_role: String,
    pub estimated_duration_months: f64,
    pub duration_label: String,
    pub difficulty_level: String,
    pub phases: Vec<PhaseCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseCard {
    /// 1-based position on the timeline.
    pub sequence: usize,
    pub phase_label: String,
    pub phase_name: String,
    pub objective: String,
    pub skills_to_build: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub success_indicators: Vec<String>,
    pub estimated_time_months: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvicePanel {
    pub title: &'static str,
    pub items: Vec<String>,
    pub accent: Accent,
}

pub fn build_dashboard(record: &AnalysisRecord) -> DashboardView {
    let analysis = &record.analysis;
    let summary = &analysis.career_summary;
    let capability_map = &analysis.capability_map;
    let roadmap = &analysis.career_architecture_roadmap;
    let advice = &analysis.strategic_advice;

    DashboardView {
        summary: SummaryPanel {
            current_state: summary.current_state.clone(),
            career_strengths: summary.career_strengths.clone(),
            career_risks: summary.career_risks.clone(),
            readiness_score: summary.overall_readiness_score.clamp(0.0, 100.0),
        },
        target_roles: analysis
            .target_roles_analysis
            .iter()
            .map(|role| TargetRoleCard {
                role: role.role.clone(),
                fit_score: role.fit_score,
                fit_label: format!("{}% Fit", fmt_number(role.fit_score)),
                why_this_role: role.why_this_role.clone(),
                risk_level: role.risk_level,
                accent: risk_accent(role.risk_level),
            })
            .collect(),
        capabilities: CAPABILITY_PANEL_TITLES
            .into_iter()
            .zip([
                &capability_map.technical,
                &capability_map.domain,
                &capability_map.cognitive,
                &capability_map.communication_leadership,
            ])
            .map(|(title, items)| CapabilityPanel {
                title,
                items: items.clone(),
            })
            .collect(),
        radar: analysis
            .skill_gap_matrix
            .iter()
            .map(|gap| RadarPoint {
                skill: gap.skill.clone(),
                current: gap.current_level,
                required: gap.expected_level,
            })
            .collect(),
        gap_table: analysis
            .skill_gap_matrix
            .iter()
            .map(|gap| GapRow {
                skill: gap.skill.clone(),
                level_transition: format!(
                    "LVL {} → {}",
                    fmt_number(gap.current_level),
                    fmt_number(gap.expected_level)
                ),
                gap_label: format!("-{} pts", fmt_number(gap.gap)),
                priority: gap.priority,
                accent: priority_accent(gap.priority),
                rationale: gap.rationale.clone(),
            })
            .collect(),
        roadmap: RoadmapView {
            target_role: roadmap.target_role.clone(),
            estimated_duration_months: roadmap.estimated_duration_months,
            duration_label: format!("{} Months", fmt_number(roadmap.estimated_duration_months)),
            difficulty_level: roadmap.difficulty_level.clone(),
            phases: roadmap
                .phases
                .iter()
                .enumerate()
                .map(|(i, phase)| PhaseCard {
                    sequence: i + 1,
                    phase_label: format!(
                        "Phase {} • {} Months",
                        i + 1,
                        fmt_number(phase.estimated_time_months)
                    ),
                    phase_name: phase.phase_name.clone(),
                    objective: phase.objective.clone(),
                    skills_to_build: phase.skills_to_build.clone(),
                    recommended_actions: phase.recommended_actions.clone(),
                    success_indicators: phase.success_indicators.clone(),
                    estimated_time_months: phase.estimated_time_months,
                })
                .collect(),
        },
        advice: ADVICE_PANEL_TITLES
            .into_iter()
            .zip([
                (&advice.what_to_focus_on, Accent::Blue),
                (&advice.what_to_avoid, Accent::Red),
                (&advice.career_leverage_moves, Accent::Emerald),
            ])
            .map(|(title, (items, accent))| AdvicePanel {
                title,
                items: items.clone(),
                accent,
            })
            .collect(),
    }
}

/// Renders wire numbers for labels: integers without a trailing `.0`.
fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{sample_analysis, AnalysisRecord};

    fn sample_record() -> AnalysisRecord {
        AnalysisRecord::new(sample_analysis())
    }

    #[test]
    fn test_radar_series_mirrors_the_gap_matrix() {
        let record = sample_record();
        let view = build_dashboard(&record);
        let matrix = &record.analysis.skill_gap_matrix;

        assert_eq!(view.radar.len(), matrix.len());
        for (point, gap) in view.radar.iter().zip(matrix) {
            assert_eq!(point.skill, gap.skill);
            assert_eq!(point.current, gap.current_level);
            assert_eq!(point.required, gap.expected_level);
        }
    }

    #[test]
    fn test_gap_table_has_one_row_per_matrix_entry() {
        let record = sample_record();
        let view = build_dashboard(&record);
        assert_eq!(
            view.gap_table.len(),
            record.analysis.skill_gap_matrix.len()
        );
    }

    #[test]
    fn test_gap_row_labels() {
        let view = build_dashboard(&sample_record());
        let first = &view.gap_table[0];
        assert_eq!(first.level_transition, "LVL 4 → 8");
        assert_eq!(first.gap_label, "-4 pts");
        assert_eq!(first.accent, Accent::Red);
    }

    #[test]
    fn test_capability_panels_keep_fixed_titles_and_order() {
        let view = build_dashboard(&sample_record());
        let titles: Vec<&str> = view.capabilities.iter().map(|p| p.title).collect();
        assert_eq!(titles, CAPABILITY_PANEL_TITLES);
        assert_eq!(view.capabilities[0].items, vec!["React", "SQL"]);
    }

    #[test]
    fn test_roadmap_phases_are_numbered_from_one() {
        let view = build_dashboard(&sample_record());
        let sequences: Vec<usize> = view.roadmap.phases.iter().map(|p| p.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(view.roadmap.phases[0].phase_label, "Phase 1 • 6 Months");
        assert_eq!(view.roadmap.duration_label, "18 Months");
    }

    #[test]
    fn test_advice_columns_keep_fixed_titles_and_accents() {
        let view = build_dashboard(&sample_record());
        let titles: Vec<&str> = view.advice.iter().map(|p| p.title).collect();
        assert_eq!(titles, ADVICE_PANEL_TITLES);
        assert_eq!(view.advice[1].accent, Accent::Red);
        assert_eq!(view.advice[2].accent, Accent::Emerald);
    }

    #[test]
    fn test_readiness_score_is_clamped_for_the_ring() {
        let mut analysis = sample_analysis();
        analysis.career_summary.overall_readiness_score = 140.0;
        let view = build_dashboard(&AnalysisRecord::new(analysis));
        assert_eq!(view.summary.readiness_score, 100.0);
    }

    #[test]
    fn test_fit_label_renders_whole_percentages() {
        let view = build_dashboard(&sample_record());
        assert_eq!(view.target_roles[0].fit_label, "71% Fit");
        assert_eq!(view.target_roles[0].accent, Accent::Emerald);
        assert_eq!(view.target_roles[1].accent, Accent::Yellow);
    }

    #[test]
    fn test_fmt_number_trims_integer_floats_only() {
        assert_eq!(fmt_number(8.0), "8");
        assert_eq!(fmt_number(7.5), "7.5");
        assert_eq!(fmt_number(0.0), "0");
    }
}
