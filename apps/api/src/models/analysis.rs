//! Typed mirror of the fixed analysis output schema.
//!
//! Field names match the wire schema verbatim; the two closed enumerations
//! (`risk_level`, `priority`) reject anything outside their tiers at parse
//! time. Numeric fields are `f64` because the schema declares NUMBER and the
//! model may emit non-integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Risk tier assigned to a target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Priority tier assigned to a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// Narrative summary plus the 0-100 readiness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    pub current_state: String,
    pub career_risks: Vec<String>,
    pub career_strengths: Vec<String>,
    pub overall_readiness_score: f64,
}

/// One inferred target role with its fit score and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRoleFit {
    pub role: String,
    pub fit_score: f64,
    pub why_this_role: String,
    pub risk_level: RiskLevel,
}

/// Capability decomposition across the four fixed dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityMap {
    pub technical: Vec<String>,
    pub domain: Vec<String>,
    pub cognitive: Vec<String>,
    pub communication_leadership: Vec<String>,
}

/// Per-skill comparison of current vs expected proficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: f64,
    pub expected_level: f64,
    pub gap: f64,
    pub priority: GapPriority,
    pub rationale: String,
}

/// One stage of the phased roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase_name: String,
    pub objective: String,
    pub skills_to_build: Vec<String>,
    pub recommended_actions: Vec<String>,
    pub success_indicators: Vec<String>,
    pub estimated_time_months: f64,
}

/// The full phased roadmap. `difficulty_level` is free text by design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub target_role: String,
    pub estimated_duration_months: f64,
    pub difficulty_level: String,
    pub phases: Vec<RoadmapPhase>,
}

/// Three strategic advice lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicAdvice {
    pub what_to_focus_on: Vec<String>,
    pub what_to_avoid: Vec<String>,
    pub career_leverage_moves: Vec<String>,
}

/// The complete structured analysis returned by the external model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerAnalysis {
    pub career_summary: CareerSummary,
    pub target_roles_analysis: Vec<TargetRoleFit>,
    pub capability_map: CapabilityMap,
    pub skill_gap_matrix: Vec<SkillGap>,
    pub career_architecture_roadmap: Roadmap,
    pub strategic_advice: StrategicAdvice,
}

/// Immutable envelope around one successful analysis. Created once per call;
/// a new record replaces any prior one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub analysis: CareerAnalysis,
}

impl AnalysisRecord {
    pub fn new(analysis: CareerAnalysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            analysis,
        }
    }
}

/// Well-formed response fixture shared by tests across the crate.
#[cfg(test)]
pub(crate) const SAMPLE_ANALYSIS_JSON: &str = r#"{
    "career_summary": {
        "current_state": "Junior developer with solid fundamentals but narrow production exposure.",
        "career_risks": ["Skill set concentrated in one framework", "No ownership of production systems"],
        "career_strengths": ["Fast learner", "Strong SQL grounding"],
        "overall_readiness_score": 42
    },
    "target_roles_analysis": [
        {
            "role": "Mid-level Full-Stack Engineer",
            "fit_score": 71,
            "why_this_role": "Natural extension of current React and SQL experience.",
            "risk_level": "low"
        },
        {
            "role": "Platform Engineer",
            "fit_score": 48,
            "why_this_role": "Requires infrastructure depth not yet demonstrated.",
            "risk_level": "medium"
        }
    ],
    "capability_map": {
        "technical": ["React", "SQL"],
        "domain": ["SaaS delivery"],
        "cognitive": ["Pattern recognition"],
        "communication_leadership": ["Written updates"]
    },
    "skill_gap_matrix": [
        {
            "skill": "React",
            "current_level": 4,
            "expected_level": 8,
            "gap": 4,
            "priority": "critical",
            "rationale": "Target roles expect senior-level component architecture."
        },
        {
            "skill": "SQL",
            "current_level": 6,
            "expected_level": 7,
            "gap": 1,
            "priority": "low",
            "rationale": "Close to expectation; maintain through practice."
        }
    ],
    "career_architecture_roadmap": {
        "target_role": "Mid-level Full-Stack Engineer",
        "estimated_duration_months": 18,
        "difficulty_level": "Moderate",
        "phases": [
            {
                "phase_name": "Foundation Hardening",
                "objective": "Close the React architecture gap.",
                "skills_to_build": ["Component architecture", "State management"],
                "recommended_actions": ["Ship two production features end-to-end"],
                "success_indicators": ["Leads a feature without review escalations"],
                "estimated_time_months": 6
            },
            {
                "phase_name": "Ownership Expansion",
                "objective": "Own a service in production.",
                "skills_to_build": ["Observability", "Incident response"],
                "recommended_actions": ["Take the on-call rotation for one quarter"],
                "success_indicators": ["Resolves incidents without senior support"],
                "estimated_time_months": 12
            }
        ]
    },
    "strategic_advice": {
        "what_to_focus_on": ["Depth in the existing stack before breadth"],
        "what_to_avoid": ["Chasing framework churn"],
        "career_leverage_moves": ["Publish post-incident writeups internally"]
    }
}"#;

#[cfg(test)]
pub(crate) fn sample_analysis() -> CareerAnalysis {
    serde_json::from_str(SAMPLE_ANALYSIS_JSON).expect("sample analysis fixture must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_analysis_deserializes_correctly() {
        let analysis = sample_analysis();
        assert_eq!(analysis.career_summary.overall_readiness_score, 42.0);
        assert_eq!(analysis.target_roles_analysis.len(), 2);
        assert_eq!(
            analysis.target_roles_analysis[1].risk_level,
            RiskLevel::Medium
        );
        assert_eq!(analysis.skill_gap_matrix.len(), 2);
        assert_eq!(analysis.skill_gap_matrix[0].priority, GapPriority::Critical);
        assert_eq!(analysis.career_architecture_roadmap.phases.len(), 2);
        assert_eq!(
            analysis.career_architecture_roadmap.difficulty_level,
            "Moderate"
        );
        assert_eq!(analysis.strategic_advice.career_leverage_moves.len(), 1);
    }

    #[test]
    fn test_risk_level_serde_round_trip() {
        let level: RiskLevel = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(level, RiskLevel::High);
        assert_eq!(serde_json::to_string(&level).unwrap(), r#""high""#);
    }

    #[test]
    fn test_priority_rejects_values_outside_the_tiers() {
        assert!(serde_json::from_str::<GapPriority>(r#""urgent""#).is_err());
        assert!(serde_json::from_str::<RiskLevel>(r#""extreme""#).is_err());
    }

    #[test]
    fn test_missing_required_field_is_a_parse_error() {
        // career_summary.current_state removed: must fail at parse time, not
        // surface as a rendering crash later.
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE_ANALYSIS_JSON).unwrap();
        value["career_summary"]
            .as_object_mut()
            .unwrap()
            .remove("current_state");
        assert!(serde_json::from_value::<CareerAnalysis>(value).is_err());
    }

    #[test]
    fn test_record_wraps_analysis_with_identity() {
        let record = AnalysisRecord::new(sample_analysis());
        let other = AnalysisRecord::new(sample_analysis());
        assert_ne!(record.id, other.id);
        assert_eq!(record.analysis, other.analysis);
    }
}
