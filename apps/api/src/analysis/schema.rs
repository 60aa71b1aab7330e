//! The fixed structured-output schema handed to the model with every call.
//!
//! This is the contract: object/array/string/number field types, per-object
//! required lists, and two closed enumerations. `models::analysis` is the
//! typed mirror; tests keep the two in lock-step.

use serde_json::{json, Value};

pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "career_summary": {
                "type": "OBJECT",
                "properties": {
                    "current_state": { "type": "STRING" },
                    "career_risks": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "career_strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "overall_readiness_score": { "type": "NUMBER" }
                },
                "required": [
                    "current_state",
                    "career_risks",
                    "career_strengths",
                    "overall_readiness_score"
                ]
            },
            "target_roles_analysis": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "role": { "type": "STRING" },
                        "fit_score": { "type": "NUMBER" },
                        "why_this_role": { "type": "STRING" },
                        "risk_level": { "type": "STRING", "enum": ["low", "medium", "high"] }
                    },
                    "required": ["role", "fit_score", "why_this_role", "risk_level"]
                }
            },
            "capability_map": {
                "type": "OBJECT",
                "properties": {
                    "technical": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "domain": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "cognitive": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "communication_leadership": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["technical", "domain", "cognitive", "communication_leadership"]
            },
            "skill_gap_matrix": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skill": { "type": "STRING" },
                        "current_level": { "type": "NUMBER" },
                        "expected_level": { "type": "NUMBER" },
                        "gap": { "type": "NUMBER" },
                        "priority": {
                            "type": "STRING",
                            "enum": ["critical", "high", "medium", "low"]
                        },
                        "rationale": { "type": "STRING" }
                    },
                    "required": [
                        "skill",
                        "current_level",
                        "expected_level",
                        "gap",
                        "priority",
                        "rationale"
                    ]
                }
            },
            "career_architecture_roadmap": {
                "type": "OBJECT",
                "properties": {
                    "target_role": { "type": "STRING" },
                    "estimated_duration_months": { "type": "NUMBER" },
                    "difficulty_level": { "type": "STRING" },
                    "phases": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "phase_name": { "type": "STRING" },
                                "objective": { "type": "STRING" },
                                "skills_to_build": { "type": "ARRAY", "items": { "type": "STRING" } },
                                "recommended_actions": { "type": "ARRAY", "items": { "type": "STRING" } },
                                "success_indicators": { "type": "ARRAY", "items": { "type": "STRING" } },
                                "estimated_time_months": { "type": "NUMBER" }
                            },
                            "required": [
                                "phase_name",
                                "objective",
                                "skills_to_build",
                                "recommended_actions",
                                "success_indicators",
                                "estimated_time_months"
                            ]
                        }
                    }
                },
                "required": [
                    "target_role",
                    "estimated_duration_months",
                    "difficulty_level",
                    "phases"
                ]
            },
            "strategic_advice": {
                "type": "OBJECT",
                "properties": {
                    "what_to_focus_on": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "what_to_avoid": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "career_leverage_moves": { "type": "ARRAY", "items": { "type": "STRING" } }
                },
                "required": ["what_to_focus_on", "what_to_avoid", "career_leverage_moves"]
            }
        },
        "required": [
            "career_summary",
            "target_roles_analysis",
            "capability_map",
            "skill_gap_matrix",
            "career_architecture_roadmap",
            "strategic_advice"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::sample_analysis;

    #[test]
    fn test_top_level_required_lists_all_six_sections() {
        let schema = analysis_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            vec![
                "career_summary",
                "target_roles_analysis",
                "capability_map",
                "skill_gap_matrix",
                "career_architecture_roadmap",
                "strategic_advice"
            ]
        );
    }

    #[test]
    fn test_risk_and_priority_enums_are_closed() {
        let schema = analysis_response_schema();
        assert_eq!(
            schema["properties"]["target_roles_analysis"]["items"]["properties"]["risk_level"]
                ["enum"],
            json!(["low", "medium", "high"])
        );
        assert_eq!(
            schema["properties"]["skill_gap_matrix"]["items"]["properties"]["priority"]["enum"],
            json!(["critical", "high", "medium", "low"])
        );
    }

    #[test]
    fn test_difficulty_level_stays_free_text() {
        let schema = analysis_response_schema();
        let difficulty = &schema["properties"]["career_architecture_roadmap"]["properties"]
            ["difficulty_level"];
        assert_eq!(difficulty["type"], "STRING");
        assert!(difficulty.get("enum").is_none());
    }

    #[test]
    fn test_schema_sections_match_typed_model_fields() {
        // Lock-step guard: every schema property must exist on the typed
        // mirror and vice versa.
        let schema = analysis_response_schema();
        let properties = schema["properties"].as_object().unwrap();
        let sample = serde_json::to_value(sample_analysis()).unwrap();
        let fields = sample.as_object().unwrap();

        for key in properties.keys() {
            assert!(fields.contains_key(key), "model lacks schema field {key}");
        }
        for key in fields.keys() {
            assert!(
                properties.contains_key(key),
                "schema lacks model field {key}"
            );
        }
    }

    #[test]
    fn test_phase_required_list_covers_every_phase_field() {
        let schema = analysis_response_schema();
        let phase_schema =
            &schema["properties"]["career_architecture_roadmap"]["properties"]["phases"]["items"];
        let required = phase_schema["required"].as_array().unwrap();
        let properties = phase_schema["properties"].as_object().unwrap();
        assert_eq!(required.len(), properties.len());
    }
}
