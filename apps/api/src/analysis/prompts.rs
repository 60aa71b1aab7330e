// All LLM prompt constants for the Analysis module. The output contract is
// carried by the response schema, not by prompt text.

use crate::models::profile::Profile;

/// System directive for career analysis. Structured output is enforced by
/// the schema in the generation config, so this only sets the persona and
/// the analysis posture.
pub const ANALYSIS_SYSTEM: &str = "You are an AI Career Architect and Capability Strategist. \
    Model the career as a system. \
    Provide structured, evidence-driven analysis. \
    Be trade-off aware and market-oriented. \
    Be direct and professional. Assume the user can handle uncomfortable truths. \
    Prioritize clarity over positivity. \
    Write like a senior architect advising a peer.";

/// Analysis prompt template. Every profile field is embedded verbatim;
/// skills render as "name (level/10)" joined by commas.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following profile:
- Current Role: {role}
- Experience: {experience}
- Career Goals: {goals}
- Capability Signals: {skills}
- Learning Constraints: {learning_style}, {availability} hrs/week

Analyze current state, infer suitable target roles, decompose capabilities (Technical, Domain, Cognitive, Comm/Leadership), matrix the skill gaps, and architect a realistic phased roadmap."#;

/// Renders the profile into the analysis prompt.
pub fn build_analysis_prompt(profile: &Profile) -> String {
    let skills = profile
        .skills
        .iter()
        .map(|s| format!("{} ({}/10)", s.name, s.level))
        .collect::<Vec<_>>()
        .join(", ");

    ANALYSIS_PROMPT_TEMPLATE
        .replace("{role}", &profile.role)
        .replace("{experience}", &profile.experience)
        .replace("{goals}", &profile.goals)
        .replace("{skills}", &skills)
        .replace("{learning_style}", &profile.learning_style)
        .replace("{availability}", &profile.availability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::SkillRating;

    fn scenario_profile() -> Profile {
        Profile {
            role: "Junior Web Developer".to_string(),
            experience: "2 years".to_string(),
            goals: "Become CTO".to_string(),
            skills: vec![SkillRating::new("React", 4), SkillRating::new("SQL", 6)],
            learning_style: "Practical / Hands-on".to_string(),
            availability: "10".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_every_profile_field_verbatim() {
        let prompt = build_analysis_prompt(&scenario_profile());
        assert!(prompt.contains("Junior Web Developer"));
        assert!(prompt.contains("2 years"));
        assert!(prompt.contains("Become CTO"));
        assert!(prompt.contains("Practical / Hands-on"));
    }

    #[test]
    fn test_prompt_renders_skills_as_name_level_pairs() {
        let prompt = build_analysis_prompt(&scenario_profile());
        assert!(prompt.contains("React (4/10)"));
        assert!(prompt.contains("SQL (6/10)"));
        assert!(prompt.contains("React (4/10), SQL (6/10)"));
    }

    #[test]
    fn test_prompt_renders_availability_as_weekly_hours() {
        let prompt = build_analysis_prompt(&scenario_profile());
        assert!(prompt.contains("10 hrs/week"));
    }

    #[test]
    fn test_prompt_with_no_skills_leaves_signals_empty() {
        let mut profile = scenario_profile();
        profile.skills.clear();
        let prompt = build_analysis_prompt(&profile);
        assert!(prompt.contains("- Capability Signals: \n"));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let prompt = build_analysis_prompt(&scenario_profile());
        assert!(!prompt.contains('{'));
        assert!(!prompt.contains('}'));
    }
}
