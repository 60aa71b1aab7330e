use serde::{Deserialize, Serialize};

/// Canonical learning-style options offered by the form. Free text is still
/// accepted; these are the values the form presents.
pub const LEARNING_STYLES: &[&str] = &[
    "Practical / Hands-on",
    "Theoretical / Academic",
    "Visual / Conceptual",
    "Mentorship / Social",
];

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;
/// Level assigned to a freshly added skill before the user adjusts it.
pub const DEFAULT_SKILL_LEVEL: u8 = 5;

/// A single self-rated skill. Level is clamped to 1-10 on every write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    pub level: u8,
}

impl SkillRating {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level: clamp_level(level),
        }
    }
}

/// Clamps a requested skill level into the 1-10 scale the analysis expects.
pub fn clamp_level(level: u8) -> u8 {
    level.clamp(MIN_SKILL_LEVEL, MAX_SKILL_LEVEL)
}

/// The user's career profile. Entirely user-supplied, mutated in place by
/// form edits, discarded on process exit. `availability` stays free text;
/// the prompt renders it verbatim as hours per week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub role: String,
    pub experience: String,
    pub goals: String,
    pub skills: Vec<SkillRating>,
    pub learning_style: String,
    pub availability: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            role: String::new(),
            experience: String::new(),
            goals: String::new(),
            skills: Vec::new(),
            learning_style: LEARNING_STYLES[0].to_string(),
            availability: "10".to_string(),
        }
    }
}

impl Profile {
    /// Required-field names that are blank, in form order. Submission is
    /// blocked until this is empty.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.role.trim().is_empty() {
            missing.push("role");
        }
        if self.experience.trim().is_empty() {
            missing.push("experience");
        }
        if self.goals.trim().is_empty() {
            missing.push("goals");
        }
        missing
    }
}
