//! Profile form session: the draft profile plus the linear analysis state
//! machine Idle -> Loading -> {Ready | Idle + error banner}.
//!
//! At most one analysis is ever in flight. The transition into Loading
//! freezes a clone of the draft; later form edits never leak into a call
//! already underway.

pub mod handlers;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::models::profile::{clamp_level, Profile, SkillRating};

#[derive(Debug, Error)]
pub enum FormError {
    #[error("an analysis is already in flight")]
    AnalysisInFlight,

    #[error("required fields are empty: {0}")]
    MissingFields(String),

    #[error("no skill at index {0}")]
    SkillIndexOutOfRange(usize),
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::AnalysisInFlight => AppError::Conflict(err.to_string()),
            FormError::MissingFields(_) | FormError::SkillIndexOutOfRange(_) => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

/// Merge-patch for the scalar profile fields. Absent fields are untouched.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub role: Option<String>,
    pub experience: Option<String>,
    pub goals: Option<String>,
    pub learning_style: Option<String>,
    pub availability: Option<String>,
}

/// Edit-in-place patch for one skill row.
#[derive(Debug, Default, Deserialize)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub level: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Loading,
    Ready(AnalysisRecord),
}

/// Session status as shown to the caller: the loading flag plus the error
/// banner, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionStatus {
    pub state: &'static str,
    pub error: Option<String>,
}

/// One browser session's worth of mutable state. Nothing is persisted.
#[derive(Debug)]
pub struct Session {
    profile: Profile,
    phase: Phase,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            phase: Phase::Idle,
            error: None,
        }
    }
}

impl Session {
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        match &self.phase {
            Phase::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            state: match self.phase {
                Phase::Idle => "idle",
                Phase::Loading => "loading",
                Phase::Ready(_) => "ready",
            },
            error: self.error.clone(),
        }
    }

    /// Applies a merge-patch of the scalar form fields.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        if let Some(role) = update.role {
            self.profile.role = role;
        }
        if let Some(experience) = update.experience {
            self.profile.experience = experience;
        }
        if let Some(goals) = update.goals {
            self.profile.goals = goals;
        }
        if let Some(learning_style) = update.learning_style {
            self.profile.learning_style = learning_style;
        }
        if let Some(availability) = update.availability {
            self.profile.availability = availability;
        }
    }

    /// Appends a skill row and returns its index. No dedup of names, exactly
    /// like the form.
    pub fn add_skill(&mut self, name: String, level: u8) -> usize {
        self.profile.skills.push(SkillRating::new(name, level));
        self.profile.skills.len() - 1
    }

    pub fn update_skill(&mut self, index: usize, update: SkillUpdate) -> Result<(), FormError> {
        let skill = self
            .profile
            .skills
            .get_mut(index)
            .ok_or(FormError::SkillIndexOutOfRange(index))?;
        if let Some(name) = update.name {
            skill.name = name;
        }
        if let Some(level) = update.level {
            skill.level = clamp_level(level);
        }
        Ok(())
    }

    pub fn remove_skill(&mut self, index: usize) -> Result<SkillRating, FormError> {
        if index >= self.profile.skills.len() {
            return Err(FormError::SkillIndexOutOfRange(index));
        }
        Ok(self.profile.skills.remove(index))
    }

    /// Freezes the current draft and enters Loading.
    ///
    /// Rejects while an analysis is already in flight (the submit control is
    /// inert until the first call resolves) and while any required field is
    /// blank.
    pub fn begin_analysis(&mut self) -> Result<Profile, FormError> {
        if self.is_loading() {
            return Err(FormError::AnalysisInFlight);
        }
        let missing = self.profile.missing_required_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing.join(", ")));
        }
        self.phase = Phase::Loading;
        self.error = None;
        Ok(self.profile.clone())
    }

    /// Stores a successful result, replacing any prior record.
    pub fn complete(&mut self, record: AnalysisRecord) {
        self.phase = Phase::Ready(record);
        self.error = None;
    }

    /// Returns to the idle form with an error banner. The loading flag is
    /// always cleared on this path.
    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Idle;
        self.error = Some(message);
    }

    /// Manual reset: drops the result and the banner, keeps the draft.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.error = None;
    }
}
