//! Axum route handlers for the profile form and session surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::form::{ProfileUpdate, SessionStatus, SkillUpdate};
use crate::models::profile::{Profile, DEFAULT_SKILL_LEVEL};
use crate::state::AppState;

fn default_skill_level() -> u8 {
    DEFAULT_SKILL_LEVEL
}

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_skill_level")]
    pub level: u8,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionStatus> {
    Json(state.session().status())
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.session().profile().clone())
}

/// PUT /api/v1/profile
///
/// Merge-patch of the scalar form fields; absent fields are untouched.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Json<Profile> {
    let mut session = state.session();
    session.apply_update(update);
    Json(session.profile().clone())
}

/// POST /api/v1/profile/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Json(request): Json<AddSkillRequest>,
) -> (StatusCode, Json<Profile>) {
    let mut session = state.session();
    session.add_skill(request.name, request.level);
    (StatusCode::CREATED, Json(session.profile().clone()))
}

/// PATCH /api/v1/profile/skills/:index
pub async fn handle_update_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(update): Json<SkillUpdate>,
) -> Result<Json<Profile>, AppError> {
    let mut session = state.session();
    session.update_skill(index, update)?;
    Ok(Json(session.profile().clone()))
}

/// DELETE /api/v1/profile/skills/:index
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<Profile>, AppError> {
    let mut session = state.session();
    session.remove_skill(index)?;
    Ok(Json(session.profile().clone()))
}

/// POST /api/v1/reset
///
/// Back to the idle form. The result and banner are dropped; the draft
/// profile is kept for the next submission.
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.session().reset();
    StatusCode::NO_CONTENT
}
