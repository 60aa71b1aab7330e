//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use tracing::info;

use crate::dashboard::{build_dashboard, DashboardView};
use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Submission: freezes the draft profile, runs the one external call, and
/// stores the result. The session lock is released for the duration of the
/// call; the Loading phase itself is what keeps a second submission out.
pub async fn handle_analyze(
    State(state): State<AppState>,
) -> Result<Json<AnalysisRecord>, AppError> {
    let frozen = state.session().begin_analysis()?;

    info!(
        "analysis submitted for role {:?} with {} skills",
        frozen.role,
        frozen.skills.len()
    );

    match state.analyst.analyze(&frozen).await {
        Ok(record) => {
            state.session().complete(record.clone());
            Ok(Json(record))
        }
        Err(err) => {
            // Back to the idle form with the banner; the loading flag never
            // survives a failure
            state.session().fail(err.user_message());
            Err(err)
        }
    }
}

/// GET /api/v1/analysis
///
/// The current analysis record, or 404 before the first success.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
) -> Result<Json<AnalysisRecord>, AppError> {
    state
        .session()
        .record()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no analysis available yet".to_string()))
}

/// GET /api/v1/dashboard
///
/// The derived read-only dashboard for the current analysis record.
pub async fn handle_get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    state
        .session()
        .record()
        .map(build_dashboard)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no analysis available yet".to_string()))
}
