pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::form::handlers as form_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile form
        .route("/api/v1/session", get(form_handlers::handle_get_session))
        .route(
            "/api/v1/profile",
            get(form_handlers::handle_get_profile).put(form_handlers::handle_update_profile),
        )
        .route(
            "/api/v1/profile/skills",
            post(form_handlers::handle_add_skill),
        )
        .route(
            "/api/v1/profile/skills/:index",
            patch(form_handlers::handle_update_skill).delete(form_handlers::handle_remove_skill),
        )
        // Analysis + dashboard
        .route(
            "/api/v1/analysis",
            post(analysis_handlers::handle_analyze).get(analysis_handlers::handle_get_analysis),
        )
        .route(
            "/api/v1/dashboard",
            get(analysis_handlers::handle_get_dashboard),
        )
        .route("/api/v1/reset", post(form_handlers::handle_reset))
        .with_state(state)
}
