pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::intake::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake API: one session per candidate, one action per request
        .route(
            "/api/v1/intake/sessions",
            post(handlers::handle_create_session),
        )
        .route(
            "/api/v1/intake/sessions/:id",
            get(handlers::handle_get_session),
        )
        .route(
            "/api/v1/intake/sessions/:id/events",
            post(handlers::handle_session_event),
        )
        .with_state(state)
}
