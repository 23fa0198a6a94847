pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route("/api/v1/models", get(handlers::handle_list_models))
        .route(
            "/api/v1/settings",
            get(handlers::handle_get_settings).put(handlers::handle_update_settings),
        )
        .route("/api/v1/dashboard", get(handlers::handle_dashboard))
        .with_state(state)
}
