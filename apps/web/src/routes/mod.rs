pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form surface
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate_form))
        // JSON API
        .route("/api/v1/bullets", post(handlers::handle_generate_api))
        .with_state(state)
}
