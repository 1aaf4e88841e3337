pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers::handle_evaluate_answers;
use crate::generation::handlers::handle_generate_questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_questions", post(handle_generate_questions))
        .route("/evaluate_answers", post(handle_evaluate_answers))
        .with_state(state)
}
