//! Axum route handlers for question generation.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{generate_questions, QuestionRequest};
use crate::generation::parser::Question;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate_questions
///
/// Builds the generation prompt from the request fields and returns the
/// model's questions. All request fields are optional; output without a
/// `questions` key yields an empty list rather than an error.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let questions = generate_questions(state.llm.as_ref(), &request).await?;

    Ok(Json(QuestionsResponse { questions }))
}
