//! Axum route handlers for answer evaluation.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::evaluation::evaluator::{evaluate_answers, EvaluationRequest};
use crate::state::AppState;

/// Fixed message for every precondition failure on this route. Clients get
/// the same text whether a field is missing, empty, or mismatched.
const INVALID_INPUT: &str = "questions and answers must be non-empty arrays of same length";

/// POST /evaluate_answers
///
/// Validates that questions and answers are non-empty and pairwise aligned,
/// then returns the model's evaluation JSON verbatim. Nothing reaches the
/// model until validation passes.
pub async fn handle_evaluate_answers(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<Value>, AppError> {
    if request.questions.is_empty()
        || request.answers.is_empty()
        || request.questions.len() != request.answers.len()
    {
        return Err(AppError::Validation(INVALID_INPUT.to_string()));
    }

    let evaluation =
        evaluate_answers(state.llm.as_ref(), &request.questions, &request.answers).await?;

    Ok(Json(evaluation))
}
