//! Output parser for answer evaluation.
//!
//! Evaluation output goes back to clients verbatim, so parsing is strict:
//! strip a code fence, then the text must be valid JSON. No schema is
//! imposed on the parsed value and no further repair is attempted; a
//! failure carries the cleaned text and the parse error back to the caller.

use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::repair::strip_code_fence;

/// Parses raw evaluation output into a JSON value.
pub fn parse_evaluation(raw: &str) -> Result<Value, AppError> {
    let cleaned = strip_code_fence(raw);

    serde_json::from_str(cleaned).map_err(|e| AppError::OutputParse {
        raw_output: cleaned.to_string(),
        exception: e.to_string(),
    })
}
