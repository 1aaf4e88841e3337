//! Output parser for question generation.
//!
//! Turns raw model text into a validated list of questions. Repair steps
//! exist because models wrap JSON in fences or prose despite instructions.
//! A missing `questions` key deliberately degrades to an empty list instead
//! of failing the request; callers prefer "no questions" over a hard error
//! when the model partially complies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::llm_client::repair::{extract_json_object, strip_code_fence};

/// A single generated interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub description: String,
}

/// Outcome of parsing raw question output.
#[derive(Debug)]
pub enum QuestionParse {
    /// The output matched the schema.
    Parsed(Vec<Question>),
    /// Valid JSON without a `questions` key; callers degrade to no questions.
    Empty,
    /// Not valid JSON even after repair, or `questions` had the wrong shape.
    Malformed { raw: String, detail: String },
}

/// Parses raw model text against the question schema.
///
/// Strips a code fence (a no-op for clean output), attempts a parse, and on
/// failure retries on the outermost JSON object sliced out of surrounding
/// prose.
pub fn parse_questions(raw: &str) -> QuestionParse {
    let value = match parse_with_repair(raw) {
        Ok(value) => value,
        Err(detail) => {
            return QuestionParse::Malformed {
                raw: raw.to_string(),
                detail,
            }
        }
    };

    let Some(questions) = value.get("questions") else {
        return QuestionParse::Empty;
    };

    match serde_json::from_value::<Vec<Question>>(questions.clone()) {
        Ok(questions) => QuestionParse::Parsed(questions),
        Err(e) => QuestionParse::Malformed {
            raw: raw.to_string(),
            detail: format!("`questions` is not an array of question objects: {e}"),
        },
    }
}

fn parse_with_repair(raw: &str) -> Result<Value, String> {
    let unfenced = strip_code_fence(raw);
    match serde_json::from_str::<Value>(unfenced) {
        Ok(value) => Ok(value),
        Err(e) => match extract_json_object(unfenced) {
            Some(object) => serde_json::from_str(object).map_err(|err| err.to_string()),
            None => Err(e.to_string()),
        },
    }
}
