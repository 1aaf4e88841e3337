//! Question generation pipeline.
//!
//! Assembles the prompt from request fields, calls the model once, and maps
//! the parse outcome onto the response contract: schema-shaped output passes
//! through, output without a `questions` key degrades to an empty list, and
//! output that is not JSON at all fails the request.

use std::fmt;

use anyhow::anyhow;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::parser::{parse_questions, Question, QuestionParse};
use crate::generation::prompts::GENERATE_QUESTIONS_TEMPLATE;
use crate::generation::schema::{format_instructions, QUESTION_SCHEMAS};
use crate::llm_client::LlmProvider;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for question generation.
///
/// Every field is optional. Absent fields become neutral defaults so the
/// prompt still renders; validation never rejects this request.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub topics: String,
    #[serde(default)]
    pub experience_year: ExperienceYear,
}

/// Years of experience as clients send it: a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExperienceYear {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ExperienceYear {
    fn default() -> Self {
        ExperienceYear::Text("0".to_string())
    }
}

impl fmt::Display for ExperienceYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceYear::Number(n) => write!(f, "{n}"),
            ExperienceYear::Text(s) => f.write_str(s),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Fills the generation template with request fields and format instructions.
pub fn build_generate_prompt(request: &QuestionRequest) -> String {
    GENERATE_QUESTIONS_TEMPLATE
        .replace(
            "{format_instructions}",
            &format_instructions(QUESTION_SCHEMAS),
        )
        .replace("{job_title}", &request.job_title)
        .replace("{topics}", &request.topics)
        .replace("{experience_year}", &request.experience_year.to_string())
}

/// Runs the generation pipeline: prompt, single model call, parse with repair.
pub async fn generate_questions(
    llm: &dyn LlmProvider,
    request: &QuestionRequest,
) -> Result<Vec<Question>, AppError> {
    info!(
        "Generating questions: job_title={:?}, experience_year={}",
        request.job_title, request.experience_year
    );

    let prompt = build_generate_prompt(request);
    let raw = llm.complete(&prompt).await?;

    match parse_questions(&raw) {
        QuestionParse::Parsed(questions) => {
            info!("Parsed {} questions from model output", questions.len());
            Ok(questions)
        }
        QuestionParse::Empty => {
            warn!("Model output had no `questions` key, returning an empty list");
            Ok(Vec::new())
        }
        QuestionParse::Malformed { raw, detail } => {
            warn!("Question output unparseable after repair: {detail}; raw: {raw}");
            Err(AppError::Internal(anyhow!(
                "failed to parse question output: {detail}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::MockLlm;

    fn make_request() -> QuestionRequest {
        QuestionRequest {
            job_title: "Backend Engineer".to_string(),
            topics: "Rust, databases".to_string(),
            experience_year: ExperienceYear::Number(serde_json::Number::from(3)),
        }
    }

    #[test]
    fn test_prompt_fills_all_placeholders() {
        let prompt = build_generate_prompt(&make_request());
        assert!(prompt.contains("Job Title: Backend Engineer"));
        assert!(prompt.contains("Topics: Rust, databases"));
        assert!(prompt.contains("Experience Year: 3"));
        assert!(prompt.contains("\"questions\": array"));
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{format_instructions}"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let request: QuestionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.job_title, "");
        assert_eq!(request.topics, "");
        assert_eq!(request.experience_year.to_string(), "0");

        // The prompt still renders with nothing supplied.
        let prompt = build_generate_prompt(&request);
        assert!(prompt.contains("Job Title: \nTopics: \nExperience Year: 0"));
    }

    #[test]
    fn test_experience_year_accepts_number_or_string() {
        let numeric: QuestionRequest =
            serde_json::from_str(r#"{"experience_year": 2.5}"#).unwrap();
        assert_eq!(numeric.experience_year.to_string(), "2.5");

        let text: QuestionRequest =
            serde_json::from_str(r#"{"experience_year": "5+ years"}"#).unwrap();
        assert_eq!(text.experience_year.to_string(), "5+ years");
    }

    #[tokio::test]
    async fn test_pipeline_returns_parsed_questions() {
        let llm = MockLlm::returning(
            r#"{"questions": [{"question": "Q1", "description": "D1"}]}"#,
        );
        let questions = generate_questions(&llm, &make_request()).await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Q1");
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_pipeline_is_deterministic_for_identical_input() {
        let llm = MockLlm::returning(
            r#"{"questions": [{"question": "Q1", "description": "D1"}]}"#,
        );
        let request = make_request();

        let first = generate_questions(&llm, &request).await.unwrap();
        let second = generate_questions(&llm, &request).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_pipeline_degrades_to_empty_on_missing_key() {
        let llm = MockLlm::returning(r#"{"message": "no questions"}"#);
        let questions = generate_questions(&llm, &make_request()).await.unwrap();
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn test_pipeline_fails_on_unparseable_output() {
        let llm = MockLlm::returning("not json at all");
        let err = generate_questions(&llm, &make_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_pipeline_propagates_provider_errors() {
        let llm = MockLlm::failing("quota exceeded");
        let err = generate_questions(&llm, &make_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert_eq!(llm.call_count(), 1);
    }
}
