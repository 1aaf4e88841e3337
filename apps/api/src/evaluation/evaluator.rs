//! Answer evaluation pipeline.
//!
//! Renders numbered question/answer pairs into the evaluation prompt, calls
//! the model once, and parses the reply strictly. The parsed JSON is passed
//! through untouched; this service does not rescore or reshape what the
//! model produced.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::parser::parse_evaluation;
use crate::evaluation::prompts::EVALUATE_ANSWERS_TEMPLATE;
use crate::llm_client::LlmProvider;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for answer evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub questions: Vec<EvalQuestion>,
    #[serde(default)]
    pub answers: Vec<String>,
}

/// A question as interview clients store it. Extra fields are ignored and
/// a missing `question` renders as an empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalQuestion {
    #[serde(default)]
    pub question: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Renders numbered question/answer pairs for the prompt.
fn render_qa_pairs(questions: &[EvalQuestion], answers: &[String]) -> String {
    questions
        .iter()
        .zip(answers)
        .enumerate()
        .map(|(i, (q, a))| format!("Q{}: {}\nA{}: {}", i + 1, q.question, i + 1, a))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Fills the evaluation template with rendered pairs.
pub fn build_evaluate_prompt(questions: &[EvalQuestion], answers: &[String]) -> String {
    EVALUATE_ANSWERS_TEMPLATE.replace("{qa_pairs}", &render_qa_pairs(questions, answers))
}

/// Runs the evaluation pipeline: prompt, single model call, strict parse.
///
/// Callers must have validated that `questions` and `answers` are non-empty
/// and of equal length.
pub async fn evaluate_answers(
    llm: &dyn LlmProvider,
    questions: &[EvalQuestion],
    answers: &[String],
) -> Result<Value, AppError> {
    info!("Evaluating {} answers", answers.len());

    let prompt = build_evaluate_prompt(questions, answers);
    let raw = llm.complete(&prompt).await?;

    parse_evaluation(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::MockLlm;
    use serde_json::json;

    fn make_questions(texts: &[&str]) -> Vec<EvalQuestion> {
        texts
            .iter()
            .map(|t| EvalQuestion {
                question: t.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_qa_pairs_are_numbered_from_one() {
        let questions = make_questions(&["What is TCP?", "What is UDP?"]);
        let answers = vec!["A protocol.".to_string(), "Another one.".to_string()];

        let rendered = render_qa_pairs(&questions, &answers);
        assert_eq!(
            rendered,
            "Q1: What is TCP?\nA1: A protocol.\n\nQ2: What is UDP?\nA2: Another one."
        );
    }

    #[test]
    fn test_prompt_embeds_pairs_and_keeps_json_example() {
        let questions = make_questions(&["Why Rust?"]);
        let answers = vec!["Memory safety.".to_string()];

        let prompt = build_evaluate_prompt(&questions, &answers);
        assert!(prompt.contains("Q1: Why Rust?"));
        assert!(prompt.contains("A1: Memory safety."));
        assert!(prompt.contains("\"per_answer\""));
        assert!(!prompt.contains("{qa_pairs}"));
    }

    #[test]
    fn test_questions_tolerate_missing_question_field() {
        let request: EvaluationRequest = serde_json::from_str(
            r#"{"questions": [{"description": "no question key"}], "answers": ["a"]}"#,
        )
        .unwrap();
        assert_eq!(request.questions[0].question, "");
    }

    #[tokio::test]
    async fn test_pipeline_returns_model_json_verbatim() {
        let reply = json!({
            "per_answer": [
                {"question_index": 0, "feedback": "good", "relevance_score": 8, "grammar_score": 9}
            ],
            "overall_feedback": "well done",
            "overall_score": 8
        });
        let llm = MockLlm::returning(&format!("```json\n{reply}\n```"));

        let questions = make_questions(&["Why Rust?"]);
        let answers = vec!["Memory safety.".to_string()];
        let value = evaluate_answers(&llm, &questions, &answers).await.unwrap();

        assert_eq!(value, reply);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_pipeline_rejects_non_json_output() {
        let llm = MockLlm::returning("Overall this was a strong performance.");

        let questions = make_questions(&["Why Rust?"]);
        let answers = vec!["Memory safety.".to_string()];
        let err = evaluate_answers(&llm, &questions, &answers)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::OutputParse { .. }));
    }

    #[tokio::test]
    async fn test_pipeline_propagates_provider_errors() {
        let llm = MockLlm::failing("upstream down");

        let questions = make_questions(&["Why Rust?"]);
        let answers = vec!["Memory safety.".to_string()];
        let err = evaluate_answers(&llm, &questions, &answers)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(_)));
    }
}
