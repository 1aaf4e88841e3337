// LLM prompt constants for answer evaluation.

/// Answer-evaluation prompt template. Replace: {qa_pairs}.
///
/// The literal JSON example below is part of the prompt text; only the
/// {qa_pairs} placeholder gets substituted.
pub const EVALUATE_ANSWERS_TEMPLATE: &str = r#"You are an expert interviewer and grammar evaluator.
Evaluate EACH answer for:
1) Relevance and technical correctness
2) Grammar and fluency
Provide concise, actionable feedback per answer.

Question-answer pairs:
{qa_pairs}

Return ONLY a JSON object:
{ "per_answer":[{"question_index":0,"feedback":"...","relevance_score":0,"grammar_score":0}],
"overall_feedback":"...","overall_score":0 }"#;
