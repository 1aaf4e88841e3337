// Answer evaluation: prompt assembly, model call, and strict parsing for
// POST /evaluate_answers. All LLM calls go through llm_client.

pub mod evaluator;
pub mod handlers;
pub mod parser;
pub mod prompts;
