// Question generation: prompt assembly, model call, and output repair for
// POST /generate_questions. All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod schema;
