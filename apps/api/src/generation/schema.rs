//! Formal output schema for question generation.
//!
//! The schema description inside the prompt is generated from these
//! definitions, so the instructions sent to the model and the shape the
//! parser expects cannot drift apart.

/// One field of the expected top-level JSON object.
#[derive(Debug)]
pub struct ResponseSchema {
    pub name: &'static str,
    pub field_type: &'static str,
    pub description: &'static str,
}

/// The question-generation output: a single `questions` array.
pub const QUESTION_SCHEMAS: &[ResponseSchema] = &[ResponseSchema {
    name: "questions",
    field_type: "array",
    description: "A list of 5 interview questions, each with 'question' and 'description'",
}];

/// Renders the schema fields as an annotated JSON object block for the prompt.
pub fn format_instructions(schemas: &[ResponseSchema]) -> String {
    let fields = schemas
        .iter()
        .map(|s| format!("\t\"{}\": {}  // {}", s.name, s.field_type, s.description))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("{{\n{fields}\n}}")
}
