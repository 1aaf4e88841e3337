// LLM prompt constants for question generation.

/// Question-generation prompt template.
/// Replace: {format_instructions}, {job_title}, {topics}, {experience_year}.
pub const GENERATE_QUESTIONS_TEMPLATE: &str = r#"You are an interviewer for a company.
Generate exactly 5 interview questions.

Return only a JSON object matching the schema:
{format_instructions}

Job Title: {job_title}
Topics: {topics}
Experience Year: {experience_year}"#;
