//! Repair helpers for raw model output.
//!
//! Models wrap JSON in markdown fences or surround it with prose despite
//! instructions not to. These pure functions strip that wrapping so the
//! parsers can retry; they never rewrite the JSON itself.

/// Strips an enclosing markdown code fence from `text`.
///
/// Tolerates the common variants rather than slicing lines by index: a fence
/// with or without a language tag, and an unterminated fence where the model
/// stopped before the closing marker. Input without a leading fence comes
/// back unchanged apart from trimming.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the remainder of the fence line (an optional language tag).
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim()
}

/// Returns the outermost `{..}` slice of `text`, if any.
///
/// Last repair step for question output: models sometimes surround the JSON
/// object with explanatory prose on both sides.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
