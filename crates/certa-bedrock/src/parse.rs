//! Parsing of the model's answer into an [`AnalysisPayload`].
//!
//! The answer is untrusted. Models sometimes wrap JSON in Markdown fences
//! or a sentence of prose, so the outermost JSON object is extracted
//! before deserializing.

use certa_core::models::suggestion::AnalysisPayload;

use crate::error::BedrockError;

/// Parse a model answer. A blank answer is an empty payload; anything else
/// that is not a JSON object of the expected shape is a schema violation.
pub fn parse_analysis(text: &str) -> Result<AnalysisPayload, BedrockError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(AnalysisPayload::default());
    }

    let json = extract_json_object(trimmed).ok_or_else(|| {
        BedrockError::SchemaViolation(format!("no JSON object in response: {}", preview(trimmed)))
    })?;

    serde_json::from_str(json).map_err(|e| {
        BedrockError::SchemaViolation(format!(
            "failed to parse AnalysisPayload: {e}. Response: {}",
            preview(trimmed)
        ))
    })
}

/// The slice from the first `{` to the last `}`, if any.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 200;
    if text.chars().count() <= LIMIT {
        return text.to_string();
    }
    let head: String = text.chars().take(LIMIT).collect();
    format!("{head}…")
}
