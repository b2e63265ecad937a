use certa_core::error::ReviewError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("too many {kind} attachments: {count} (limit {limit})")]
    TooManyAttachments {
        kind: &'static str,
        count: usize,
        limit: usize,
    },

    #[error("no documents to analyze")]
    NoDocuments,

    #[error("model did not answer within {0}s")]
    Timeout(u64),
}

/// Service failures leave the session usable for manual review; an
/// unparseable answer degrades to "no suggestions".
impl From<BedrockError> for ReviewError {
    fn from(e: BedrockError) -> Self {
        match e {
            BedrockError::SchemaViolation(msg) => ReviewError::MalformedSuggestionPayload(msg),
            other => ReviewError::SuggestionServiceUnavailable(other.to_string()),
        }
    }
}
