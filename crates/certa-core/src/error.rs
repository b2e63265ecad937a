use thiserror::Error;
use uuid::Uuid;

/// Conditions a reviewer can run into during a review. None of them is
/// fatal: the worst case is a manual review without AI assistance and
/// without durable history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("applicant name and id number are both required")]
    MissingApplicantInfo,

    #[error("suggestion service unavailable: {0}")]
    SuggestionServiceUnavailable(String),

    #[error("malformed suggestion payload: {0}")]
    MalformedSuggestionPayload(String),

    #[error("audit trail could not be persisted: {0}")]
    PersistenceWriteFailure(String),

    #[error("unknown disease: {0}")]
    UnknownDisease(u32),

    #[error("disease {disease_id} has no criterion '{criterion_id}'")]
    UnknownCriterion {
        disease_id: u32,
        criterion_id: String,
    },

    #[error("no disease selected")]
    NoActiveDisease,

    #[error("unknown document: {0}")]
    UnknownDocument(Uuid),

    #[error("no documents attached")]
    NoDocuments,
}
