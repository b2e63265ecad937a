use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::document::UploadedDocument;

/// A criterion as presented to the document-understanding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionBrief {
    pub id: String,
    pub description: String,
}

/// Everything the document-understanding service needs for one review:
/// the active disease's ordered criteria and the uploaded documents.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub disease_id: u32,
    pub disease_name: String,
    pub logic_description: String,
    pub criteria: Vec<CriterionBrief>,
    pub documents: Vec<UploadedDocument>,
}
