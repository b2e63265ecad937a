use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::applicant::ApplicantInfo;

/// Advisory evidence for a single criterion. Never authoritative: a
/// satisfied suggestion may add a criterion to the selection, nothing
/// else may remove one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvidenceSuggestion {
    pub criterion_id: String,
    pub is_satisfied: bool,
    pub rationale: String,
}

/// Structured output of the document-understanding service.
///
/// Every field is optional and untrusted. Missing sections deserialize to
/// their empty defaults so a sparse payload degrades to "no suggestions".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisPayload {
    #[serde(default, alias = "applicantInfo")]
    pub applicant_info: Option<ApplicantInfo>,
    #[serde(default)]
    pub analysis: Vec<CriterionFinding>,
    #[serde(default, alias = "overallAssessment")]
    pub overall_assessment: Option<OverallAssessment>,
}

/// One per-criterion finding as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CriterionFinding {
    #[serde(default, alias = "criterionId")]
    pub criterion_id: String,
    #[serde(default, alias = "isMet")]
    pub is_met: bool,
    #[serde(default)]
    pub reasoning: String,
}

impl From<&CriterionFinding> for EvidenceSuggestion {
    fn from(finding: &CriterionFinding) -> Self {
        Self {
            criterion_id: finding.criterion_id.trim().to_string(),
            is_satisfied: finding.is_met,
            rationale: finding.reasoning.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OverallAssessment {
    pub suggestion: AdvisoryVerdict,
    #[serde(default)]
    pub summary: String,
}

/// The service's overall recommendation. `Review` means critical
/// documents are missing and a human must decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum AdvisoryVerdict {
    Pass,
    Fail,
    Review,
}
