use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A submitted review decision. Immutable once created; only ever
/// appended to the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuditRecord {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    pub applicant_name: String,
    pub applicant_id_number: String,
    pub disease_id: u32,
    pub disease_name: String,
    pub result: ReviewResult,
    /// Satisfied criterion ids, in catalog order.
    pub criteria_met: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum ReviewResult {
    Pass,
    Fail,
}

impl ReviewResult {
    pub fn from_eligible(eligible: bool) -> Self {
        if eligible { Self::Pass } else { Self::Fail }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for ReviewResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
