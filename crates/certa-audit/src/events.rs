use certa_core::models::applicant::mask_id_number;
use certa_core::models::record::AuditRecord;
use serde::Serialize;
use tracing::info;

/// A structured audit event for review actions.
///
/// These events are logged via `tracing` so they land in whatever sink the
/// host configures. The audit trail holds the decisions themselves; these
/// events add the surrounding activity.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEvent {
    pub action: &'static str,
    pub disease_id: u32,
    pub record_id: Option<String>,
    pub result: Option<String>,
    pub applicant: Option<String>,
}

impl ReviewEvent {
    pub fn new(action: &'static str, disease_id: u32) -> Self {
        Self {
            action,
            disease_id,
            record_id: None,
            result: None,
            applicant: None,
        }
    }

    /// Event for an accepted submission. The applicant id number is masked.
    pub fn submitted(record: &AuditRecord) -> Self {
        Self {
            action: "record_submitted",
            disease_id: record.disease_id,
            record_id: Some(record.id.to_string()),
            result: Some(record.result.to_string()),
            applicant: Some(mask_id_number(&record.applicant_id_number)),
        }
    }

    /// Emit this audit event via tracing.
    pub fn emit(&self) {
        info!(
            audit.action = self.action,
            audit.disease_id = self.disease_id,
            audit.record_id = self.record_id.as_deref().unwrap_or("-"),
            audit.result = self.result.as_deref().unwrap_or("-"),
            audit.applicant = self.applicant.as_deref().unwrap_or("-"),
            "audit event"
        );
    }
}
