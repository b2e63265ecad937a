use std::sync::Arc;

use certa_catalog::Catalog;
use certa_core::error::ReviewError;
use certa_core::models::record::AuditRecord;

use crate::events::ReviewEvent;
use crate::persistence::{Mirror, TrailPersistence};
use crate::session::AuditSession;
use crate::trail::AuditTrail;

/// Outcome of an accepted submission.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    pub record: AuditRecord,
    /// `false` when the trail could not be written; the record is still
    /// in memory and the next flush retries.
    pub persisted: bool,
}

/// The single operator's workspace: live session, trail and where the trail
/// is kept.
pub struct ReviewDesk {
    session: AuditSession,
    trail: AuditTrail,
    persistence: Option<TrailPersistence>,
    /// Local file lacks records held in memory.
    dirty: bool,
    /// S3 copy lacks records held in memory.
    remote_dirty: bool,
}

impl ReviewDesk {
    /// An in-memory desk with no durable trail.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            session: AuditSession::new(catalog),
            trail: AuditTrail::new(),
            persistence: None,
            dirty: false,
            remote_dirty: false,
        }
    }

    /// Open a desk, loading any existing trail. Copies found lagging
    /// behind the other are rewritten on the next flush.
    pub async fn open(session: AuditSession, persistence: TrailPersistence) -> Self {
        let loaded = persistence.load().await;
        tracing::info!(records = loaded.trail.len(), "audit trail loaded");
        Self {
            session,
            trail: loaded.trail,
            persistence: Some(persistence),
            dirty: loaded.local_stale,
            remote_dirty: loaded.remote_stale,
        }
    }

    pub fn session(&self) -> &AuditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut AuditSession {
        &mut self.session
    }

    pub fn trail(&self) -> &AuditTrail {
        &self.trail
    }

    /// Whether some copy of the trail lacks records held in memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty || self.remote_dirty
    }

    /// Whether the S3 copy is behind. The local file may be current.
    pub fn is_remote_dirty(&self) -> bool {
        self.remote_dirty
    }

    /// Submit the live review, append it to the trail and write the trail.
    ///
    /// A write failure does not undo the submission.
    pub async fn submit(&mut self) -> Result<SubmitReceipt, ReviewError> {
        let record = self.session.submit()?;
        self.trail.append(record.clone());
        ReviewEvent::submitted(&record).emit();

        self.dirty = true;
        let persisted = match self.flush().await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(record_id = %record.id, error = %e, "audit trail write failed");
                false
            }
        };
        Ok(SubmitReceipt { record, persisted })
    }

    /// Rewrite the whole trail if any copy lacks records. A failed S3
    /// upload is not an error; it stays pending for the next flush.
    pub async fn flush(&mut self) -> Result<(), ReviewError> {
        if !self.is_dirty() {
            return Ok(());
        }
        let mirror = match &self.persistence {
            Some(persistence) => persistence.flush(&self.trail).await?,
            None => Mirror::Disabled,
        };
        self.dirty = false;
        self.remote_dirty = mirror == Mirror::Failed;
        Ok(())
    }
}
