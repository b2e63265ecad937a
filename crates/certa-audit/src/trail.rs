use std::collections::HashSet;

use certa_core::models::record::{AuditRecord, ReviewResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Append-only history of submitted decisions, newest first.
///
/// Records are only ever added (`append`, `absorb`), never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail {
    records: Vec<AuditRecord>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records already ordered newest first (as persisted).
    pub fn from_records(records: Vec<AuditRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: AuditRecord) {
        self.records.insert(0, record);
    }

    /// Take every record of `other` whose id is not already present.
    /// Returns how many were added. When any were, the trail is re-sorted
    /// newest first by timestamp; otherwise its order is untouched.
    pub fn absorb(&mut self, other: AuditTrail) -> usize {
        let known: HashSet<Uuid> = self.records.iter().map(|r| r.id).collect();
        let before = self.records.len();
        self.records
            .extend(other.records.into_iter().filter(|r| !known.contains(&r.id)));
        let added = self.records.len() - before;
        if added > 0 {
            self.records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        }
        added
    }

    /// Newest first.
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&AuditRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> TrailSummary {
        let passed = self
            .records
            .iter()
            .filter(|r| r.result == ReviewResult::Pass)
            .count();
        TrailSummary {
            total: self.records.len(),
            passed,
            failed: self.records.len() - passed,
        }
    }
}

/// Counts for the history header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrailSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}
