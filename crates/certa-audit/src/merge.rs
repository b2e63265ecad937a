//! One-way folding of machine suggestions into a reviewer's selection.
//!
//! Suggestions are evidence-discovery aids. A satisfied suggestion may add
//! a criterion; nothing here ever removes one. Only the reviewer un-checks.

use std::collections::BTreeMap;

use certa_catalog::rule::Selection;
use certa_core::models::applicant::ApplicantInfo;
use certa_core::models::suggestion::{AnalysisPayload, EvidenceSuggestion};

/// Suggestions keyed by criterion id.
pub type Suggestions = BTreeMap<String, EvidenceSuggestion>;

/// Union of the current selection with every satisfied suggestion.
///
/// The result is always a superset of `current`. Unsatisfied or absent
/// suggestions have no effect.
pub fn merge(current: &Selection, suggestions: &Suggestions) -> Selection {
    let mut merged = current.clone();
    merged.extend(
        suggestions
            .iter()
            .filter(|(_, s)| s.is_satisfied)
            .map(|(id, _)| id.clone()),
    );
    merged
}

/// Key a payload's findings by criterion id. Blank ids are dropped; the
/// first finding for an id wins.
pub fn suggestions_from_payload(payload: &AnalysisPayload) -> Suggestions {
    let mut out = Suggestions::new();
    for finding in &payload.analysis {
        let suggestion = EvidenceSuggestion::from(finding);
        if suggestion.criterion_id.is_empty() {
            continue;
        }
        out.entry(suggestion.criterion_id.clone()).or_insert(suggestion);
    }
    out
}

/// Which identity fields a prefill actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prefill {
    pub name: bool,
    pub id_number: bool,
}

impl Prefill {
    pub fn any(&self) -> bool {
        self.name || self.id_number
    }
}

/// Fill empty identity fields from extracted applicant info. A field the
/// reviewer has already typed into is never overwritten.
pub fn prefill(name: &mut String, id_number: &mut String, info: &ApplicantInfo) -> Prefill {
    let mut filled = Prefill::default();
    if name.trim().is_empty()
        && let Some(extracted) = info.name()
    {
        *name = extracted.to_string();
        filled.name = true;
    }
    if id_number.trim().is_empty()
        && let Some(extracted) = info.id_number()
    {
        *id_number = extracted.to_string();
        filled.id_number = true;
    }
    filled
}
