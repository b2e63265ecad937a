//! The live review session for a single operator.
//!
//! All per-disease state lives in one [`Review`] value. Changing the disease
//! replaces that value wholesale, so checkboxes, identity fields, notes,
//! documents and suggestions can never leak from one disease into another.

use std::sync::Arc;

use certa_catalog::Catalog;
use certa_catalog::disease::Disease;
use certa_catalog::rule::{Clause, Explanation, Selection};
use certa_core::error::ReviewError;
use certa_core::models::analysis::{AnalysisRequest, CriterionBrief};
use certa_core::models::document::{DocumentMeta, UploadedDocument};
use certa_core::models::record::{AuditRecord, ReviewResult};
use certa_core::models::suggestion::{AnalysisPayload, EvidenceSuggestion, OverallAssessment};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::events::ReviewEvent;
use crate::merge::{self, Prefill, Suggestions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionPhase {
    /// Nothing has been entered for the active disease (or none is active).
    Empty,
    /// At least one field, checkbox or document has been touched.
    InProgress,
}

/// State of the document-analysis side channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum AnalysisStatus {
    Idle,
    Pending,
    Ready { suggested: usize },
    Failed { message: String },
}

/// Proof that an analysis was started against a particular session state.
///
/// A ticket is only honored while the session generation it carries is
/// still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    disease_id: u32,
}

impl AnalysisTicket {
    pub fn disease_id(&self) -> u32 {
        self.disease_id
    }
}

/// What happened to a completed analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisDisposition {
    /// Suggestions were stored. `added` lists criteria checked by
    /// auto-apply, empty unless the session auto-applies.
    Completed {
        suggested: usize,
        prefill: Prefill,
        added: Vec<String>,
    },
    /// The collaborator failed; the session carries no suggestions.
    Failed(ReviewError),
    /// The session moved on while the analysis was running.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub selected: usize,
    pub total: usize,
    pub percent: u8,
}

/// Serializable view of the session for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub disease_id: Option<u32>,
    pub disease_name: Option<String>,
    pub phase: SessionPhase,
    /// Checked criteria in catalog order.
    pub selected: Vec<String>,
    pub eligible: bool,
    pub unmet: Vec<Clause>,
    pub progress: Option<Progress>,
    pub suggestions: Vec<EvidenceSuggestion>,
    pub advisory: Option<OverallAssessment>,
    pub analysis: AnalysisStatus,
    pub applicant_name: String,
    pub applicant_id_number: String,
    pub notes: String,
    pub documents: Vec<DocumentMeta>,
}

#[derive(Debug, Clone)]
struct Review {
    disease_id: u32,
    selected: Selection,
    applicant_name: String,
    applicant_id_number: String,
    notes: String,
    suggestions: Suggestions,
    advisory: Option<OverallAssessment>,
    documents: Vec<UploadedDocument>,
    analysis: AnalysisStatus,
    touched: bool,
}

impl Review {
    fn fresh(disease_id: u32) -> Self {
        Self {
            disease_id,
            selected: Selection::new(),
            applicant_name: String::new(),
            applicant_id_number: String::new(),
            notes: String::new(),
            suggestions: Suggestions::new(),
            advisory: None,
            documents: Vec::new(),
            analysis: AnalysisStatus::Idle,
            touched: false,
        }
    }

    /// A pending analysis will be discarded on completion; stop reporting it.
    fn abandon_pending_analysis(&mut self) {
        if self.analysis == AnalysisStatus::Pending {
            self.analysis = AnalysisStatus::Idle;
        }
    }
}

pub struct AuditSession {
    catalog: Arc<Catalog>,
    review: Option<Review>,
    generation: u64,
    auto_apply: bool,
}

impl AuditSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            review: None,
            generation: 0,
            auto_apply: false,
        }
    }

    /// Merge satisfied suggestions into the selection as soon as an
    /// analysis completes, instead of waiting for `apply_suggestions`.
    pub fn with_auto_apply(mut self, auto_apply: bool) -> Self {
        self.auto_apply = auto_apply;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_disease(&self) -> Option<&Disease> {
        self.review
            .as_ref()
            .and_then(|r| self.catalog.get(r.disease_id))
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.review {
            Some(review) if review.touched => SessionPhase::InProgress,
            _ => SessionPhase::Empty,
        }
    }

    /// Make `disease_id` the active disease. Selecting the already active
    /// disease keeps the review as it is.
    pub fn select_disease(&mut self, disease_id: u32) -> Result<(), ReviewError> {
        if self.catalog.get(disease_id).is_none() {
            return Err(ReviewError::UnknownDisease(disease_id));
        }
        if self.review.as_ref().map(|r| r.disease_id) == Some(disease_id) {
            return Ok(());
        }
        self.review = Some(Review::fresh(disease_id));
        self.bump();
        ReviewEvent::new("disease_selected", disease_id).emit();
        Ok(())
    }

    pub fn clear_disease(&mut self) {
        if self.review.take().is_some() {
            self.bump();
        }
    }

    /// Discard everything entered for the active disease.
    pub fn reset(&mut self) {
        if let Some(review) = &mut self.review {
            let disease_id = review.disease_id;
            *review = Review::fresh(disease_id);
            self.bump();
            ReviewEvent::new("session_reset", disease_id).emit();
        }
    }

    /// Flip a criterion checkbox and return its new state.
    pub fn toggle_criterion(&mut self, criterion_id: &str) -> Result<bool, ReviewError> {
        let checked = {
            let (disease, review) = self.active()?;
            !review.selected.contains(criterion_id) && disease.has_criterion(criterion_id)
        };
        self.set_criterion(criterion_id, checked)?;
        Ok(checked)
    }

    pub fn set_criterion(&mut self, criterion_id: &str, checked: bool) -> Result<(), ReviewError> {
        let known = {
            let (disease, _) = self.active()?;
            disease.has_criterion(criterion_id)
        };
        let review = self.review_mut()?;
        if !known {
            return Err(ReviewError::UnknownCriterion {
                disease_id: review.disease_id,
                criterion_id: criterion_id.to_string(),
            });
        }
        if checked {
            review.selected.insert(criterion_id.to_string());
        } else {
            review.selected.remove(criterion_id);
        }
        review.touched = true;
        Ok(())
    }

    pub fn set_applicant_name(&mut self, name: impl Into<String>) -> Result<(), ReviewError> {
        let review = self.review_mut()?;
        review.applicant_name = name.into();
        review.touched = true;
        Ok(())
    }

    pub fn set_applicant_id_number(&mut self, id_number: impl Into<String>) -> Result<(), ReviewError> {
        let review = self.review_mut()?;
        review.applicant_id_number = id_number.into();
        review.touched = true;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), ReviewError> {
        let review = self.review_mut()?;
        review.notes = notes.into();
        review.touched = true;
        Ok(())
    }

    /// Attach a document. Invalidates any analysis in flight.
    pub fn attach_document(&mut self, document: UploadedDocument) -> Result<DocumentMeta, ReviewError> {
        let review = self.review_mut()?;
        let meta = document.meta();
        review.documents.push(document);
        review.touched = true;
        review.abandon_pending_analysis();
        self.bump();
        Ok(meta)
    }

    /// Remove a document. Invalidates any analysis in flight.
    pub fn remove_document(&mut self, id: Uuid) -> Result<DocumentMeta, ReviewError> {
        let review = self.review_mut()?;
        let Some(pos) = review.documents.iter().position(|d| d.id == id) else {
            return Err(ReviewError::UnknownDocument(id));
        };
        let removed = review.documents.remove(pos);
        review.abandon_pending_analysis();
        self.bump();
        Ok(removed.meta())
    }

    pub fn documents(&self) -> &[UploadedDocument] {
        self.review
            .as_ref()
            .map(|r| r.documents.as_slice())
            .unwrap_or_default()
    }

    /// Checked criteria, or an empty set when no disease is active.
    pub fn selected(&self) -> Selection {
        self.review
            .as_ref()
            .map(|r| r.selected.clone())
            .unwrap_or_default()
    }

    /// Live eligibility. Always computed from the current selection.
    pub fn is_eligible(&self) -> bool {
        match self.active() {
            Ok((disease, review)) => disease.evaluate(&review.selected),
            Err(_) => false,
        }
    }

    pub fn explain(&self) -> Option<Explanation> {
        let (disease, review) = self.active().ok()?;
        Some(disease.explain(&review.selected))
    }

    pub fn progress(&self) -> Option<Progress> {
        let (disease, review) = self.active().ok()?;
        let total = disease.criteria.len();
        let selected = review.selected.len();
        let percent = if total == 0 {
            0
        } else {
            (selected * 100 / total) as u8
        };
        Some(Progress {
            selected,
            total,
            percent,
        })
    }

    /// Start an analysis of the attached documents.
    ///
    /// Clears earlier suggestions. The returned ticket must be handed back
    /// to [`complete_analysis`](Self::complete_analysis) with the outcome.
    pub fn begin_analysis(&mut self) -> Result<(AnalysisTicket, AnalysisRequest), ReviewError> {
        let request = {
            let (disease, review) = self.active()?;
            if review.documents.is_empty() {
                return Err(ReviewError::NoDocuments);
            }
            AnalysisRequest {
                disease_id: disease.id,
                disease_name: disease.name.clone(),
                logic_description: disease.logic_description.clone(),
                criteria: disease
                    .criteria
                    .iter()
                    .map(|c| CriterionBrief {
                        id: c.id.clone(),
                        description: c.description.clone(),
                    })
                    .collect(),
                documents: review.documents.clone(),
            }
        };

        self.bump();
        let generation = self.generation;
        let review = self.review_mut()?;
        review.suggestions.clear();
        review.advisory = None;
        review.analysis = AnalysisStatus::Pending;

        debug!(
            disease_id = request.disease_id,
            documents = request.documents.len(),
            generation,
            "analysis started"
        );
        Ok((
            AnalysisTicket {
                generation,
                disease_id: request.disease_id,
            },
            request,
        ))
    }

    /// Hand back the outcome of an analysis started with `begin_analysis`.
    ///
    /// Outcomes for a superseded ticket are discarded without touching the
    /// session. Findings for criteria outside the active disease are ignored.
    pub fn complete_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisPayload, ReviewError>,
    ) -> AnalysisDisposition {
        let current = self.review.as_ref().map(|r| r.disease_id);
        if ticket.generation != self.generation || current != Some(ticket.disease_id) {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "stale analysis discarded"
            );
            return AnalysisDisposition::Discarded;
        }
        // Tickets are single use.
        self.bump();

        let Some(disease) = self.catalog.get(ticket.disease_id).cloned() else {
            return AnalysisDisposition::Discarded;
        };
        let auto_apply = self.auto_apply;
        let Some(review) = self.review.as_mut() else {
            return AnalysisDisposition::Discarded;
        };

        let payload = match outcome {
            Ok(payload) => payload,
            Err(e) => {
                warn!(disease_id = disease.id, error = %e, "analysis failed");
                review.suggestions.clear();
                review.advisory = None;
                review.analysis = AnalysisStatus::Failed {
                    message: e.to_string(),
                };
                return AnalysisDisposition::Failed(e);
            }
        };

        let mut suggestions = merge::suggestions_from_payload(&payload);
        let before = suggestions.len();
        suggestions.retain(|id, _| disease.has_criterion(id));
        if suggestions.len() < before {
            warn!(
                disease_id = disease.id,
                ignored = before - suggestions.len(),
                "analysis referenced criteria outside the active disease"
            );
        }

        let prefill = match &payload.applicant_info {
            Some(info) => merge::prefill(
                &mut review.applicant_name,
                &mut review.applicant_id_number,
                info,
            ),
            None => Prefill::default(),
        };
        if prefill.any() {
            review.touched = true;
        }

        let suggested = suggestions.len();
        review.suggestions = suggestions;
        review.advisory = payload.overall_assessment;
        review.analysis = AnalysisStatus::Ready { suggested };

        let added = if auto_apply {
            apply(&disease, review)
        } else {
            Vec::new()
        };

        info!(
            disease_id = disease.id,
            suggested,
            auto_applied = added.len(),
            "analysis completed"
        );
        AnalysisDisposition::Completed {
            suggested,
            prefill,
            added,
        }
    }

    /// Fold satisfied suggestions into the selection. Returns the criteria
    /// that were newly checked, in catalog order.
    pub fn apply_suggestions(&mut self) -> Result<Vec<String>, ReviewError> {
        let disease = self.active()?.0.clone();
        let review = self.review_mut()?;
        Ok(apply(&disease, review))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let Ok((disease, review)) = self.active() else {
            return SessionSnapshot {
                disease_id: None,
                disease_name: None,
                phase: SessionPhase::Empty,
                selected: Vec::new(),
                eligible: false,
                unmet: Vec::new(),
                progress: None,
                suggestions: Vec::new(),
                advisory: None,
                analysis: AnalysisStatus::Idle,
                applicant_name: String::new(),
                applicant_id_number: String::new(),
                notes: String::new(),
                documents: Vec::new(),
            };
        };

        let explanation = disease.explain(&review.selected);
        SessionSnapshot {
            disease_id: Some(disease.id),
            disease_name: Some(disease.name.clone()),
            phase: self.phase(),
            selected: disease.ordered_selection(&review.selected),
            eligible: explanation.satisfied,
            unmet: explanation.unmet().cloned().collect(),
            progress: self.progress(),
            suggestions: disease
                .criterion_ids()
                .filter_map(|id| review.suggestions.get(id).cloned())
                .collect(),
            advisory: review.advisory.clone(),
            analysis: review.analysis.clone(),
            applicant_name: review.applicant_name.clone(),
            applicant_id_number: review.applicant_id_number.clone(),
            notes: review.notes.clone(),
            documents: review.documents.iter().map(UploadedDocument::meta).collect(),
        }
    }

    /// Turn the current review into an audit record.
    ///
    /// Both identity fields must be non-blank. On success the session
    /// starts over on the same disease; on failure nothing changes.
    pub fn submit(&mut self) -> Result<AuditRecord, ReviewError> {
        let record = {
            let (disease, review) = self.active()?;
            let name = review.applicant_name.trim();
            let id_number = review.applicant_id_number.trim();
            if name.is_empty() || id_number.is_empty() {
                return Err(ReviewError::MissingApplicantInfo);
            }
            AuditRecord {
                id: Uuid::new_v4(),
                timestamp: jiff::Timestamp::now(),
                applicant_name: name.to_string(),
                applicant_id_number: id_number.to_string(),
                disease_id: disease.id,
                disease_name: disease.name.clone(),
                result: ReviewResult::from_eligible(disease.evaluate(&review.selected)),
                criteria_met: disease.ordered_selection(&review.selected),
                notes: review.notes.clone(),
            }
        };

        self.review = Some(Review::fresh(record.disease_id));
        self.bump();
        Ok(record)
    }

    fn active(&self) -> Result<(&Disease, &Review), ReviewError> {
        let review = self.review.as_ref().ok_or(ReviewError::NoActiveDisease)?;
        let disease = self
            .catalog
            .get(review.disease_id)
            .ok_or(ReviewError::UnknownDisease(review.disease_id))?;
        Ok((disease, review))
    }

    fn review_mut(&mut self) -> Result<&mut Review, ReviewError> {
        self.review.as_mut().ok_or(ReviewError::NoActiveDisease)
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

fn apply(disease: &Disease, review: &mut Review) -> Vec<String> {
    let merged = merge::merge(&review.selected, &review.suggestions);
    let added: Selection = merged.difference(&review.selected).cloned().collect();
    if !added.is_empty() {
        review.touched = true;
    }
    review.selected = merged;
    disease.ordered_selection(&added)
}
