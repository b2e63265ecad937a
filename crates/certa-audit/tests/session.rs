use std::sync::Arc;

use certa_audit::session::{AnalysisDisposition, AnalysisStatus, AuditSession, SessionPhase};
use certa_catalog::Catalog;
use certa_core::error::ReviewError;
use certa_core::models::applicant::ApplicantInfo;
use certa_core::models::document::{DocumentKind, UploadedDocument};
use certa_core::models::record::ReviewResult;
use certa_core::models::suggestion::{AdvisoryVerdict, AnalysisPayload, CriterionFinding, OverallAssessment};

fn session() -> AuditSession {
    AuditSession::new(Arc::new(Catalog::jiangxi().clone()))
}

fn pdf(name: &str) -> UploadedDocument {
    UploadedDocument::new(name, DocumentKind::Pdf, b"%PDF-1.7".to_vec())
}

fn finding(id: &str, met: bool) -> CriterionFinding {
    CriterionFinding {
        criterion_id: id.to_string(),
        is_met: met,
        reasoning: "见出院小结".to_string(),
    }
}

#[test]
fn chronic_renal_failure_end_to_end() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("1").unwrap();
    assert!(!s.is_eligible());
    s.toggle_criterion("3").unwrap();
    assert!(s.is_eligible());

    s.set_applicant_name("Li Wei").unwrap();
    s.set_applicant_id_number("360102199001011234").unwrap();
    let record = s.submit().unwrap();

    assert_eq!(record.result, ReviewResult::Pass);
    assert_eq!(record.criteria_met, vec!["1", "3"]);
    assert_eq!(record.disease_id, 7);
    assert_eq!(record.applicant_name, "Li Wei");
    assert_eq!(record.applicant_id_number, "360102199001011234");

    // Back to an empty review on the same disease.
    assert_eq!(s.active_disease().map(|d| d.id), Some(7));
    assert_eq!(s.phase(), SessionPhase::Empty);
    assert!(s.selected().is_empty());
    assert!(!s.is_eligible());
}

#[test]
fn failing_review_is_recorded_as_fail() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("2").unwrap();
    s.set_applicant_name("王芳").unwrap();
    s.set_applicant_id_number("360102198502023456").unwrap();
    s.set_notes("缺少诊断证明").unwrap();

    let record = s.submit().unwrap();
    assert_eq!(record.result, ReviewResult::Fail);
    assert_eq!(record.criteria_met, vec!["2"]);
    assert_eq!(record.notes, "缺少诊断证明");
}

#[test]
fn submission_requires_both_identity_fields() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("1").unwrap();
    s.set_applicant_name("Li Wei").unwrap();
    s.set_applicant_id_number("   ").unwrap();

    assert_eq!(s.submit(), Err(ReviewError::MissingApplicantInfo));
    // Nothing changed.
    assert_eq!(s.phase(), SessionPhase::InProgress);
    assert_eq!(s.snapshot().applicant_name, "Li Wei");
    assert!(s.selected().contains("1"));
}

#[test]
fn submit_without_disease_is_rejected() {
    let mut s = session();
    assert_eq!(s.submit(), Err(ReviewError::NoActiveDisease));
    assert_eq!(s.toggle_criterion("1"), Err(ReviewError::NoActiveDisease));
    assert_eq!(s.set_notes("x"), Err(ReviewError::NoActiveDisease));
}

#[test]
fn switching_disease_resets_everything() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("1").unwrap();
    s.set_applicant_name("Li Wei").unwrap();
    s.set_applicant_id_number("360102199001011234").unwrap();
    s.set_notes("note").unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();

    s.select_disease(2).unwrap();
    let snap = s.snapshot();
    assert_eq!(snap.disease_id, Some(2));
    assert_eq!(snap.phase, SessionPhase::Empty);
    assert!(snap.selected.is_empty());
    assert!(snap.applicant_name.is_empty());
    assert!(snap.applicant_id_number.is_empty());
    assert!(snap.notes.is_empty());
    assert!(snap.documents.is_empty());
    assert!(snap.suggestions.is_empty());
    assert_eq!(snap.analysis, AnalysisStatus::Idle);
}

#[test]
fn reselecting_the_active_disease_keeps_the_review() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("1").unwrap();
    s.select_disease(7).unwrap();
    assert!(s.selected().contains("1"));
}

#[test]
fn unknown_ids_are_rejected() {
    let mut s = session();
    assert_eq!(s.select_disease(999), Err(ReviewError::UnknownDisease(999)));
    s.select_disease(6).unwrap();
    assert_eq!(
        s.toggle_criterion("9"),
        Err(ReviewError::UnknownCriterion {
            disease_id: 6,
            criterion_id: "9".into()
        })
    );
    let missing = uuid::Uuid::new_v4();
    assert_eq!(s.remove_document(missing), Err(ReviewError::UnknownDocument(missing)));
}

#[test]
fn toggle_twice_unchecks() {
    let mut s = session();
    s.select_disease(6).unwrap();
    assert_eq!(s.toggle_criterion("2"), Ok(true));
    assert_eq!(s.toggle_criterion("2"), Ok(false));
    assert!(s.selected().is_empty());
}

#[test]
fn snapshot_tracks_eligibility_and_unmet_clauses() {
    let mut s = session();
    s.select_disease(2).unwrap();
    s.toggle_criterion("3").unwrap();
    s.toggle_criterion("1").unwrap();

    let snap = s.snapshot();
    assert_eq!(snap.selected, vec!["1", "3"]);
    assert!(!snap.eligible);
    let unmet: Vec<&str> = snap.unmet.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(unmet, vec!["(2)", "at least 2 of [(3)(4)(5)(6)]"]);

    let progress = snap.progress.unwrap();
    assert_eq!((progress.selected, progress.total, progress.percent), (2, 6, 33));

    s.set_criterion("2", true).unwrap();
    s.set_criterion("6", true).unwrap();
    let snap = s.snapshot();
    assert!(snap.eligible);
    assert!(snap.unmet.is_empty());
}

#[test]
fn analysis_requires_documents() {
    let mut s = session();
    s.select_disease(7).unwrap();
    assert_eq!(s.begin_analysis().map(|_| ()), Err(ReviewError::NoDocuments));
}

#[test]
fn analysis_request_lists_criteria_in_catalog_order() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("出院小结.pdf")).unwrap();
    let (ticket, request) = s.begin_analysis().unwrap();

    assert_eq!(ticket.disease_id(), 7);
    assert_eq!(request.disease_id, 7);
    let ids: Vec<&str> = request.criteria.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert_eq!(request.documents.len(), 1);
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Pending);
}

#[test]
fn completed_analysis_stores_suggestions_and_prefills_identity() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.set_applicant_name("Typed Name").unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();

    let payload = AnalysisPayload {
        applicant_info: Some(ApplicantInfo {
            name: Some("李伟".into()),
            id_number: Some("360102199001011234".into()),
        }),
        analysis: vec![finding("1", true), finding("3", true), finding("4", false), finding("99", true)],
        overall_assessment: Some(OverallAssessment {
            suggestion: AdvisoryVerdict::Pass,
            summary: "材料齐全".into(),
        }),
    };

    let AnalysisDisposition::Completed { suggested, prefill, added } = s.complete_analysis(ticket, Ok(payload))
    else {
        panic!("analysis should complete");
    };
    // "99" is not a criterion of disease 7.
    assert_eq!(suggested, 3);
    assert!(!prefill.name);
    assert!(prefill.id_number);
    assert!(added.is_empty());

    let snap = s.snapshot();
    assert_eq!(snap.applicant_name, "Typed Name");
    assert_eq!(snap.applicant_id_number, "360102199001011234");
    assert_eq!(snap.analysis, AnalysisStatus::Ready { suggested: 3 });
    assert_eq!(snap.advisory.map(|a| a.suggestion), Some(AdvisoryVerdict::Pass));
    // Suggestions are advisory until applied.
    assert!(snap.selected.is_empty());

    assert_eq!(s.apply_suggestions().unwrap(), vec!["1", "3"]);
    assert!(s.is_eligible());
    assert!(!s.selected().contains("99"));
    assert!(!s.selected().contains("4"));
}

#[test]
fn applying_suggestions_never_unchecks() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("4").unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();
    let payload = AnalysisPayload {
        analysis: vec![finding("1", true), finding("4", false)],
        ..Default::default()
    };
    s.complete_analysis(ticket, Ok(payload));

    assert_eq!(s.apply_suggestions().unwrap(), vec!["1"]);
    assert!(s.selected().contains("4"));
}

#[test]
fn auto_apply_merges_on_completion() {
    let mut s = session().with_auto_apply(true);
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();
    let payload = AnalysisPayload {
        analysis: vec![finding("2", true), finding("1", true)],
        ..Default::default()
    };

    match s.complete_analysis(ticket, Ok(payload)) {
        AnalysisDisposition::Completed { added, .. } => assert_eq!(added, vec!["1", "2"]),
        other => panic!("unexpected disposition: {other:?}"),
    }
    assert!(s.is_eligible());
}

#[test]
fn analysis_is_discarded_after_disease_change() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();

    s.select_disease(8).unwrap();
    let payload = AnalysisPayload {
        analysis: vec![finding("1", true)],
        ..Default::default()
    };
    assert_eq!(s.complete_analysis(ticket, Ok(payload)), AnalysisDisposition::Discarded);
    assert!(s.snapshot().suggestions.is_empty());
}

#[test]
fn analysis_is_discarded_after_switching_away_and_back() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();

    s.select_disease(8).unwrap();
    s.select_disease(7).unwrap();
    assert_eq!(
        s.complete_analysis(ticket, Ok(AnalysisPayload::default())),
        AnalysisDisposition::Discarded
    );
}

#[test]
fn analysis_is_discarded_after_document_change() {
    let mut s = session();
    s.select_disease(7).unwrap();
    let first = s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Pending);

    s.remove_document(first.id).unwrap();
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Idle);
    s.attach_document(pdf("b.pdf")).unwrap();

    let payload = AnalysisPayload {
        applicant_info: Some(ApplicantInfo {
            name: Some("李伟".into()),
            id_number: None,
        }),
        analysis: vec![finding("1", true)],
        ..Default::default()
    };
    assert_eq!(s.complete_analysis(ticket, Ok(payload)), AnalysisDisposition::Discarded);
    assert!(s.snapshot().applicant_name.is_empty());
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Idle);
}

#[test]
fn attaching_a_document_abandons_a_pending_analysis() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    s.begin_analysis().unwrap();

    s.attach_document(pdf("b.pdf")).unwrap();
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Idle);
    // A fresh analysis can start over both documents.
    let (_, request) = s.begin_analysis().unwrap();
    assert_eq!(request.documents.len(), 2);
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Pending);
}

#[test]
fn a_newer_analysis_supersedes_an_older_one() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (old, _) = s.begin_analysis().unwrap();
    let (new, _) = s.begin_analysis().unwrap();

    assert_eq!(
        s.complete_analysis(old, Ok(AnalysisPayload::default())),
        AnalysisDisposition::Discarded
    );
    assert!(matches!(
        s.complete_analysis(new, Ok(AnalysisPayload::default())),
        AnalysisDisposition::Completed { suggested: 0, .. }
    ));
    // Tickets are single use.
    assert_eq!(
        s.complete_analysis(new, Ok(AnalysisPayload::default())),
        AnalysisDisposition::Discarded
    );
}

#[test]
fn failed_analysis_degrades_to_no_suggestions() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();

    let error = ReviewError::MalformedSuggestionPayload("not json".into());
    assert_eq!(
        s.complete_analysis(ticket, Err(error.clone())),
        AnalysisDisposition::Failed(error)
    );

    let snap = s.snapshot();
    assert!(snap.suggestions.is_empty());
    assert!(matches!(snap.analysis, AnalysisStatus::Failed { .. }));
    // Manual review still works.
    s.toggle_criterion("1").unwrap();
    s.toggle_criterion("2").unwrap();
    assert!(s.is_eligible());
}

#[test]
fn timed_out_analysis_ends_failed_and_allows_a_retry() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.attach_document(pdf("a.pdf")).unwrap();
    let (ticket, _) = s.begin_analysis().unwrap();

    let error = ReviewError::SuggestionServiceUnavailable("model did not answer within 120s".into());
    assert_eq!(
        s.complete_analysis(ticket, Err(error.clone())),
        AnalysisDisposition::Failed(error)
    );
    assert_eq!(
        s.snapshot().analysis,
        AnalysisStatus::Failed {
            message: "suggestion service unavailable: model did not answer within 120s".into()
        }
    );

    s.toggle_criterion("1").unwrap();
    s.toggle_criterion("3").unwrap();
    assert!(s.is_eligible());
    s.begin_analysis().unwrap();
    assert_eq!(s.snapshot().analysis, AnalysisStatus::Pending);
}

#[test]
fn reset_clears_the_review_but_keeps_the_disease() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.toggle_criterion("1").unwrap();
    s.set_notes("x").unwrap();
    s.reset();

    let snap = s.snapshot();
    assert_eq!(snap.disease_id, Some(7));
    assert_eq!(snap.phase, SessionPhase::Empty);
    assert!(snap.selected.is_empty());
    assert!(snap.notes.is_empty());
}

#[test]
fn clearing_the_disease_empties_the_snapshot() {
    let mut s = session();
    s.select_disease(7).unwrap();
    s.clear_disease();
    let snap = s.snapshot();
    assert_eq!(snap.disease_id, None);
    assert!(!snap.eligible);
    assert!(snap.progress.is_none());
}
