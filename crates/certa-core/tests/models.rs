use certa_core::models::applicant::{ApplicantInfo, mask_id_number};
use certa_core::models::document::DocumentKind;
use certa_core::models::record::{AuditRecord, ReviewResult};
use certa_core::models::suggestion::{AdvisoryVerdict, AnalysisPayload};

#[test]
fn applicant_fields_are_trimmed_and_blank_means_absent() {
    let info = ApplicantInfo {
        name: Some("  李伟 ".into()),
        id_number: Some("   ".into()),
    };
    assert_eq!(info.name(), Some("李伟"));
    assert_eq!(info.id_number(), None);
}

#[test]
fn id_numbers_are_masked_to_last_four() {
    assert_eq!(mask_id_number("360102199001011234"), "**************1234");
    assert_eq!(mask_id_number("123"), "***");
}

#[test]
fn document_kind_follows_extension() {
    assert_eq!(DocumentKind::from_filename("scan.JPG"), Some(DocumentKind::Jpeg));
    assert_eq!(DocumentKind::from_filename("report.final.docx"), Some(DocumentKind::Docx));
    assert_eq!(DocumentKind::from_filename("noext"), None);
    assert_eq!(DocumentKind::from_filename("notes.txt"), None);
    assert!(DocumentKind::Webp.is_image());
    assert!(!DocumentKind::Pdf.is_image());
}

#[test]
fn payload_accepts_camel_case_keys() {
    let payload: AnalysisPayload = serde_json::from_str(
        r#"{
            "applicantInfo": { "name": "李伟", "idNumber": "360102199001011234" },
            "analysis": [ { "criterionId": "1", "isMet": true, "reasoning": "出院小结" } ],
            "overallAssessment": { "suggestion": "REVIEW" }
        }"#,
    )
    .unwrap();

    assert_eq!(payload.applicant_info.unwrap().id_number(), Some("360102199001011234"));
    assert_eq!(payload.analysis[0].criterion_id, "1");
    assert!(payload.analysis[0].is_met);
    let overall = payload.overall_assessment.unwrap();
    assert_eq!(overall.suggestion, AdvisoryVerdict::Review);
    assert!(overall.summary.is_empty());
}

#[test]
fn sparse_payload_degrades_to_empty() {
    let payload: AnalysisPayload = serde_json::from_str(r#"{ "analysis": [ {} ] }"#).unwrap();
    assert!(payload.applicant_info.is_none());
    assert_eq!(payload.analysis[0].criterion_id, "");
    assert!(!payload.analysis[0].is_met);
    assert_eq!(serde_json::from_str::<AnalysisPayload>("{}").unwrap(), AnalysisPayload::default());
}

#[test]
fn record_serializes_result_in_uppercase() {
    let record = AuditRecord {
        id: uuid::Uuid::nil(),
        timestamp: "2024-05-01T08:30:00Z".parse().unwrap(),
        applicant_name: "Li Wei".into(),
        applicant_id_number: "360102199001011234".into(),
        disease_id: 7,
        disease_name: "7. 慢性肾功能衰竭（尿毒症期）".into(),
        result: ReviewResult::from_eligible(true),
        criteria_met: vec!["1".into(), "3".into()],
        notes: String::new(),
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["result"], "PASS");
    assert_eq!(json["timestamp"], "2024-05-01T08:30:00Z");
    assert_eq!(json["criteria_met"], serde_json::json!(["1", "3"]));

    let back: AuditRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
    assert_eq!(ReviewResult::Fail.to_string(), "FAIL");
}
