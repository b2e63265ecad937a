use certa_bedrock::error::BedrockError;
use certa_bedrock::parse::parse_analysis;
use certa_core::error::ReviewError;
use certa_core::models::suggestion::AdvisoryVerdict;

#[test]
fn parses_snake_case_payload() {
    let payload = parse_analysis(
        r#"{
            "applicant_info": { "name": "Li Wei", "id_number": "360102199001011234" },
            "analysis": [
                { "criterion_id": "1", "is_met": true, "reasoning": "出院小结" },
                { "criterion_id": "2", "is_met": false, "reasoning": "缺少肾功能报告" }
            ],
            "overall_assessment": { "suggestion": "REVIEW", "summary": "需人工复核" }
        }"#,
    )
    .unwrap();

    let applicant = payload.applicant_info.unwrap();
    assert_eq!(applicant.name(), Some("Li Wei"));
    assert_eq!(applicant.id_number(), Some("360102199001011234"));
    assert_eq!(payload.analysis.len(), 2);
    assert!(payload.analysis[0].is_met);
    assert_eq!(
        payload.overall_assessment.unwrap().suggestion,
        AdvisoryVerdict::Review
    );
}

#[test]
fn accepts_camel_case_keys() {
    let payload = parse_analysis(
        r#"{
            "applicantInfo": { "name": "王芳", "idNumber": "X" },
            "analysis": [{ "criterionId": "3", "isMet": true, "reasoning": "ok" }],
            "overallAssessment": { "suggestion": "PASS", "summary": "" }
        }"#,
    )
    .unwrap();

    assert_eq!(payload.applicant_info.unwrap().id_number(), Some("X"));
    assert_eq!(payload.analysis[0].criterion_id, "3");
    assert!(payload.analysis[0].is_met);
}

#[test]
fn strips_markdown_fences_and_prose() {
    let text = "Here is the result:\n```json\n{\"analysis\": [{\"criterion_id\": \"1\", \"is_met\": true}]}\n```\n";
    let payload = parse_analysis(text).unwrap();
    assert_eq!(payload.analysis.len(), 1);
    assert_eq!(payload.analysis[0].reasoning, "");
}

#[test]
fn blank_and_empty_object_mean_no_suggestions() {
    assert!(parse_analysis("   ").unwrap().analysis.is_empty());
    let empty = parse_analysis("{}").unwrap();
    assert!(empty.analysis.is_empty());
    assert!(empty.applicant_info.is_none());
    assert!(empty.overall_assessment.is_none());
}

#[test]
fn non_json_is_a_schema_violation() {
    let err = parse_analysis("I could not read the documents.").unwrap_err();
    assert!(matches!(err, BedrockError::SchemaViolation(_)));
}

#[test]
fn wrong_shape_is_a_schema_violation() {
    let err = parse_analysis(r#"{ "analysis": "all good" }"#).unwrap_err();
    assert!(matches!(err, BedrockError::SchemaViolation(_)));

    let err = parse_analysis(r#"{ "overall_assessment": { "suggestion": "MAYBE" } }"#).unwrap_err();
    assert!(matches!(err, BedrockError::SchemaViolation(_)));
}

#[test]
fn errors_map_onto_the_review_taxonomy() {
    let malformed: ReviewError = BedrockError::SchemaViolation("bad".to_string()).into();
    assert_eq!(malformed, ReviewError::MalformedSuggestionPayload("bad".to_string()));

    let unavailable: ReviewError = BedrockError::Invocation("timeout".to_string()).into();
    assert!(matches!(unavailable, ReviewError::SuggestionServiceUnavailable(_)));
}
