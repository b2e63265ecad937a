use certa_bedrock::documents::{content_blocks, sanitize_document_name, unique_document_names};
use certa_bedrock::error::BedrockError;
use certa_bedrock::prompt::{APPLICATION_FORM, build_review_prompt};
use certa_core::models::analysis::{AnalysisRequest, CriterionBrief};
use certa_core::models::document::{DocumentKind, UploadedDocument};

fn request(documents: Vec<UploadedDocument>) -> AnalysisRequest {
    AnalysisRequest {
        disease_id: 7,
        disease_name: "7. 慢性肾功能衰竭（尿毒症期）".to_string(),
        logic_description: "(1) + [(2)(3)(4) 中任意一项]".to_string(),
        criteria: vec![
            CriterionBrief {
                id: "1".to_string(),
                description: "出院小结".to_string(),
            },
            CriterionBrief {
                id: "2".to_string(),
                description: "肾功能检查报告单".to_string(),
            },
        ],
        documents,
    }
}

#[test]
fn prompt_names_disease_logic_form_and_every_criterion_in_order() {
    let prompt = build_review_prompt(&request(Vec::new()));

    assert!(prompt.contains("7. 慢性肾功能衰竭（尿毒症期）"));
    assert!(prompt.contains("(1) + [(2)(3)(4) 中任意一项]"));
    assert!(prompt.contains(APPLICATION_FORM));

    let first = prompt.find("ID: 1\nContent: 出院小结").unwrap();
    let second = prompt.find("ID: 2\nContent: 肾功能检查报告单").unwrap();
    assert!(first < second);
}

#[test]
fn prompt_describes_the_expected_json_shape() {
    let prompt = build_review_prompt(&request(Vec::new()));
    for key in ["applicant_info", "criterion_id", "is_met", "reasoning", "overall_assessment"] {
        assert!(prompt.contains(key), "prompt lacks {key}");
    }
    assert!(prompt.contains("\"PASS\" | \"FAIL\" | \"REVIEW\""));
}

#[test]
fn sanitizes_names_to_the_allowed_alphabet() {
    assert_eq!(sanitize_document_name("report_2024 (final)"), "report 2024 (final)");
    assert_eq!(sanitize_document_name("a__b...c"), "a b c");
    assert_eq!(sanitize_document_name("出院小结"), "出院小结");
}

#[test]
fn document_names_are_unique_and_never_empty() {
    let docs = vec![
        UploadedDocument::new("scan.pdf", DocumentKind::Pdf, vec![1]),
        UploadedDocument::new("scan.pdf", DocumentKind::Pdf, vec![2]),
        UploadedDocument::new("___.png", DocumentKind::Png, vec![3]),
    ];
    assert_eq!(
        unique_document_names(&docs),
        vec!["scan", "scan (2)", "document 3"]
    );
}

#[test]
fn no_documents_is_rejected_before_any_call() {
    assert!(matches!(content_blocks(&[]), Err(BedrockError::NoDocuments)));
}

#[test]
fn document_limit_is_enforced() {
    let docs: Vec<UploadedDocument> = (0..6)
        .map(|i| UploadedDocument::new(format!("{i}.pdf"), DocumentKind::Pdf, vec![0]))
        .collect();
    match content_blocks(&docs) {
        Err(BedrockError::TooManyAttachments { kind, count, limit }) => {
            assert_eq!(kind, "document");
            assert_eq!(count, 6);
            assert_eq!(limit, 5);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn mixed_uploads_become_one_block_each() {
    let docs = vec![
        UploadedDocument::new("form.jpg", DocumentKind::Jpeg, vec![0xff, 0xd8]),
        UploadedDocument::new("summary.pdf", DocumentKind::Pdf, b"%PDF".to_vec()),
    ];
    let blocks = content_blocks(&docs).unwrap();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].is_image());
    assert!(blocks[1].is_document());
}
