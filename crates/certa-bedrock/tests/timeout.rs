use std::time::Duration;

use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
use certa_bedrock::analyze::analyze_with_timeout;
use certa_bedrock::error::BedrockError;
use certa_core::error::ReviewError;
use certa_core::models::analysis::{AnalysisRequest, CriterionBrief};
use certa_core::models::document::{DocumentKind, UploadedDocument};
use tokio::net::TcpListener;

/// Accepts connections and never answers.
async fn silent_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}

fn request() -> AnalysisRequest {
    AnalysisRequest {
        disease_id: 7,
        disease_name: "7. 慢性肾功能衰竭（尿毒症期）".to_string(),
        logic_description: "(1)".to_string(),
        criteria: vec![CriterionBrief {
            id: "1".to_string(),
            description: "出院小结".to_string(),
        }],
        documents: vec![UploadedDocument::new("a.pdf", DocumentKind::Pdf, b"%PDF-1.7".to_vec())],
    }
}

#[tokio::test]
async fn silent_model_times_out_as_service_unavailable() {
    let config = aws_sdk_bedrockruntime::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("test", "test", None, None, "certa-tests"))
        .endpoint_url(silent_endpoint().await)
        .build();
    let client = aws_sdk_bedrockruntime::Client::from_conf(config);

    let err = analyze_with_timeout(&client, "test-model", &request(), Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(matches!(err, BedrockError::Timeout(1)));

    let err: ReviewError = err.into();
    assert_eq!(
        err,
        ReviewError::SuggestionServiceUnavailable("model did not answer within 1s".to_string())
    );
}
