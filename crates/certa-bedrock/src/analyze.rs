//! Document review via the Bedrock Converse API.

use std::time::Duration;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use certa_core::models::analysis::AnalysisRequest;
use certa_core::models::suggestion::AnalysisPayload;
use tracing::{info, warn};
use uuid::Uuid;

use crate::documents;
use crate::error::BedrockError;
use crate::parse::parse_analysis;
use crate::prompt::{REVIEW_SYSTEM_PROMPT, build_review_prompt};
use crate::tokens::{self, TokenCount};

/// The result of one document review invocation.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub transaction_id: Uuid,
    pub model_id: String,
    pub tokens: TokenCount,
    pub payload: AnalysisPayload,
}

/// [`analyze_documents`], abandoned once `limit` elapses.
pub async fn analyze_with_timeout(
    client: &Client,
    model_id: &str,
    request: &AnalysisRequest,
    limit: Duration,
) -> Result<AnalysisOutcome, BedrockError> {
    match tokio::time::timeout(limit, analyze_documents(client, model_id, request)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                model = model_id,
                disease_id = request.disease_id,
                timeout_secs = limit.as_secs(),
                "document review timed out"
            );
            Err(BedrockError::Timeout(limit.as_secs()))
        }
    }
}

/// Send the request's documents and criteria to the model and parse its
/// per-criterion findings.
pub async fn analyze_documents(
    client: &Client,
    model_id: &str,
    request: &AnalysisRequest,
) -> Result<AnalysisOutcome, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(
        transaction_id = %transaction_id,
        model = model_id,
        disease_id = request.disease_id,
        documents = request.documents.len(),
        "starting document review"
    );

    let mut message = Message::builder().role(ConversationRole::User);
    for block in documents::content_blocks(&request.documents)? {
        message = message.content(block);
    }
    let message = message
        .content(ContentBlock::Text(build_review_prompt(request)))
        .build()
        .map_err(|e| BedrockError::Invocation(e.to_string()))?;

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(REVIEW_SYSTEM_PROMPT.to_string()))
        .messages(message)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(t) = block {
                Some(t.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let tokens = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or_default();

    let payload = parse_analysis(&text)?;

    info!(
        transaction_id = %transaction_id,
        findings = payload.analysis.len(),
        input_tokens = tokens.input,
        output_tokens = tokens.output,
        "document review complete"
    );

    Ok(AnalysisOutcome {
        transaction_id,
        model_id: model_id.to_string(),
        tokens,
        payload,
    })
}
