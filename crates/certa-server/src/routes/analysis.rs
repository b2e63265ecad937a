use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use certa_audit::session::{AnalysisDisposition, SessionSnapshot};
use certa_core::error::ReviewError;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ApplyResponse {
    added: Vec<String>,
    session: SessionSnapshot,
}

/// Start analyzing the attached documents in the background.
///
/// Responds immediately with the pending session. The result lands in the
/// session when the model answers, unless the session has moved on.
pub async fn start_analysis(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let Some(bedrock) = state.bedrock.clone() else {
        return Err(ReviewError::SuggestionServiceUnavailable(
            "no analysis model configured".to_string(),
        )
        .into());
    };

    let mut desk = state.desk.lock().await;
    let (ticket, request) = desk.session_mut().begin_analysis()?;
    let snapshot = desk.session().snapshot();

    let shared = state.desk.clone();
    let handle = tokio::spawn(async move {
        let outcome = certa_bedrock::analyze::analyze_with_timeout(
            &bedrock.client,
            &bedrock.model_id,
            &request,
            bedrock.timeout,
        )
        .await
        .map(|outcome| outcome.payload)
        .map_err(ReviewError::from);

        let disposition = shared
            .lock()
            .await
            .session_mut()
            .complete_analysis(ticket, outcome);
        match disposition {
            AnalysisDisposition::Completed { suggested, .. } => {
                tracing::info!(disease_id = ticket.disease_id(), suggested, "analysis applied to session");
            }
            AnalysisDisposition::Failed(e) => {
                tracing::warn!(disease_id = ticket.disease_id(), error = %e, "analysis unavailable, manual review only");
            }
            AnalysisDisposition::Discarded => {
                tracing::debug!(disease_id = ticket.disease_id(), "analysis result discarded");
            }
        }
    });
    state.analysis.replace(handle).await;

    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// Check every criterion the analysis found satisfied. Never unchecks.
pub async fn apply_suggestions(
    State(state): State<AppState>,
) -> Result<Json<ApplyResponse>, ApiError> {
    let mut desk = state.desk.lock().await;
    let added = desk.session_mut().apply_suggestions()?;
    Ok(Json(ApplyResponse {
        added,
        session: desk.session().snapshot(),
    }))
}
