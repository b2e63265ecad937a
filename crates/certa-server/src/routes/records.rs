use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use certa_audit::trail::TrailSummary;
use certa_core::models::record::AuditRecord;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponse {
    record: AuditRecord,
    /// `false` when the trail could not be written; it is retried on the
    /// next submission.
    persisted: bool,
}

#[derive(Serialize)]
pub struct TrailResponse {
    summary: TrailSummary,
    records: Vec<AuditRecord>,
}

pub async fn submit(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let mut desk = state.desk.lock().await;
    let receipt = desk.submit().await?;
    state.analysis.cancel().await;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            record: receipt.record,
            persisted: receipt.persisted,
        }),
    ))
}

/// Newest first.
pub async fn list_records(State(state): State<AppState>) -> Json<TrailResponse> {
    let desk = state.desk.lock().await;
    let trail = desk.trail();
    Json(TrailResponse {
        summary: trail.summary(),
        records: trail.records().to_vec(),
    })
}

pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuditRecord>, ApiError> {
    let desk = state.desk.lock().await;
    let record = desk
        .trail()
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("record not found: {id}")))?;
    Ok(Json(record))
}
