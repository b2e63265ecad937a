use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use certa_audit::session::SessionSnapshot;
use certa_core::models::document::{DocumentKind, DocumentMeta, UploadedDocument};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SelectDiseaseRequest {
    pub disease_id: u32,
}

#[derive(Deserialize)]
pub struct ApplicantRequest {
    pub name: Option<String>,
    pub id_number: Option<String>,
}

#[derive(Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

#[derive(Deserialize)]
pub struct AttachDocumentRequest {
    pub filename: String,
    pub data_base64: String,
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.desk.lock().await.session().snapshot())
}

/// Switch the active disease. Everything entered for the previous disease
/// is discarded and a running analysis is cancelled.
pub async fn select_disease(
    State(state): State<AppState>,
    Json(req): Json<SelectDiseaseRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut desk = state.desk.lock().await;
    let before = desk.session().active_disease().map(|d| d.id);
    desk.session_mut().select_disease(req.disease_id)?;
    if before != Some(req.disease_id) {
        state.analysis.cancel().await;
    }
    Ok(Json(desk.session().snapshot()))
}

pub async fn clear_disease(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut desk = state.desk.lock().await;
    desk.session_mut().clear_disease();
    state.analysis.cancel().await;
    Json(desk.session().snapshot())
}

pub async fn reset_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let mut desk = state.desk.lock().await;
    desk.session_mut().reset();
    state.analysis.cancel().await;
    Json(desk.session().snapshot())
}

pub async fn toggle_criterion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut desk = state.desk.lock().await;
    desk.session_mut().toggle_criterion(&id)?;
    Ok(Json(desk.session().snapshot()))
}

/// Update identity fields. Absent fields are left as they are.
pub async fn update_applicant(
    State(state): State<AppState>,
    Json(req): Json<ApplicantRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut desk = state.desk.lock().await;
    let session = desk.session_mut();
    if let Some(name) = req.name {
        session.set_applicant_name(name)?;
    }
    if let Some(id_number) = req.id_number {
        session.set_applicant_id_number(id_number)?;
    }
    Ok(Json(desk.session().snapshot()))
}

pub async fn update_notes(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut desk = state.desk.lock().await;
    desk.session_mut().set_notes(req.notes)?;
    Ok(Json(desk.session().snapshot()))
}

pub async fn attach_document(
    State(state): State<AppState>,
    Json(req): Json<AttachDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentMeta>), ApiError> {
    let kind = DocumentKind::from_filename(&req.filename)
        .ok_or_else(|| ApiError::BadRequest(format!("unsupported document type: {}", req.filename)))?;
    let bytes = STANDARD.decode(req.data_base64.as_bytes())?;
    if bytes.is_empty() {
        return Err(ApiError::BadRequest("document is empty".to_string()));
    }

    let mut desk = state.desk.lock().await;
    let meta = desk
        .session_mut()
        .attach_document(UploadedDocument::new(req.filename, kind, bytes))?;
    state.analysis.cancel().await;
    tracing::info!(document_id = %meta.id, size = meta.size, "document attached");
    Ok((StatusCode::CREATED, Json(meta)))
}

pub async fn remove_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let mut desk = state.desk.lock().await;
    desk.session_mut().remove_document(id)?;
    state.analysis.cancel().await;
    Ok(Json(desk.session().snapshot()))
}
