use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    catalog_version: String,
    analysis_enabled: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        catalog_version: state.catalog.version.clone(),
        analysis_enabled: state.bedrock.is_some(),
    })
}
