use axum::Json;
use axum::extract::{Path, Query, State};
use certa_catalog::disease::Disease;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DiseaseQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct DiseaseSummary {
    id: u32,
    name: String,
    category: String,
    criteria: usize,
}

#[derive(Serialize)]
pub struct DiseaseDetail {
    #[serde(flatten)]
    disease: Disease,
    derived_logic: String,
}

pub async fn list_diseases(
    State(state): State<AppState>,
    Query(query): Query<DiseaseQuery>,
) -> Json<Vec<DiseaseSummary>> {
    let diseases = state
        .catalog
        .search(&query.q)
        .into_iter()
        .map(|d| DiseaseSummary {
            id: d.id,
            name: d.name.clone(),
            category: d.category.clone(),
            criteria: d.criteria.len(),
        })
        .collect();
    Json(diseases)
}

pub async fn get_disease(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DiseaseDetail>, ApiError> {
    let disease = state
        .catalog
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("disease not found: {id}")))?;

    Ok(Json(DiseaseDetail {
        derived_logic: disease.derived_logic(),
        disease: disease.clone(),
    }))
}
