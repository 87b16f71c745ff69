//! Seasonal care guideline API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{CareGuidelinePatch, CareGuidelineRow, NewCareGuideline};
use crate::data::MemoryStore;

/// Shared state for Care guideline API endpoints
#[derive(Clone)]
pub struct CareGuidelinesApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Care guideline API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = CareGuidelinesApiState { store };

    Router::new()
        .route("/", get(list_care_guidelines).post(create_care_guideline))
        .route(
            "/{id}",
            get(get_care_guideline)
                .put(update_care_guideline)
                .delete(delete_care_guideline),
        )
        .with_state(state)
}

/// Query parameters for care guideline listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCareGuidelinesQuery {
    /// Only guidelines for this plant
    pub plant_id: Option<String>,
}

/// plantId must reference an existing plant
fn check_plant(store: &MemoryStore, plant_id: &str) -> Result<(), ApiError> {
    if store.has_plant(plant_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_PLANT",
            format!("Plant not found: {}", plant_id),
        ))
    }
}

/// List care guidelines, optionally filtered by plant
#[utoipa::path(
    get,
    path = "/api/care-guidelines",
    tag = "care-guidelines",
    params(ListCareGuidelinesQuery),
    responses(
        (status = 200, description = "Care guidelines", body = [CareGuidelineRow])
    )
)]
pub async fn list_care_guidelines(
    State(state): State<CareGuidelinesApiState>,
    ValidatedQuery(query): ValidatedQuery<ListCareGuidelinesQuery>,
) -> Json<Vec<CareGuidelineRow>> {
    Json(state.store.list_care_guidelines(query.plant_id.as_deref()))
}

/// Get a single care guideline by ID
#[utoipa::path(
    get,
    path = "/api/care-guidelines/{id}",
    tag = "care-guidelines",
    params(("id" = String, Path, description = "Care guideline ID")),
    responses(
        (status = 200, description = "Care guideline details", body = CareGuidelineRow),
        (status = 404, description = "Care guideline not found")
    )
)]
pub async fn get_care_guideline(
    State(state): State<CareGuidelinesApiState>,
    Path(id): Path<String>,
) -> Result<Json<CareGuidelineRow>, ApiError> {
    let guideline = state.store.get_care_guideline(&id).ok_or_else(|| {
        ApiError::not_found(
            "CARE_GUIDELINE_NOT_FOUND",
            format!("Care guideline not found: {}", id),
        )
    })?;
    Ok(Json(guideline))
}

/// Create a new care guideline
#[utoipa::path(
    post,
    path = "/api/care-guidelines",
    tag = "care-guidelines",
    request_body = NewCareGuideline,
    responses(
        (status = 201, description = "Care guideline created", body = CareGuidelineRow),
        (status = 400, description = "Invalid care guideline data")
    )
)]
pub async fn create_care_guideline(
    State(state): State<CareGuidelinesApiState>,
    ValidatedJson(body): ValidatedJson<NewCareGuideline>,
) -> Result<(StatusCode, Json<CareGuidelineRow>), ApiError> {
    check_plant(&state.store, &body.plant_id)?;

    let guideline = state.store.create_care_guideline(body);
    Ok((StatusCode::CREATED, Json(guideline)))
}

/// Partially update a care guideline
#[utoipa::path(
    put,
    path = "/api/care-guidelines/{id}",
    tag = "care-guidelines",
    params(("id" = String, Path, description = "Care guideline ID")),
    request_body = CareGuidelinePatch,
    responses(
        (status = 200, description = "Care guideline updated", body = CareGuidelineRow),
        (status = 400, description = "Invalid care guideline data"),
        (status = 404, description = "Care guideline not found")
    )
)]
pub async fn update_care_guideline(
    State(state): State<CareGuidelinesApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<CareGuidelinePatch>,
) -> Result<Json<CareGuidelineRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400
    if !state.store.has_care_guideline(&id) {
        return Err(ApiError::not_found(
            "CARE_GUIDELINE_NOT_FOUND",
            format!("Care guideline not found: {}", id),
        ));
    }

    if let Some(plant_id) = &body.plant_id {
        check_plant(&state.store, plant_id)?;
    }

    let guideline = state
        .store
        .update_care_guideline(&id, body)
        .ok_or_else(|| {
            ApiError::not_found(
                "CARE_GUIDELINE_NOT_FOUND",
                format!("Care guideline not found: {}", id),
            )
        })?;
    Ok(Json(guideline))
}

/// Delete a care guideline
#[utoipa::path(
    delete,
    path = "/api/care-guidelines/{id}",
    tag = "care-guidelines",
    params(("id" = String, Path, description = "Care guideline ID")),
    responses(
        (status = 200, description = "Care guideline deleted", body = DeleteResponse),
        (status = 404, description = "Care guideline not found")
    )
)]
pub async fn delete_care_guideline(
    State(state): State<CareGuidelinesApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_care_guideline(&id) {
        return Err(ApiError::not_found(
            "CARE_GUIDELINE_NOT_FOUND",
            format!("Care guideline not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Care guideline")))
}
