//! Fertilizer API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{FertilizerPatch, FertilizerRow, NewFertilizer};
use crate::data::MemoryStore;

/// Shared state for Fertilizer API endpoints
#[derive(Clone)]
pub struct FertilizersApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Fertilizer API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = FertilizersApiState { store };

    Router::new()
        .route("/", get(list_fertilizers).post(create_fertilizer))
        .route(
            "/{id}",
            get(get_fertilizer)
                .put(update_fertilizer)
                .delete(delete_fertilizer),
        )
        .with_state(state)
}

/// List all fertilizers
#[utoipa::path(
    get,
    path = "/api/fertilizers",
    tag = "fertilizers",
    responses(
        (status = 200, description = "All fertilizers", body = [FertilizerRow])
    )
)]
pub async fn list_fertilizers(
    State(state): State<FertilizersApiState>,
) -> Json<Vec<FertilizerRow>> {
    Json(state.store.list_fertilizers())
}

/// Get a single fertilizer by ID
#[utoipa::path(
    get,
    path = "/api/fertilizers/{id}",
    tag = "fertilizers",
    params(("id" = String, Path, description = "Fertilizer ID")),
    responses(
        (status = 200, description = "Fertilizer details", body = FertilizerRow),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn get_fertilizer(
    State(state): State<FertilizersApiState>,
    Path(id): Path<String>,
) -> Result<Json<FertilizerRow>, ApiError> {
    let fertilizer = state.store.get_fertilizer(&id).ok_or_else(|| {
        ApiError::not_found(
            "FERTILIZER_NOT_FOUND",
            format!("Fertilizer not found: {}", id),
        )
    })?;
    Ok(Json(fertilizer))
}

/// Create a new fertilizer
#[utoipa::path(
    post,
    path = "/api/fertilizers",
    tag = "fertilizers",
    request_body = NewFertilizer,
    responses(
        (status = 201, description = "Fertilizer created", body = FertilizerRow),
        (status = 400, description = "Invalid fertilizer data")
    )
)]
pub async fn create_fertilizer(
    State(state): State<FertilizersApiState>,
    ValidatedJson(body): ValidatedJson<NewFertilizer>,
) -> (StatusCode, Json<FertilizerRow>) {
    let fertilizer = state.store.create_fertilizer(body);
    (StatusCode::CREATED, Json(fertilizer))
}

/// Partially update a fertilizer
#[utoipa::path(
    put,
    path = "/api/fertilizers/{id}",
    tag = "fertilizers",
    params(("id" = String, Path, description = "Fertilizer ID")),
    request_body = FertilizerPatch,
    responses(
        (status = 200, description = "Fertilizer updated", body = FertilizerRow),
        (status = 400, description = "Invalid fertilizer data"),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn update_fertilizer(
    State(state): State<FertilizersApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<FertilizerPatch>,
) -> Result<Json<FertilizerRow>, ApiError> {
    let fertilizer = state.store.update_fertilizer(&id, body).ok_or_else(|| {
        ApiError::not_found(
            "FERTILIZER_NOT_FOUND",
            format!("Fertilizer not found: {}", id),
        )
    })?;
    Ok(Json(fertilizer))
}

/// Delete a fertilizer. Schedules pointing at it keep their fertilizerId.
#[utoipa::path(
    delete,
    path = "/api/fertilizers/{id}",
    tag = "fertilizers",
    params(("id" = String, Path, description = "Fertilizer ID")),
    responses(
        (status = 200, description = "Fertilizer deleted", body = DeleteResponse),
        (status = 404, description = "Fertilizer not found")
    )
)]
pub async fn delete_fertilizer(
    State(state): State<FertilizersApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_fertilizer(&id) {
        return Err(ApiError::not_found(
            "FERTILIZER_NOT_FOUND",
            format!("Fertilizer not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Fertilizer")))
}
