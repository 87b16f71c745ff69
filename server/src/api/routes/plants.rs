//! Plant API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{NewPlant, PlantPatch, PlantRow};
use crate::data::MemoryStore;

/// Shared state for Plant API endpoints
#[derive(Clone)]
pub struct PlantsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Plant API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = PlantsApiState { store };

    Router::new()
        .route("/", get(list_plants).post(create_plant))
        .route(
            "/{id}",
            get(get_plant).put(update_plant).delete(delete_plant),
        )
        .with_state(state)
}

/// Temperature invariant: min <= max when both bounds are present
fn check_temperature(min: Option<i32>, max: Option<i32>) -> Result<(), ApiError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ApiError::bad_request(
            "INVALID_TEMPERATURE_RANGE",
            format!(
                "temperatureMin ({}) must not exceed temperatureMax ({})",
                min, max
            ),
        )),
        _ => Ok(()),
    }
}

/// categoryId must reference an existing category when present
fn check_category(store: &MemoryStore, category_id: &str) -> Result<(), ApiError> {
    if store.has_category(category_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_CATEGORY",
            format!("Category not found: {}", category_id),
        ))
    }
}

/// List all plants
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses(
        (status = 200, description = "All plants", body = [PlantRow])
    )
)]
pub async fn list_plants(State(state): State<PlantsApiState>) -> Json<Vec<PlantRow>> {
    Json(state.store.list_plants())
}

/// Get a single plant by ID
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant ID")),
    responses(
        (status = 200, description = "Plant details", body = PlantRow),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn get_plant(
    State(state): State<PlantsApiState>,
    Path(id): Path<String>,
) -> Result<Json<PlantRow>, ApiError> {
    let plant = state
        .store
        .get_plant(&id)
        .ok_or_else(|| ApiError::not_found("PLANT_NOT_FOUND", format!("Plant not found: {}", id)))?;
    Ok(Json(plant))
}

/// Create a new plant
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = NewPlant,
    responses(
        (status = 201, description = "Plant created", body = PlantRow),
        (status = 400, description = "Invalid plant data")
    )
)]
pub async fn create_plant(
    State(state): State<PlantsApiState>,
    ValidatedJson(body): ValidatedJson<NewPlant>,
) -> Result<(StatusCode, Json<PlantRow>), ApiError> {
    check_temperature(body.temperature_min, body.temperature_max)?;
    if let Some(category_id) = &body.category_id {
        check_category(&state.store, category_id)?;
    }

    let plant = state.store.create_plant(body);
    Ok((StatusCode::CREATED, Json(plant)))
}

/// Partially update a plant
#[utoipa::path(
    put,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant ID")),
    request_body = PlantPatch,
    responses(
        (status = 200, description = "Plant updated", body = PlantRow),
        (status = 400, description = "Invalid plant data"),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn update_plant(
    State(state): State<PlantsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<PlantPatch>,
) -> Result<Json<PlantRow>, ApiError> {
    let existing = state
        .store
        .get_plant(&id)
        .ok_or_else(|| ApiError::not_found("PLANT_NOT_FOUND", format!("Plant not found: {}", id)))?;

    // The invariant holds on the merged record, not the patch alone
    let (min, max) = body.merged_temperature(&existing);
    check_temperature(min, max)?;
    if let Some(category_id) = &body.category_id {
        check_category(&state.store, category_id)?;
    }

    let plant = state
        .store
        .update_plant(&id, body)
        .ok_or_else(|| ApiError::not_found("PLANT_NOT_FOUND", format!("Plant not found: {}", id)))?;
    Ok(Json(plant))
}

/// Delete a plant. Children (variants, size profiles, guidelines,
/// schedules) are not cascaded and stay addressable.
#[utoipa::path(
    delete,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant ID")),
    responses(
        (status = 200, description = "Plant deleted", body = DeleteResponse),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn delete_plant(
    State(state): State<PlantsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_plant(&id) {
        return Err(ApiError::not_found(
            "PLANT_NOT_FOUND",
            format!("Plant not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Plant")))
}
