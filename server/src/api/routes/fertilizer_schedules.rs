//! Fertilizer schedule API endpoints

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
use crate::data::types::{FertilizerSchedulePatch, FertilizerScheduleRow, NewFertilizerSchedule};
use crate::data::MemoryStore;

/// Shared state for Fertilizer schedule API endpoints
#[derive(Clone)]
pub struct FertilizerSchedulesApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Fertilizer schedule API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = FertilizerSchedulesApiState { store };

    Router::new()
        .route(
            "/",
            get(list_fertilizer_schedules).post(create_fertilizer_schedule),
        )
        .route(
            "/{id}",
            get(get_fertilizer_schedule)
                .put(update_fertilizer_schedule)
                .delete(delete_fertilizer_schedule),
        )
        .with_state(state)
}

/// Query parameters for schedule listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesQuery {
    /// Only schedules for this plant
    pub plant_id: Option<String>,
}

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

fn check_fertilizer(store: &MemoryStore, fertilizer_id: &str) -> Result<(), ApiError> {
    if store.has_fertilizer(fertilizer_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_FERTILIZER",
            format!("Fertilizer not found: {}", fertilizer_id),
        ))
    }
}

/// List fertilizer schedules, optionally filtered by plant
#[utoipa::path(
    get,
    path = "/api/fertilizer-schedules",
    tag = "fertilizer-schedules",
    params(ListSchedulesQuery),
    responses(
        (status = 200, description = "Fertilizer schedules", body = [FertilizerScheduleRow])
    )
)]
pub async fn list_fertilizer_schedules(
    State(state): State<FertilizerSchedulesApiState>,
    ValidatedQuery(query): ValidatedQuery<ListSchedulesQuery>,
) -> Json<Vec<FertilizerScheduleRow>> {
    Json(
        state
            .store
            .list_fertilizer_schedules(query.plant_id.as_deref()),
    )
}

/// Get a single fertilizer schedule by ID
#[utoipa::path(
    get,
    path = "/api/fertilizer-schedules/{id}",
    tag = "fertilizer-schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule details", body = FertilizerScheduleRow),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn get_fertilizer_schedule(
    State(state): State<FertilizerSchedulesApiState>,
    Path(id): Path<String>,
) -> Result<Json<FertilizerScheduleRow>, ApiError> {
    let schedule = state.store.get_fertilizer_schedule(&id).ok_or_else(|| {
        ApiError::not_found(
            "SCHEDULE_NOT_FOUND",
            format!("Fertilizer schedule not found: {}", id),
        )
    })?;
    Ok(Json(schedule))
}

/// Create a new fertilizer schedule
#[utoipa::path(
    post,
    path = "/api/fertilizer-schedules",
    tag = "fertilizer-schedules",
    request_body = NewFertilizerSchedule,
    responses(
        (status = 201, description = "Schedule created", body = FertilizerScheduleRow),
        (status = 400, description = "Invalid schedule data")
    )
)]
pub async fn create_fertilizer_schedule(
    State(state): State<FertilizerSchedulesApiState>,
    ValidatedJson(body): ValidatedJson<NewFertilizerSchedule>,
) -> Result<(StatusCode, Json<FertilizerScheduleRow>), ApiError> {
    check_plant(&state.store, &body.plant_id)?;
    check_fertilizer(&state.store, &body.fertilizer_id)?;

    let schedule = state.store.create_fertilizer_schedule(body);
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Partially update a fertilizer schedule
#[utoipa::path(
    put,
    path = "/api/fertilizer-schedules/{id}",
    tag = "fertilizer-schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    request_body = FertilizerSchedulePatch,
    responses(
        (status = 200, description = "Schedule updated", body = FertilizerScheduleRow),
        (status = 400, description = "Invalid schedule data"),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn update_fertilizer_schedule(
    State(state): State<FertilizerSchedulesApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<FertilizerSchedulePatch>,
) -> Result<Json<FertilizerScheduleRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400
    if !state.store.has_fertilizer_schedule(&id) {
        return Err(ApiError::not_found(
            "SCHEDULE_NOT_FOUND",
            format!("Fertilizer schedule not found: {}", id),
        ));
    }

    if let Some(plant_id) = &body.plant_id {
        check_plant(&state.store, plant_id)?;
    }
    if let Some(fertilizer_id) = &body.fertilizer_id {
        check_fertilizer(&state.store, fertilizer_id)?;
    }

    let schedule = state
        .store
        .update_fertilizer_schedule(&id, body)
        .ok_or_else(|| {
            ApiError::not_found(
                "SCHEDULE_NOT_FOUND",
                format!("Fertilizer schedule not found: {}", id),
            )
        })?;
    Ok(Json(schedule))
}

/// Delete a fertilizer schedule
#[utoipa::path(
    delete,
    path = "/api/fertilizer-schedules/{id}",
    tag = "fertilizer-schedules",
    params(("id" = String, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Schedule deleted", body = DeleteResponse),
        (status = 404, description = "Schedule not found")
    )
)]
pub async fn delete_fertilizer_schedule(
    State(state): State<FertilizerSchedulesApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_fertilizer_schedule(&id) {
        return Err(ApiError::not_found(
            "SCHEDULE_NOT_FOUND",
            format!("Fertilizer schedule not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Fertilizer schedule")))
}
