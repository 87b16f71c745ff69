//! Plant size profile API endpoints

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
use crate::data::types::{NewSizeProfile, SizeProfilePatch, SizeProfileRow};
use crate::data::MemoryStore;

/// Shared state for Size profile API endpoints
#[derive(Clone)]
pub struct SizeProfilesApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Size profile API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = SizeProfilesApiState { store };

    Router::new()
        .route("/", get(list_size_profiles).post(create_size_profile))
        .route(
            "/{id}",
            get(get_size_profile)
                .put(update_size_profile)
                .delete(delete_size_profile),
        )
        .with_state(state)
}

/// Query parameters for size profile listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListSizeProfilesQuery {
    /// Only profiles for this plant
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

/// List size profiles, optionally filtered by plant
#[utoipa::path(
    get,
    path = "/api/size-profiles",
    tag = "size-profiles",
    params(ListSizeProfilesQuery),
    responses(
        (status = 200, description = "Size profiles", body = [SizeProfileRow])
    )
)]
pub async fn list_size_profiles(
    State(state): State<SizeProfilesApiState>,
    ValidatedQuery(query): ValidatedQuery<ListSizeProfilesQuery>,
) -> Json<Vec<SizeProfileRow>> {
    Json(state.store.list_size_profiles(query.plant_id.as_deref()))
}

/// Get a single size profile by ID
#[utoipa::path(
    get,
    path = "/api/size-profiles/{id}",
    tag = "size-profiles",
    params(("id" = String, Path, description = "Size profile ID")),
    responses(
        (status = 200, description = "Size profile details", body = SizeProfileRow),
        (status = 404, description = "Size profile not found")
    )
)]
pub async fn get_size_profile(
    State(state): State<SizeProfilesApiState>,
    Path(id): Path<String>,
) -> Result<Json<SizeProfileRow>, ApiError> {
    let profile = state.store.get_size_profile(&id).ok_or_else(|| {
        ApiError::not_found(
            "SIZE_PROFILE_NOT_FOUND",
            format!("Size profile not found: {}", id),
        )
    })?;
    Ok(Json(profile))
}

/// Create a new size profile
#[utoipa::path(
    post,
    path = "/api/size-profiles",
    tag = "size-profiles",
    request_body = NewSizeProfile,
    responses(
        (status = 201, description = "Size profile created", body = SizeProfileRow),
        (status = 400, description = "Invalid size profile data")
    )
)]
pub async fn create_size_profile(
    State(state): State<SizeProfilesApiState>,
    ValidatedJson(body): ValidatedJson<NewSizeProfile>,
) -> Result<(StatusCode, Json<SizeProfileRow>), ApiError> {
    check_plant(&state.store, &body.plant_id)?;

    let profile = state.store.create_size_profile(body);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Partially update a size profile
#[utoipa::path(
    put,
    path = "/api/size-profiles/{id}",
    tag = "size-profiles",
    params(("id" = String, Path, description = "Size profile ID")),
    request_body = SizeProfilePatch,
    responses(
        (status = 200, description = "Size profile updated", body = SizeProfileRow),
        (status = 400, description = "Invalid size profile data"),
        (status = 404, description = "Size profile not found")
    )
)]
pub async fn update_size_profile(
    State(state): State<SizeProfilesApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<SizeProfilePatch>,
) -> Result<Json<SizeProfileRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400
    if !state.store.has_size_profile(&id) {
        return Err(ApiError::not_found(
            "SIZE_PROFILE_NOT_FOUND",
            format!("Size profile not found: {}", id),
        ));
    }

    if let Some(plant_id) = &body.plant_id {
        check_plant(&state.store, plant_id)?;
    }

    let profile = state.store.update_size_profile(&id, body).ok_or_else(|| {
        ApiError::not_found(
            "SIZE_PROFILE_NOT_FOUND",
            format!("Size profile not found: {}", id),
        )
    })?;
    Ok(Json(profile))
}

/// Delete a size profile
#[utoipa::path(
    delete,
    path = "/api/size-profiles/{id}",
    tag = "size-profiles",
    params(("id" = String, Path, description = "Size profile ID")),
    responses(
        (status = 200, description = "Size profile deleted", body = DeleteResponse),
        (status = 404, description = "Size profile not found")
    )
)]
pub async fn delete_size_profile(
    State(state): State<SizeProfilesApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_size_profile(&id) {
        return Err(ApiError::not_found(
            "SIZE_PROFILE_NOT_FOUND",
            format!("Size profile not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Size profile")))
}
