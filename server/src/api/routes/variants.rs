//! Plant variant API endpoints
//!
//! Variants are the purchasable unit (a plant in a specific color and
//! size, carrying the SKU and price). SKU uniqueness is enforced in the
//! store; a collision comes back as 409.

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
use crate::data::types::{NewVariant, VariantPatch, VariantRow};
use crate::data::MemoryStore;

/// Shared state for Variant API endpoints
#[derive(Clone)]
pub struct VariantsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Variant API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = VariantsApiState { store };

    Router::new()
        .route("/", get(list_variants).post(create_variant))
        .route(
            "/{id}",
            get(get_variant).put(update_variant).delete(delete_variant),
        )
        .with_state(state)
}

/// Query parameters for variant listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListVariantsQuery {
    /// Only variants of this plant
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

fn check_color(store: &MemoryStore, color_id: &str) -> Result<(), ApiError> {
    if store.has_color(color_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_COLOR",
            format!("Color not found: {}", color_id),
        ))
    }
}

fn check_size_profile(store: &MemoryStore, size_id: &str) -> Result<(), ApiError> {
    if store.has_size_profile(size_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_SIZE_PROFILE",
            format!("Size profile not found: {}", size_id),
        ))
    }
}

/// List variants, optionally filtered by plant
#[utoipa::path(
    get,
    path = "/api/variants",
    tag = "variants",
    params(ListVariantsQuery),
    responses(
        (status = 200, description = "Variants", body = [VariantRow])
    )
)]
pub async fn list_variants(
    State(state): State<VariantsApiState>,
    ValidatedQuery(query): ValidatedQuery<ListVariantsQuery>,
) -> Json<Vec<VariantRow>> {
    Json(state.store.list_variants(query.plant_id.as_deref()))
}

/// Get a single variant by ID
#[utoipa::path(
    get,
    path = "/api/variants/{id}",
    tag = "variants",
    params(("id" = String, Path, description = "Variant ID")),
    responses(
        (status = 200, description = "Variant details", body = VariantRow),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn get_variant(
    State(state): State<VariantsApiState>,
    Path(id): Path<String>,
) -> Result<Json<VariantRow>, ApiError> {
    let variant = state.store.get_variant(&id).ok_or_else(|| {
        ApiError::not_found("VARIANT_NOT_FOUND", format!("Variant not found: {}", id))
    })?;
    Ok(Json(variant))
}

/// Create a new variant
#[utoipa::path(
    post,
    path = "/api/variants",
    tag = "variants",
    request_body = NewVariant,
    responses(
        (status = 201, description = "Variant created", body = VariantRow),
        (status = 400, description = "Invalid variant data"),
        (status = 409, description = "SKU already in use")
    )
)]
pub async fn create_variant(
    State(state): State<VariantsApiState>,
    ValidatedJson(body): ValidatedJson<NewVariant>,
) -> Result<(StatusCode, Json<VariantRow>), ApiError> {
    check_plant(&state.store, &body.plant_id)?;
    check_color(&state.store, &body.color_id)?;
    if let Some(size_id) = &body.size_id {
        check_size_profile(&state.store, size_id)?;
    }

    let variant = state.store.create_variant(body).map_err(ApiError::from_data)?;
    Ok((StatusCode::CREATED, Json(variant)))
}

/// Partially update a variant
#[utoipa::path(
    put,
    path = "/api/variants/{id}",
    tag = "variants",
    params(("id" = String, Path, description = "Variant ID")),
    request_body = VariantPatch,
    responses(
        (status = 200, description = "Variant updated", body = VariantRow),
        (status = 400, description = "Invalid variant data"),
        (status = 404, description = "Variant not found"),
        (status = 409, description = "SKU already in use")
    )
)]
pub async fn update_variant(
    State(state): State<VariantsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<VariantPatch>,
) -> Result<Json<VariantRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400/409
    if !state.store.has_variant(&id) {
        return Err(ApiError::not_found(
            "VARIANT_NOT_FOUND",
            format!("Variant not found: {}", id),
        ));
    }

    if let Some(plant_id) = &body.plant_id {
        check_plant(&state.store, plant_id)?;
    }
    if let Some(color_id) = &body.color_id {
        check_color(&state.store, color_id)?;
    }
    if let Some(size_id) = &body.size_id {
        check_size_profile(&state.store, size_id)?;
    }

    let variant = state
        .store
        .update_variant(&id, body)
        .map_err(ApiError::from_data)?
        .ok_or_else(|| {
            ApiError::not_found("VARIANT_NOT_FOUND", format!("Variant not found: {}", id))
        })?;
    Ok(Json(variant))
}

/// Delete a variant. Tag associations pointing at it are not cascaded.
#[utoipa::path(
    delete,
    path = "/api/variants/{id}",
    tag = "variants",
    params(("id" = String, Path, description = "Variant ID")),
    responses(
        (status = 200, description = "Variant deleted", body = DeleteResponse),
        (status = 404, description = "Variant not found")
    )
)]
pub async fn delete_variant(
    State(state): State<VariantsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_variant(&id) {
        return Err(ApiError::not_found(
            "VARIANT_NOT_FOUND",
            format!("Variant not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Variant")))
}
