//! Variant/tag association API endpoints

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
use crate::data::types::{NewVariantTag, VariantTagPatch, VariantTagRow};
use crate::data::MemoryStore;

/// Shared state for Variant tag API endpoints
#[derive(Clone)]
pub struct VariantTagsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Variant tag API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = VariantTagsApiState { store };

    Router::new()
        .route("/", get(list_variant_tags).post(create_variant_tag))
        .route(
            "/{id}",
            get(get_variant_tag)
                .put(update_variant_tag)
                .delete(delete_variant_tag),
        )
        .with_state(state)
}

/// Query parameters for variant tag listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListVariantTagsQuery {
    /// Only associations for this variant
    pub variant_id: Option<String>,
}

fn check_variant(store: &MemoryStore, variant_id: &str) -> Result<(), ApiError> {
    if store.has_variant(variant_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_VARIANT",
            format!("Variant not found: {}", variant_id),
        ))
    }
}

fn check_tag(store: &MemoryStore, tag_id: &str) -> Result<(), ApiError> {
    if store.has_tag(tag_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_TAG",
            format!("Tag not found: {}", tag_id),
        ))
    }
}

/// List variant/tag associations, optionally filtered by variant
#[utoipa::path(
    get,
    path = "/api/variant-tags",
    tag = "variant-tags",
    params(ListVariantTagsQuery),
    responses(
        (status = 200, description = "Variant tags", body = [VariantTagRow])
    )
)]
pub async fn list_variant_tags(
    State(state): State<VariantTagsApiState>,
    ValidatedQuery(query): ValidatedQuery<ListVariantTagsQuery>,
) -> Json<Vec<VariantTagRow>> {
    Json(state.store.list_variant_tags(query.variant_id.as_deref()))
}

/// Get a single variant/tag association by ID
#[utoipa::path(
    get,
    path = "/api/variant-tags/{id}",
    tag = "variant-tags",
    params(("id" = String, Path, description = "Variant tag ID")),
    responses(
        (status = 200, description = "Variant tag details", body = VariantTagRow),
        (status = 404, description = "Variant tag not found")
    )
)]
pub async fn get_variant_tag(
    State(state): State<VariantTagsApiState>,
    Path(id): Path<String>,
) -> Result<Json<VariantTagRow>, ApiError> {
    let link = state.store.get_variant_tag(&id).ok_or_else(|| {
        ApiError::not_found(
            "VARIANT_TAG_NOT_FOUND",
            format!("Variant tag not found: {}", id),
        )
    })?;
    Ok(Json(link))
}

/// Attach a tag to a variant
#[utoipa::path(
    post,
    path = "/api/variant-tags",
    tag = "variant-tags",
    request_body = NewVariantTag,
    responses(
        (status = 201, description = "Variant tag created", body = VariantTagRow),
        (status = 400, description = "Invalid variant tag data")
    )
)]
pub async fn create_variant_tag(
    State(state): State<VariantTagsApiState>,
    ValidatedJson(body): ValidatedJson<NewVariantTag>,
) -> Result<(StatusCode, Json<VariantTagRow>), ApiError> {
    check_variant(&state.store, &body.variant_id)?;
    check_tag(&state.store, &body.tag_id)?;

    let link = state.store.create_variant_tag(body);
    Ok((StatusCode::CREATED, Json(link)))
}

/// Partially update a variant/tag association
#[utoipa::path(
    put,
    path = "/api/variant-tags/{id}",
    tag = "variant-tags",
    params(("id" = String, Path, description = "Variant tag ID")),
    request_body = VariantTagPatch,
    responses(
        (status = 200, description = "Variant tag updated", body = VariantTagRow),
        (status = 400, description = "Invalid variant tag data"),
        (status = 404, description = "Variant tag not found")
    )
)]
pub async fn update_variant_tag(
    State(state): State<VariantTagsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<VariantTagPatch>,
) -> Result<Json<VariantTagRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400
    if !state.store.has_variant_tag(&id) {
        return Err(ApiError::not_found(
            "VARIANT_TAG_NOT_FOUND",
            format!("Variant tag not found: {}", id),
        ));
    }

    if let Some(variant_id) = &body.variant_id {
        check_variant(&state.store, variant_id)?;
    }
    if let Some(tag_id) = &body.tag_id {
        check_tag(&state.store, tag_id)?;
    }

    let link = state.store.update_variant_tag(&id, body).ok_or_else(|| {
        ApiError::not_found(
            "VARIANT_TAG_NOT_FOUND",
            format!("Variant tag not found: {}", id),
        )
    })?;
    Ok(Json(link))
}

/// Detach a tag from a variant
#[utoipa::path(
    delete,
    path = "/api/variant-tags/{id}",
    tag = "variant-tags",
    params(("id" = String, Path, description = "Variant tag ID")),
    responses(
        (status = 200, description = "Variant tag deleted", body = DeleteResponse),
        (status = 404, description = "Variant tag not found")
    )
)]
pub async fn delete_variant_tag(
    State(state): State<VariantTagsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_variant_tag(&id) {
        return Err(ApiError::not_found(
            "VARIANT_TAG_NOT_FOUND",
            format!("Variant tag not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Variant tag")))
}
