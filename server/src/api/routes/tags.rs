//! Tag API endpoints

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
use crate::data::types::{NewTag, TagPatch, TagRow};
use crate::data::MemoryStore;

/// Shared state for Tag API endpoints
#[derive(Clone)]
pub struct TagsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Tag API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = TagsApiState { store };

    Router::new()
        .route("/", get(list_tags).post(create_tag))
        .route("/{id}", get(get_tag).put(update_tag).delete(delete_tag))
        .with_state(state)
}

/// Query parameters for tag listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsQuery {
    /// Only tags belonging to this group
    pub tag_group_id: Option<String>,
}

/// tagGroupId must reference an existing tag group
fn check_tag_group(store: &MemoryStore, tag_group_id: &str) -> Result<(), ApiError> {
    if store.has_tag_group(tag_group_id) {
        Ok(())
    } else {
        Err(ApiError::bad_request(
            "UNKNOWN_TAG_GROUP",
            format!("Tag group not found: {}", tag_group_id),
        ))
    }
}

/// List tags, optionally filtered by tag group
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "tags",
    params(ListTagsQuery),
    responses(
        (status = 200, description = "Tags", body = [TagRow])
    )
)]
pub async fn list_tags(
    State(state): State<TagsApiState>,
    ValidatedQuery(query): ValidatedQuery<ListTagsQuery>,
) -> Json<Vec<TagRow>> {
    Json(state.store.list_tags(query.tag_group_id.as_deref()))
}

/// Get a single tag by ID
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag details", body = TagRow),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn get_tag(
    State(state): State<TagsApiState>,
    Path(id): Path<String>,
) -> Result<Json<TagRow>, ApiError> {
    let tag = state
        .store
        .get_tag(&id)
        .ok_or_else(|| ApiError::not_found("TAG_NOT_FOUND", format!("Tag not found: {}", id)))?;
    Ok(Json(tag))
}

/// Create a new tag
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = "tags",
    request_body = NewTag,
    responses(
        (status = 201, description = "Tag created", body = TagRow),
        (status = 400, description = "Invalid tag data")
    )
)]
pub async fn create_tag(
    State(state): State<TagsApiState>,
    ValidatedJson(body): ValidatedJson<NewTag>,
) -> Result<(StatusCode, Json<TagRow>), ApiError> {
    check_tag_group(&state.store, &body.tag_group_id)?;

    let tag = state.store.create_tag(body);
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Partially update a tag
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag ID")),
    request_body = TagPatch,
    responses(
        (status = 200, description = "Tag updated", body = TagRow),
        (status = 400, description = "Invalid tag data"),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn update_tag(
    State(state): State<TagsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<TagPatch>,
) -> Result<Json<TagRow>, ApiError> {
    // Existence resolves first so a missing id is a 404, not a 400
    if !state.store.has_tag(&id) {
        return Err(ApiError::not_found(
            "TAG_NOT_FOUND",
            format!("Tag not found: {}", id),
        ));
    }

    if let Some(tag_group_id) = &body.tag_group_id {
        check_tag_group(&state.store, tag_group_id)?;
    }

    let tag = state
        .store
        .update_tag(&id, body)
        .ok_or_else(|| ApiError::not_found("TAG_NOT_FOUND", format!("Tag not found: {}", id)))?;
    Ok(Json(tag))
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag deleted", body = DeleteResponse),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn delete_tag(
    State(state): State<TagsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_tag(&id) {
        return Err(ApiError::not_found(
            "TAG_NOT_FOUND",
            format!("Tag not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Tag")))
}
