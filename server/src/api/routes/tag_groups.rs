//! Tag group API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{NewTagGroup, TagGroupPatch, TagGroupRow};
use crate::data::MemoryStore;

/// Shared state for Tag group API endpoints
#[derive(Clone)]
pub struct TagGroupsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Tag group API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = TagGroupsApiState { store };

    Router::new()
        .route("/", get(list_tag_groups).post(create_tag_group))
        .route(
            "/{id}",
            get(get_tag_group)
                .put(update_tag_group)
                .delete(delete_tag_group),
        )
        .with_state(state)
}

/// List all tag groups
#[utoipa::path(
    get,
    path = "/api/tag-groups",
    tag = "tag-groups",
    responses(
        (status = 200, description = "All tag groups", body = [TagGroupRow])
    )
)]
pub async fn list_tag_groups(State(state): State<TagGroupsApiState>) -> Json<Vec<TagGroupRow>> {
    Json(state.store.list_tag_groups())
}

/// Get a single tag group by ID
#[utoipa::path(
    get,
    path = "/api/tag-groups/{id}",
    tag = "tag-groups",
    params(("id" = String, Path, description = "Tag group ID")),
    responses(
        (status = 200, description = "Tag group details", body = TagGroupRow),
        (status = 404, description = "Tag group not found")
    )
)]
pub async fn get_tag_group(
    State(state): State<TagGroupsApiState>,
    Path(id): Path<String>,
) -> Result<Json<TagGroupRow>, ApiError> {
    let group = state.store.get_tag_group(&id).ok_or_else(|| {
        ApiError::not_found("TAG_GROUP_NOT_FOUND", format!("Tag group not found: {}", id))
    })?;
    Ok(Json(group))
}

/// Create a new tag group
#[utoipa::path(
    post,
    path = "/api/tag-groups",
    tag = "tag-groups",
    request_body = NewTagGroup,
    responses(
        (status = 201, description = "Tag group created", body = TagGroupRow),
        (status = 400, description = "Invalid tag group data")
    )
)]
pub async fn create_tag_group(
    State(state): State<TagGroupsApiState>,
    ValidatedJson(body): ValidatedJson<NewTagGroup>,
) -> (StatusCode, Json<TagGroupRow>) {
    let group = state.store.create_tag_group(body);
    (StatusCode::CREATED, Json(group))
}

/// Partially update a tag group
#[utoipa::path(
    put,
    path = "/api/tag-groups/{id}",
    tag = "tag-groups",
    params(("id" = String, Path, description = "Tag group ID")),
    request_body = TagGroupPatch,
    responses(
        (status = 200, description = "Tag group updated", body = TagGroupRow),
        (status = 400, description = "Invalid tag group data"),
        (status = 404, description = "Tag group not found")
    )
)]
pub async fn update_tag_group(
    State(state): State<TagGroupsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<TagGroupPatch>,
) -> Result<Json<TagGroupRow>, ApiError> {
    let group = state.store.update_tag_group(&id, body).ok_or_else(|| {
        ApiError::not_found("TAG_GROUP_NOT_FOUND", format!("Tag group not found: {}", id))
    })?;
    Ok(Json(group))
}

/// Delete a tag group. Tags pointing at it keep their tagGroupId.
#[utoipa::path(
    delete,
    path = "/api/tag-groups/{id}",
    tag = "tag-groups",
    params(("id" = String, Path, description = "Tag group ID")),
    responses(
        (status = 200, description = "Tag group deleted", body = DeleteResponse),
        (status = 404, description = "Tag group not found")
    )
)]
pub async fn delete_tag_group(
    State(state): State<TagGroupsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_tag_group(&id) {
        return Err(ApiError::not_found(
            "TAG_GROUP_NOT_FOUND",
            format!("Tag group not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Tag group")))
}
