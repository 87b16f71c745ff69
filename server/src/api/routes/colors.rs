//! Color API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{ColorPatch, ColorRow, NewColor};
use crate::data::MemoryStore;

/// Shared state for Color API endpoints
#[derive(Clone)]
pub struct ColorsApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Color API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = ColorsApiState { store };

    Router::new()
        .route("/", get(list_colors).post(create_color))
        .route(
            "/{id}",
            get(get_color).put(update_color).delete(delete_color),
        )
        .with_state(state)
}

/// List all colors
#[utoipa::path(
    get,
    path = "/api/colors",
    tag = "colors",
    responses(
        (status = 200, description = "All colors", body = [ColorRow])
    )
)]
pub async fn list_colors(State(state): State<ColorsApiState>) -> Json<Vec<ColorRow>> {
    Json(state.store.list_colors())
}

/// Get a single color by ID
#[utoipa::path(
    get,
    path = "/api/colors/{id}",
    tag = "colors",
    params(("id" = String, Path, description = "Color ID")),
    responses(
        (status = 200, description = "Color details", body = ColorRow),
        (status = 404, description = "Color not found")
    )
)]
pub async fn get_color(
    State(state): State<ColorsApiState>,
    Path(id): Path<String>,
) -> Result<Json<ColorRow>, ApiError> {
    let color = state
        .store
        .get_color(&id)
        .ok_or_else(|| ApiError::not_found("COLOR_NOT_FOUND", format!("Color not found: {}", id)))?;
    Ok(Json(color))
}

/// Create a new color
#[utoipa::path(
    post,
    path = "/api/colors",
    tag = "colors",
    request_body = NewColor,
    responses(
        (status = 201, description = "Color created", body = ColorRow),
        (status = 400, description = "Invalid color data")
    )
)]
pub async fn create_color(
    State(state): State<ColorsApiState>,
    ValidatedJson(body): ValidatedJson<NewColor>,
) -> (StatusCode, Json<ColorRow>) {
    let color = state.store.create_color(body);
    (StatusCode::CREATED, Json(color))
}

/// Partially update a color
#[utoipa::path(
    put,
    path = "/api/colors/{id}",
    tag = "colors",
    params(("id" = String, Path, description = "Color ID")),
    request_body = ColorPatch,
    responses(
        (status = 200, description = "Color updated", body = ColorRow),
        (status = 400, description = "Invalid color data"),
        (status = 404, description = "Color not found")
    )
)]
pub async fn update_color(
    State(state): State<ColorsApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<ColorPatch>,
) -> Result<Json<ColorRow>, ApiError> {
    let color = state
        .store
        .update_color(&id, body)
        .ok_or_else(|| ApiError::not_found("COLOR_NOT_FOUND", format!("Color not found: {}", id)))?;
    Ok(Json(color))
}

/// Delete a color
#[utoipa::path(
    delete,
    path = "/api/colors/{id}",
    tag = "colors",
    params(("id" = String, Path, description = "Color ID")),
    responses(
        (status = 200, description = "Color deleted", body = DeleteResponse),
        (status = 404, description = "Color not found")
    )
)]
pub async fn delete_color(
    State(state): State<ColorsApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_color(&id) {
        return Err(ApiError::not_found(
            "COLOR_NOT_FOUND",
            format!("Color not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Color")))
}
