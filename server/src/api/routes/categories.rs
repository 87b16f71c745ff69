//! Category API endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, DeleteResponse};
use crate::data::types::{CategoryPatch, CategoryRow, NewCategory};
use crate::data::MemoryStore;

/// Shared state for Category API endpoints
#[derive(Clone)]
pub struct CategoriesApiState {
    pub store: Arc<MemoryStore>,
}

/// Build Category API routes
pub fn routes(store: Arc<MemoryStore>) -> Router<()> {
    let state = CategoriesApiState { store };

    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
        .with_state(state)
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = [CategoryRow])
    )
)]
pub async fn list_categories(State(state): State<CategoriesApiState>) -> Json<Vec<CategoryRow>> {
    Json(state.store.list_categories())
}

/// Get a single category by ID
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryRow),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<CategoriesApiState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryRow>, ApiError> {
    let category = state.store.get_category(&id).ok_or_else(|| {
        ApiError::not_found("CATEGORY_NOT_FOUND", format!("Category not found: {}", id))
    })?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = NewCategory,
    responses(
        (status = 201, description = "Category created", body = CategoryRow),
        (status = 400, description = "Invalid category data")
    )
)]
pub async fn create_category(
    State(state): State<CategoriesApiState>,
    ValidatedJson(body): ValidatedJson<NewCategory>,
) -> (StatusCode, Json<CategoryRow>) {
    let category = state.store.create_category(body);
    (StatusCode::CREATED, Json(category))
}

/// Partially update a category
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    request_body = CategoryPatch,
    responses(
        (status = 200, description = "Category updated", body = CategoryRow),
        (status = 400, description = "Invalid category data"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<CategoriesApiState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<CategoryPatch>,
) -> Result<Json<CategoryRow>, ApiError> {
    let category = state.store.update_category(&id, body).ok_or_else(|| {
        ApiError::not_found("CATEGORY_NOT_FOUND", format!("Category not found: {}", id))
    })?;
    Ok(Json(category))
}

/// Delete a category. Plants pointing at it keep their categoryId.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = DeleteResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<CategoriesApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !state.store.delete_category(&id) {
        return Err(ApiError::not_found(
            "CATEGORY_NOT_FOUND",
            format!("Category not found: {}", id),
        ));
    }
    Ok(Json(DeleteResponse::new("Category")))
}
