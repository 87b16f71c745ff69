//! Shared API types
//!
//! Error handling and the common response envelopes used across all
//! endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::DataError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conflict {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn from_data(e: DataError) -> Self {
        match e {
            DataError::DuplicateSku { sku } => {
                Self::conflict("DUPLICATE_SKU", format!("SKU already in use: {}", sku))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Conflict { code, message } => (StatusCode::CONFLICT, "conflict", code, message),
            Self::Internal { message } => {
                tracing::error!(%message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "INTERNAL".to_string(),
                    message,
                )
            }
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

/// Response body for successful deletes
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn new(entity: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", entity),
        }
    }
}
