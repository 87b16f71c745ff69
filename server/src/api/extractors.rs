//! Validation extractors for API routes
//!
//! Request bodies and query strings are deserialized and then run through
//! the `validator` rules declared on the schema types. Any failure is a
//! 400 before a handler ever touches the store.

use std::ops::Deref;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Validation rejection with structured error response
pub enum ValidationRejection {
    /// Failed to parse query string
    Query(QueryRejection),
    /// Failed to parse JSON body (includes enum membership violations)
    Json(JsonRejection),
    /// Validation constraints not satisfied
    Validation(validator::ValidationErrors),
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            Self::Query(rejection) => ("QUERY_PARSE_ERROR", rejection.body_text()),
            Self::Json(rejection) => ("JSON_PARSE_ERROR", rejection.body_text()),
            Self::Validation(errors) => ("VALIDATION_ERROR", format_validation_errors(&errors)),
        };
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "bad_request",
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: validation failed", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Query extractor with automatic validation.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;
        value.validate().map_err(ValidationRejection::Validation)?;
        Ok(Self(value))
    }
}

/// JSON body extractor with automatic validation.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;
        value.validate().map_err(ValidationRejection::Validation)?;
        Ok(Self(value))
    }
}
