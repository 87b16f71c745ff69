//! Client error type

use serde::Deserialize;

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[allow(dead_code)]
    pub error: String,
    pub code: String,
    pub message: String,
}

/// Errors returned by the PlantDesk client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the request
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Response body could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(parsed) => Self::Api {
                status,
                code: parsed.code,
                message: parsed.message,
            },
            Err(_) => Self::Api {
                status,
                code: "UNKNOWN".to_string(),
                message: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}
