use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use roster_core::FieldErrors;

// -------------------------
// Response DTOs
// -------------------------

/// Uniform result of a write operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub payload: serde_json::Value,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Envelope {
    fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            payload: serde_json::json!({}),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn succeeded(message: impl Into<String>) -> Self {
        Self::new(true, message)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(false, message)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Gate rejection body: `{"errors": {field: {location, param, value, msg}}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorsBody {
    pub errors: FieldErrors,
}

impl IntoResponse for ValidationErrorsBody {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
