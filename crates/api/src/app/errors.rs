//! Error responses produced outside the validation gate.
//!
//! Field validation failures never come through here; they are answered with
//! `200` and a [`ValidationErrorsBody`](crate::app::dto::ValidationErrorsBody).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const MALFORMED_BODY: &str = "malformed_body";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        error: code,
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

/// Body of a recognised content type that could not be parsed.
pub fn malformed_body(message: impl Into<String>) -> Response {
    json_error(StatusCode::BAD_REQUEST, MALFORMED_BODY, message)
}
