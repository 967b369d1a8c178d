//! Request body extraction into flat form fields.
//!
//! Accepts `application/json` objects and `application/x-www-form-urlencoded`
//! bodies. Anything else (including no body) yields an empty field set so
//! required-field errors surface through the validation gate.

use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::Response,
    Form, Json,
};
use serde_json::Value;

use roster_core::FormFields;

use crate::app::errors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody(pub FormFields);

enum BodyKind {
    Json,
    UrlEncoded,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Other
    }
}

/// Flatten a JSON object into string fields.
///
/// Strings are taken as-is, numbers and booleans are stringified; null, arrays
/// and nested objects carry no form value and are dropped.
pub fn fields_from_json(value: Value) -> Result<FormFields, &'static str> {
    let Value::Object(map) = value else {
        return Err("expected a JSON object");
    };

    Ok(map
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            Value::Number(n) => Some((k, n.to_string())),
            Value::Bool(b) => Some((k, b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
        .collect())
}

#[axum::async_trait]
impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| errors::malformed_body(e.body_text()))?;
                fields_from_json(value)
                    .map(FormBody)
                    .map_err(errors::malformed_body)
            }
            BodyKind::UrlEncoded => {
                let Form(fields) = Form::<FormFields>::from_request(req, state)
                    .await
                    .map_err(|e| errors::malformed_body(e.body_text()))?;
                Ok(FormBody(fields))
            }
            BodyKind::Other => Ok(FormBody::default()),
        }
    }
}
