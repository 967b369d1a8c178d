use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Placeholder listing: echoes the request body back unchanged.
///
/// An empty body is answered with an empty JSON object.
pub async fn echo_body(headers: HeaderMap, body: Bytes) -> Response {
    if body.is_empty() {
        return Json(serde_json::json!({})).into_response();
    }

    let content_type = headers
        .get(CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| axum::http::HeaderValue::from_static("application/octet-stream"));

    (StatusCode::OK, [(CONTENT_TYPE, content_type)], body).into_response()
}
