//! HTTP response building module
//!
//! Builders for the plain-text and JSON responses the handlers return.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE, LOCATION};
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json; charset=utf-8";

/// Generic body for any recovered or unexpected failure
const INTERNAL_ERROR_JSON: &str = r#"{"error":"Internal server error"}"#;

/// Build plain-text response
pub fn build_text_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    build_response(status, TEXT_PLAIN, body.into())
}

/// Build compact JSON response
pub fn build_json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => build_response(status, APPLICATION_JSON, Bytes::from(json)),
        Err(_) => build_500_response(),
    }
}

/// Build `{"error": "<message>"}` response
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    build_json_response(status, &serde_json::json!({ "error": message }))
}

/// Build 404 for paths outside the routing table
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::NOT_FOUND, "404 page not found")
}

/// Build 301 pointing at the canonical form of a path
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    let mut response = build_text_response(StatusCode::MOVED_PERMANENTLY, "Moved Permanently");
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(LOCATION, value);
    }
    response
}

/// Build generic 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        APPLICATION_JSON,
        Bytes::from_static(INTERNAL_ERROR_JSON.as_bytes()),
    )
}

fn build_response(status: StatusCode, content_type: &str, body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .header("Content-Length", body.len())
        .body(Full::new(body.clone()))
        .unwrap_or_else(|_| {
            let mut response = Response::new(Full::new(body));
            *response.status_mut() = status;
            response
        })
}
