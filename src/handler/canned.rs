//! Fixed status-code simulators for exercising client error paths.

use crate::http::build_error_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub fn unauthorized() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::UNAUTHORIZED, "Unauthorized access")
}

pub fn forbidden() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::FORBIDDEN, "Forbidden access")
}

pub fn not_found() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "Resource not found")
}

pub fn internal_error() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
