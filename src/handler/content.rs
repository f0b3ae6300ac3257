//! Static plain-text pages: `/`, `/about`, `/contact`.

use super::router::ROUTES;
use crate::http::build_text_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

pub const WELCOME: &str = "Welcome to ob-test!";
pub const CONTACT: &str = "Contact us at: initializ.ai";

pub fn home() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::OK, WELCOME)
}

pub fn about() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::OK, about_text())
}

pub fn contact() -> Response<Full<Bytes>> {
    build_text_response(StatusCode::OK, CONTACT)
}

/// Numbered list of every registered endpoint, last entry closed with a period
pub fn about_text() -> String {
    let endpoints = ROUTES
        .iter()
        .enumerate()
        .map(|(i, (path, _))| format!("{}. `{path}`", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Mock application.\n\nHere are the endpoint names:\n{endpoints}.")
}
