//! Request routing module
//!
//! Static path-to-handler table. Exactly one handler governs each path; the
//! table has no parameters and no prefix matching.

use crate::config::AppState;
use crate::handler::{backend, canned, content, external, file_io};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Data,
    External,
    ComplexQuery,
    Cache,
    File,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalError,
}

/// Routing table, in registration order (also the order `/about` lists them)
pub const ROUTES: [(&str, Route); 12] = [
    ("/", Route::Home),
    ("/about", Route::About),
    ("/contact", Route::Contact),
    ("/data", Route::Data),
    ("/external", Route::External),
    ("/complex-query", Route::ComplexQuery),
    ("/cache", Route::Cache),
    ("/file", Route::File),
    ("/unauthorized", Route::Unauthorized),
    ("/forbidden", Route::Forbidden),
    ("/not-found", Route::NotFound),
    ("/internal-error", Route::InternalError),
];

impl Route {
    /// Every route is GET-only; anything else falls through to the default 404
    pub fn resolve(method: &Method, path: &str) -> Option<Self> {
        if method != Method::GET {
            return None;
        }
        ROUTES
            .iter()
            .find(|(route_path, _)| *route_path == path)
            .map(|&(_, route)| route)
    }

    /// Canonical path for a GET whose only mismatch is a trailing slash
    pub fn trailing_slash_redirect(method: &Method, path: &str) -> Option<&'static str> {
        if method != Method::GET || path.len() <= 1 {
            return None;
        }
        let trimmed = path.strip_suffix('/')?;
        ROUTES
            .iter()
            .find(|(route_path, _)| *route_path == trimmed)
            .map(|&(route_path, _)| route_path)
    }
}

/// Run the handler bound to `route`
pub async fn dispatch(route: Route, state: Arc<AppState>) -> Response<Full<Bytes>> {
    match route {
        Route::Home => content::home(),
        Route::About => content::about(),
        Route::Contact => content::contact(),
        Route::Data => backend::data().await,
        Route::External => external::external(&state).await,
        Route::ComplexQuery => backend::complex_query().await,
        Route::Cache => backend::cache().await,
        Route::File => file_io::file(&state).await,
        Route::Unauthorized => canned::unauthorized(),
        Route::Forbidden => canned::forbidden(),
        Route::NotFound => canned::not_found(),
        Route::InternalError => canned::internal_error(),
    }
}
