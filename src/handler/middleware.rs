//! Per-request middleware: timing, panic recovery and the access log.
//!
//! The handler and the access record run together on a detached task, so the
//! record is written after the handler finishes even if the client has
//! already gone away. `status` is always the status the handler produced,
//! including recovered panics.

use crate::config::AppState;
use crate::handler::router::{dispatch, Route};
use crate::http::{build_404_response, build_500_response, build_redirect_response};
use crate::logger::{AccessLogEntry, Logger};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response, Uri};
use std::any::Any;
use std::convert::Infallible;
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::time::Instant;

/// What the access log needs to know about a request, captured on arrival
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: Method,
    /// Path plus `?query` when the query is non-empty
    pub path: String,
    pub client_ip: IpAddr,
    pub started: Instant,
}

impl RequestRecord {
    pub fn new<B>(req: &Request<B>, peer_addr: SocketAddr) -> Self {
        Self {
            method: req.method().clone(),
            path: logged_path(req.uri()),
            client_ip: client_ip(req.headers(), peer_addr),
            started: Instant::now(),
        }
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let record = RequestRecord::new(&req, peer_addr);
    let method = req.method().clone();
    let uri = req.uri().clone();
    drop(req);

    let logger = Arc::clone(&state.logger);
    let response = match Route::resolve(&method, uri.path()) {
        Some(route) => handle_with(dispatch(route, state), record, logger).await,
        None => {
            let fallback = fallback_response(&method, &uri);
            handle_with(async move { fallback }, record, logger).await
        }
    };

    Ok(response)
}

/// Run `handler` and write its access record on a task of their own.
///
/// Dropping the returned future (the client hung up) does not cancel the
/// handler; the record is still written once it completes.
pub async fn handle_with<F>(
    handler: F,
    record: RequestRecord,
    logger: Arc<Logger>,
) -> Response<Full<Bytes>>
where
    F: Future<Output = Response<Full<Bytes>>> + Send + 'static,
{
    let task_logger = Arc::clone(&logger);
    let task = tokio::spawn(async move {
        let response = recover(handler, &task_logger).await;
        let entry = AccessLogEntry::new(
            record.method.as_str(),
            &record.path,
            response.status().as_u16(),
            record.started.elapsed(),
            record.client_ip,
        );
        task_logger.log_access(&entry);
        response
    });

    match task.await {
        Ok(response) => response,
        Err(err) => {
            logger.log_error(&format!("Request task failed: {err}"));
            build_500_response()
        }
    }
}

/// Unmatched requests: GET with a stray trailing slash is redirected to the
/// registered path (query kept), everything else is the plain 404
fn fallback_response(method: &Method, uri: &Uri) -> Response<Full<Bytes>> {
    match Route::trailing_slash_redirect(method, uri.path()) {
        Some(canonical) => match uri.query().filter(|q| !q.is_empty()) {
            Some(query) => build_redirect_response(&format!("{canonical}?{query}")),
            None => build_redirect_response(canonical),
        },
        None => build_404_response(),
    }
}

fn logged_path(uri: &Uri) -> String {
    match uri.query().filter(|q| !q.is_empty()) {
        Some(query) => format!("{}?{query}", uri.path()),
        None => uri.path().to_string(),
    }
}

/// Run `handler` on its own task; a panic there becomes a generic 500
pub async fn recover<F>(handler: F, logger: &Logger) -> Response<Full<Bytes>>
where
    F: Future<Output = Response<Full<Bytes>>> + Send + 'static,
{
    match tokio::spawn(handler).await {
        Ok(response) => response,
        Err(err) if err.is_panic() => {
            logger.log_error(&format!(
                "Recovered from handler panic: {}",
                panic_message(err.into_panic().as_ref())
            ));
            build_500_response()
        }
        Err(err) => {
            logger.log_error(&format!("Handler task failed: {err}"));
            build_500_response()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// First `X-Forwarded-For` hop, then `X-Real-IP`, then the socket peer
fn client_ip(headers: &HeaderMap, peer_addr: SocketAddr) -> IpAddr {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse().ok());

    forwarded
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
        })
        .unwrap_or_else(|| peer_addr.ip())
}
