//! Simulated slow backends: `/data`, `/complex-query`, `/cache`.
//!
//! Each sleep suspends only the request's own task. Content never varies and
//! there is no failure path.

use crate::http::build_json_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;

pub const DATA_DELAY: Duration = Duration::from_millis(500);
pub const QUERY_DELAY: Duration = Duration::from_millis(200);
pub const COMPLEX_STEP_DELAY: Duration = Duration::from_millis(300);
pub const CACHE_DELAY: Duration = Duration::from_millis(100);

pub const DB_RESPONSE: &str = "Fake DB response: {'id': 1, 'name': 'Test Item'}";
pub const ANOTHER_DB_RESPONSE: &str = "Another DB response: {'id': 2, 'name': 'Another Item'}";
pub const CACHED_DATA: &str = "Cached data: {'key': 'cached_value'}";

async fn query_database() -> &'static str {
    sleep(QUERY_DELAY).await;
    DB_RESPONSE
}

async fn another_database_query() -> &'static str {
    sleep(QUERY_DELAY).await;
    ANOTHER_DB_RESPONSE
}

/// 500ms of "connection" latency, then one 200ms query
pub async fn data() -> Response<Full<Bytes>> {
    sleep(DATA_DELAY).await;
    let result = query_database().await;
    build_json_response(StatusCode::OK, &json!({ "data": result }))
}

/// Two queries, each preceded by 300ms of processing
pub async fn complex_query() -> Response<Full<Bytes>> {
    sleep(COMPLEX_STEP_DELAY).await;
    let first = query_database().await;

    sleep(COMPLEX_STEP_DELAY).await;
    let second = another_database_query().await;

    build_json_response(
        StatusCode::OK,
        &json!({ "complex_data": format!("Combined Results: {first}, {second}") }),
    )
}

/// Always a "hit"; nothing is stored or looked up
pub async fn cache() -> Response<Full<Bytes>> {
    sleep(CACHE_DELAY).await;
    build_json_response(StatusCode::OK, &json!({ "cache_data": CACHED_DATA }))
}
