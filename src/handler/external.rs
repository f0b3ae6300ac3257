//! `/external`: a real outbound HTTPS call after a fixed delay.
//!
//! The upstream status is echoed as this endpoint's status. Any transport
//! failure (DNS, connect, TLS, timeout) becomes the same static 500.

use crate::config::AppState;
use crate::error::SimulationError;
use crate::http::{build_error_response, build_json_response};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;

pub const EXTERNAL_DELAY: Duration = Duration::from_secs(1);

pub async fn external(state: &AppState) -> Response<Full<Bytes>> {
    sleep(EXTERNAL_DELAY).await;

    match call_external(&state.http_client, &state.config.upstream.external_url).await {
        Ok(status) => build_json_response(
            status,
            &json!({
                "external_data":
                    format!("Received data from external API with status code {}", status.as_u16())
            }),
        ),
        Err(err) => {
            state.logger.log_error(&err.to_string());
            build_error_response(StatusCode::INTERNAL_SERVER_ERROR, err.public_message())
        }
    }
}

/// Issue the GET and return only the status; the response is dropped here,
/// which releases the connection and discards the unread body.
async fn call_external(client: &reqwest::Client, url: &str) -> Result<StatusCode, SimulationError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    drop(response);
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::{json_body, test_state};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot upstream that answers every request with `status_line`
    async fn spawn_upstream(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf).await;
                let reply = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhello"
                );
                let _ = stream.write_all(reply.as_bytes()).await;
            }
        });
        format!("http://{addr}/login/")
    }

    #[tokio::test]
    async fn test_upstream_status_is_echoed() {
        let url = spawn_upstream("418 I'm a teapot").await;
        let (state, _access, _error) = test_state(|cfg| cfg.upstream.external_url = url);

        let response = external(&state).await;
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(
            json_body(response).await,
            json!({ "external_data": "Received data from external API with status code 418" })
        );
    }

    #[tokio::test]
    async fn test_upstream_success() {
        let url = spawn_upstream("200 OK").await;
        let (state, _access, _error) = test_state(|cfg| cfg.upstream.external_url = url);

        let response = external(&state).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_static_500() {
        let (state, _access, error) =
            test_state(|cfg| cfg.upstream.external_url = "http://127.0.0.1:1/".to_string());

        let response = external(&state).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to call external API" })
        );
        // Detail only reaches the error log
        assert_eq!(error.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upstream_timeout_is_static_500() {
        // Accepts but never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let (state, _access, _error) = test_state(|cfg| {
            cfg.upstream.external_url = format!("http://{addr}/");
            cfg.upstream.timeout_secs = 1;
        });

        let response = external(&state).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to call external API" })
        );
    }
}
