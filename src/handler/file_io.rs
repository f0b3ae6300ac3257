//! `/file`: write, read back, and delete a small scratch file.
//!
//! Each request works on its own `sample-<uuid>.txt`, so concurrent requests
//! never observe each other's file.

use crate::config::AppState;
use crate::error::SimulationError;
use crate::http::{build_error_response, build_json_response};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde_json::json;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

pub const SAMPLE_CONTENT: &[u8] = b"Hello, World!";

pub async fn file(state: &AppState) -> Response<Full<Bytes>> {
    let path = sample_path(Path::new(&state.config.file_io.dir));
    file_cycle(state, &path, fs::read).await
}

/// Write `path`, read it back through `read`, and always attempt removal
async fn file_cycle<R, Fut>(state: &AppState, path: &Path, read: R) -> Response<Full<Bytes>>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = io::Result<Vec<u8>>>,
{
    let result = write_and_read(path, read).await;

    // Cleanup runs whatever stage failed; a failed write may still leave a partial file
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != io::ErrorKind::NotFound {
            state
                .logger
                .log_warning(&format!("Failed to remove {}: {e}", path.display()));
        }
    }

    match result {
        Ok(content) => build_json_response(StatusCode::OK, &json!({ "file_content": content })),
        Err(err) => {
            state.logger.log_error(&err.to_string());
            build_error_response(StatusCode::INTERNAL_SERVER_ERROR, err.public_message())
        }
    }
}

fn sample_path(dir: &Path) -> PathBuf {
    dir.join(format!("sample-{}.txt", Uuid::new_v4()))
}

async fn write_and_read<R, Fut>(path: &Path, read: R) -> Result<String, SimulationError>
where
    R: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = io::Result<Vec<u8>>>,
{
    fs::write(path, SAMPLE_CONTENT)
        .await
        .map_err(|source| SimulationError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    let data = read(path.to_path_buf())
        .await
        .map_err(|source| SimulationError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&data).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test_support::{json_body, test_state, ScratchDir};

    #[test]
    fn test_sample_paths_are_unique() {
        let dir = Path::new(".");
        assert_ne!(sample_path(dir), sample_path(dir));
        assert_eq!(sample_path(dir).parent(), Some(dir));
    }

    #[tokio::test]
    async fn test_round_trip_leaves_no_residue() {
        let scratch = ScratchDir::new();
        let dir = scratch.path_string();
        let (state, _access, _error) = test_state(|cfg| cfg.file_io.dir = dir);

        let response = file(&state).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "file_content": "Hello, World!" }));
        assert_eq!(scratch.entries(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_requests_do_not_interfere() {
        let scratch = ScratchDir::new();
        let dir = scratch.path_string();
        let (state, _access, _error) = test_state(|cfg| cfg.file_io.dir = dir);

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let state = std::sync::Arc::clone(&state);
            tasks.push(tokio::spawn(async move { file(&state).await.status() }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::OK);
        }
        assert_eq!(scratch.entries(), 0);
    }

    #[tokio::test]
    async fn test_write_failure_is_static_500() {
        let scratch = ScratchDir::new();
        let missing = scratch.path().join("does-not-exist");
        let dir = missing.to_string_lossy().into_owned();
        let (state, _access, error) = test_state(|cfg| cfg.file_io.dir = dir);

        let response = file(&state).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({ "error": "Failed to write to file" }));

        let lines = error.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[ERROR] failed to write"));
    }

    #[tokio::test]
    async fn test_read_failure_is_static_500_and_file_is_removed() {
        let scratch = ScratchDir::new();
        let dir = scratch.path_string();
        let (state, _access, error) = test_state(|cfg| cfg.file_io.dir = dir);
        let path = sample_path(scratch.path());

        let response = file_cycle(&state, &path, |written: PathBuf| async move {
            assert!(written.exists());
            Err::<Vec<u8>, _>(io::Error::new(io::ErrorKind::InvalidData, "unreadable"))
        })
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await, json!({ "error": "Failed to read from file" }));
        assert_eq!(scratch.entries(), 0);

        let lines = error.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[ERROR] failed to read"));
        assert!(lines[0].contains("unreadable"));
    }
}
