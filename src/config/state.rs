// Application state module
// Immutable per-process state shared by every connection task

use std::sync::Arc;
use std::time::Duration;

use super::types::Config;
use crate::logger::Logger;

/// Application state
pub struct AppState {
    pub config: Config,
    pub logger: Arc<Logger>,

    // Shared outbound client for `/external` (pooled connections)
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, logger: Arc<Logger>) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            logger,
            http_client,
        })
    }
}
