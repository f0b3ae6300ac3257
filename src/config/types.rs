// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub upstream: UpstreamConfig,
    pub file_io: FileIoConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Emit one JSON access record per request
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    /// Seconds allowed for a request's headers to arrive
    pub read_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Outbound call made by `/external`
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub external_url: String,
    /// Upper bound for the whole outbound request, in seconds
    pub timeout_secs: u64,
}

/// Scratch directory used by `/file`
#[derive(Debug, Deserialize, Clone)]
pub struct FileIoConfig {
    pub dir: String,
}
