//! Logger module
//!
//! Provides logging for the mock server:
//! - Server lifecycle logging
//! - Structured JSON access logging, one line per request
//! - Error and warning logging
//! - File-based logging support
//!
//! A [`Logger`] is built once in `main` and passed down through `AppState`.

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::io;
use std::net::SocketAddr;
use writer::LogWriter;

/// Diagnostic verbosity, ordered from quietest to noisiest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Unknown names fall back to `Info`
    pub fn parse(level: &str) -> Self {
        match level.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "trace" => Self::Debug,
            _ => Self::Info,
        }
    }
}

pub struct Logger {
    writer: LogWriter,
    level: LogLevel,
    access_log: bool,
}

impl Logger {
    pub const fn new(writer: LogWriter, level: LogLevel, access_log: bool) -> Self {
        Self {
            writer,
            level,
            access_log,
        }
    }

    /// Build the logger described by the `[logging]` section
    pub fn from_config(config: &Config) -> io::Result<Self> {
        let writer = LogWriter::new(
            config.logging.access_log_file.as_deref(),
            config.logging.error_log_file.as_deref(),
        )?;
        Ok(Self::new(
            writer,
            LogLevel::parse(&config.logging.level),
            config.logging.access_log,
        ))
    }

    fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level
    }

    pub fn log_server_start(&self, addr: &SocketAddr, config: &Config) {
        self.log_info("======================================");
        self.log_info("Mock workload server started");
        self.log_info(&format!("Listening on: http://{addr}"));
        self.log_info(&format!("Log level: {}", config.logging.level));
        if let Some(workers) = config.server.workers {
            self.log_info(&format!("Worker threads: {workers}"));
        }
        if let Some(ref path) = config.logging.access_log_file {
            self.log_info(&format!("Access log: {path}"));
        }
        if let Some(ref path) = config.logging.error_log_file {
            self.log_info(&format!("Error log: {path}"));
        }
        self.log_info(&format!(
            "External API: {} (timeout {}s)",
            config.upstream.external_url, config.upstream.timeout_secs
        ));
        self.log_info("======================================");
    }

    /// Informational lines go to stderr so stdout carries only access records
    pub fn log_info(&self, message: &str) {
        if self.enabled(LogLevel::Info) {
            self.writer.write_error(&format!("[INFO] {message}"));
        }
    }

    pub fn log_debug(&self, message: &str) {
        if self.enabled(LogLevel::Debug) {
            self.writer.write_error(&format!("[DEBUG] {message}"));
        }
    }

    pub fn log_warning(&self, message: &str) {
        if self.enabled(LogLevel::Warn) {
            self.writer.write_error(&format!("[WARN] {message}"));
        }
    }

    pub fn log_error(&self, message: &str) {
        self.writer.write_error(&format!("[ERROR] {message}"));
    }

    pub fn log_connection_error(&self, err: &impl std::fmt::Debug) {
        self.log_error(&format!("Failed to serve connection: {err:?}"));
    }

    /// Emit one structured access record
    pub fn log_access(&self, entry: &AccessLogEntry) {
        if self.access_log {
            self.writer.write_access(&entry.to_json());
        }
    }
}
