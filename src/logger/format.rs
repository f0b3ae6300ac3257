//! Access log format module
//!
//! One JSON object per completed request:
//! `{"timestamp":"<RFC3339>","method":"GET","path":"/data","status":200,"latency":"700.4ms","client_ip":"127.0.0.1"}`

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use std::net::IpAddr;
use std::time::Duration;

/// Access log entry containing all request/response information
#[derive(Debug, Clone, Serialize)]
pub struct AccessLogEntry {
    /// Completion time, RFC3339
    pub timestamp: String,
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code actually sent
    pub status: u16,
    /// Handler latency, human readable (e.g. `700.41ms`)
    pub latency: String,
    /// Client IP address
    pub client_ip: String,
}

impl AccessLogEntry {
    /// Create an entry stamped with the current local time
    pub fn new(method: &str, path: &str, status: u16, latency: Duration, client_ip: IpAddr) -> Self {
        Self::at(Local::now(), method, path, status, latency, client_ip)
    }

    pub fn at(
        time: DateTime<Local>,
        method: &str,
        path: &str,
        status: u16,
        latency: Duration,
        client_ip: IpAddr,
    ) -> Self {
        Self {
            timestamp: time.to_rfc3339_opts(SecondsFormat::Secs, false),
            method: method.to_string(),
            path: path.to_string(),
            status,
            latency: format!("{latency:?}"),
            client_ip: client_ip.to_string(),
        }
    }

    /// Serialize as a single JSON line
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"error":"failed to serialize access log entry: {e}"}}"#)
        })
    }
}
