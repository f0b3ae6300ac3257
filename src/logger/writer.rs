//! Log writer module
//!
//! Thread-safe log writing to files or stdout/stderr. One writer is built at
//! startup and handed to the [`Logger`](super::Logger); there is no global.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

#[cfg(test)]
use std::sync::Arc;

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(Mutex<File>),
    /// Collect lines in memory (tests)
    #[cfg(test)]
    Memory(Arc<Mutex<Vec<String>>>),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access log target
    access: LogTarget,
    /// Error log target
    error: LogTarget,
}

impl LogWriter {
    /// Create a new log writer with optional file paths
    pub fn new(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<Self> {
        let access = match access_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(Mutex::new(open_log_file(path)?)),
            None => LogTarget::Stderr,
        };

        Ok(Self { access, error })
    }

    /// Writer whose access and error lines land in the returned buffers
    #[cfg(test)]
    pub fn in_memory() -> (Self, Arc<Mutex<Vec<String>>>, Arc<Mutex<Vec<String>>>) {
        let access = Arc::new(Mutex::new(Vec::new()));
        let error = Arc::new(Mutex::new(Vec::new()));
        let writer = Self {
            access: LogTarget::Memory(Arc::clone(&access)),
            error: LogTarget::Memory(Arc::clone(&error)),
        };
        (writer, access, error)
    }

    /// Write to access log
    pub fn write_access(&self, message: &str) {
        write_to_target(&self.access, message);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_to_target(&self.error, message);
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    // Create parent directories if they don't exist
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write message to log target
fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{message}");
        }
        LogTarget::Stderr => {
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{message}");
        }
        LogTarget::File(file) => {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{message}");
            }
        }
        #[cfg(test)]
        LogTarget::Memory(lines) => {
            if let Ok(mut lines) = lines.lock() {
                lines.push(message.to_string());
            }
        }
    }
}
