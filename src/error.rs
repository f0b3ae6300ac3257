//! Failures of the simulated backends.
//!
//! The variants carry full detail for the error log; clients only ever see
//! [`SimulationError::public_message`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("external API call failed: {0}")]
    ExternalCall(#[from] reqwest::Error),

    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SimulationError {
    /// Static, non-leaking message for the response body
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::ExternalCall(_) => "Failed to call external API",
            Self::FileWrite { .. } => "Failed to write to file",
            Self::FileRead { .. } => "Failed to read from file",
        }
    }
}
