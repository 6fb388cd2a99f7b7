//! Error taxonomy for a scan run.
//!
//! Per-port connect failures are deliberately absent: a probe that cannot
//! connect reports the port as closed and never produces an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a raw target into a dialable IP address
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("Invalid URL: {target} - {reason}")]
    InvalidUrl { target: String, reason: String },

    #[error("Lookup failed for {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("No IP addresses found for {host}")]
    NoAddresses { host: String },
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Invalid option specified: {0:?}")]
    InvalidPreset(String),

    #[error("Error reading input from {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing summary log {}: {source}", path.display())]
    SummaryLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Errors that only concern the current target's pass
    pub fn is_per_target(&self) -> bool {
        matches!(self, ScanError::Resolution(_) | ScanError::InvalidPreset(_))
    }
}
