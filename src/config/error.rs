//! Configuration failure taxonomy.

use std::io;

use thiserror::Error;

/// Invalid or unreadable sweep configuration.
///
/// Validation failures abort the whole enumeration before any line is
/// rendered; there is no partial output.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("datasets and durations must be index-aligned: {datasets} datasets vs {durations} durations")]
    MisalignedDurations { datasets: usize, durations: usize },

    #[error("domain {domain:?} must not be empty")]
    EmptyDomain { domain: &'static str },

    #[error("read sweep spec: {0}")]
    Io(#[from] io::Error),

    #[error("parse sweep spec: {0}")]
    Parse(#[from] serde_json::Error),
}
