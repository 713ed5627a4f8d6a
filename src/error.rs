//! Error taxonomy for the forecast service.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures raised while producing historical or forecast payloads.
///
/// Row-level anomalies never show up here: malformed historical rows are
/// dropped and malformed forecast rows pass through as NaN.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ForecastError {
    /// File that caused the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Csv { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ForecastError>;
