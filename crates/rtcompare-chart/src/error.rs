// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for chart rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while rendering charts
#[derive(Debug, Error)]
pub enum ChartError {
    /// Drawing or image encoding failed
    #[error("Failed to draw chart {path}: {reason}")]
    Drawing {
        /// Output path of the chart
        path: PathBuf,
        /// Backend error message
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl ChartError {
    /// Create a drawing error from any backend error
    pub fn drawing(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Drawing {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
