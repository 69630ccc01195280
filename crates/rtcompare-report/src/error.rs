//! Error types for benchmark report parsing

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while reading and parsing a benchmark report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report file not found
    #[error("Report file not found: {path}")]
    FileNotFound {
        /// Path that was attempted
        path: PathBuf,
    },

    /// A line did not have the expected shape
    #[error("Malformed report line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// Reason for failure
        reason: String,
    },

    /// The report ended in the middle of a 4-line block
    #[error("Truncated block starting at line {line}: expected {expected} lines, found {found}")]
    TruncatedBlock {
        /// 1-based line number of the block header
        line: usize,
        /// Lines a block must have
        expected: usize,
        /// Lines actually present
        found: usize,
    },

    /// Layer type key outside the known set
    #[error("Unknown layer type '{key}' on line {line}")]
    UnknownLayerType {
        /// 1-based line number
        line: usize,
        /// Key as found in the report
        key: String,
    },

    /// Layer size outside the benchmarked sizes
    #[error("Unknown layer size {size} on line {line}")]
    UnknownLayerSize {
        /// 1-based line number
        line: usize,
        /// Size token as found in the report
        size: String,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Create a malformed line error
    pub fn malformed_line(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            reason: reason.into(),
        }
    }

    /// Create an unknown layer type error
    pub fn unknown_layer_type(line: usize, key: impl Into<String>) -> Self {
        Self::UnknownLayerType {
            line,
            key: key.into(),
        }
    }

    /// Create an unknown layer size error
    pub fn unknown_layer_size(line: usize, size: impl Into<String>) -> Self {
        Self::UnknownLayerSize {
            line,
            size: size.into(),
        }
    }

    /// Line number the error points at, if any
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedLine { line, .. }
            | Self::TruncatedBlock { line, .. }
            | Self::UnknownLayerType { line, .. }
            | Self::UnknownLayerSize { line, .. } => Some(*line),
            Self::FileNotFound { .. } | Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_numbers() {
        assert_eq!(ReportError::malformed_line(5, "bad").line(), Some(5));
        assert_eq!(
            ReportError::unknown_layer_size(9, "17").line(),
            Some(9)
        );
        let err = ReportError::FileNotFound {
            path: PathBuf::from("missing.txt"),
        };
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_error_display() {
        let err = ReportError::unknown_layer_type(1, "conv2d");
        assert_eq!(err.to_string(), "Unknown layer type 'conv2d' on line 1");

        let err = ReportError::unknown_layer_size(5, "-4");
        assert_eq!(err.to_string(), "Unknown layer size -4 on line 5");
    }
}
