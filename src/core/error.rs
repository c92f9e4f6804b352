//! Error types for mintkit

use crate::core::types::Hash;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mintkit operations
#[derive(Error, Debug)]
pub enum MintkitError {
    /// Nothing to build a tree or provenance hash from
    #[error("No valid input to process: {reason}")]
    EmptyInput { reason: String },

    /// Whitelist-related errors
    #[error("Address not in whitelist: {address}")]
    LeafNotFound { address: String },

    #[error("Malformed address {input:?}{}: {reason}", line_suffix(.line))]
    MalformedAddress {
        input: String,
        line: Option<usize>,
        reason: String,
    },

    #[error("Duplicate address {address} on line {line} (first seen on line {first_line})")]
    DuplicateAddress {
        address: String,
        first_line: usize,
        line: usize,
    },

    #[error("Merkle root mismatch: recorded {expected}, rebuilt {actual}")]
    RootMismatch { expected: Hash, actual: Hash },

    #[error("Address count mismatch: recorded {expected}, list has {actual}")]
    CountMismatch { expected: usize, actual: usize },

    /// Artifact-related errors
    #[error("Required file not found: {path}")]
    MissingArtifact { path: PathBuf },

    #[error("No eligible .{extension} files found in {path}")]
    EmptyDirectory { path: PathBuf, extension: String },

    #[error("File name is not valid UTF-8: {path}")]
    NonUtf8FileName { path: PathBuf },

    #[error("Invalid hash {input:?}: {reason}")]
    InvalidHash { input: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Hex encoding/decoding errors
    #[error("Hex encoding error: {0}")]
    HexError(#[from] hex::FromHexError),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" on line {}", line),
        None => String::new(),
    }
}

impl MintkitError {
    /// Create a new empty input error
    pub fn empty_input(reason: impl Into<String>) -> Self {
        Self::EmptyInput {
            reason: reason.into(),
        }
    }

    /// Create a new leaf not found error
    pub fn leaf_not_found(address: impl Into<String>) -> Self {
        Self::LeafNotFound {
            address: address.into(),
        }
    }

    /// Create a new malformed address error
    pub fn malformed_address(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAddress {
            input: input.into(),
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a 1-based input line number to a malformed address error
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedAddress { input, reason, .. } => Self::MalformedAddress {
                input,
                line: Some(line),
                reason,
            },
            other => other,
        }
    }

    /// Create a new missing artifact error
    pub fn missing_artifact(path: impl Into<PathBuf>) -> Self {
        Self::MissingArtifact { path: path.into() }
    }

    /// Create a new empty directory error
    pub fn empty_directory(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self::EmptyDirectory {
            path: path.into(),
            extension: extension.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for mintkit operations
pub type Result<T> = std::result::Result<T, MintkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_address_message_includes_line() {
        let err = MintkitError::malformed_address("0x12", "expected 40 hex digits").at_line(7);
        let message = err.to_string();
        assert!(message.contains("on line 7"));
        assert!(message.contains("\"0x12\""));
    }

    #[test]
    fn test_at_line_leaves_other_errors_alone() {
        let err = MintkitError::leaf_not_found("0xabc").at_line(3);
        assert!(matches!(err, MintkitError::LeafNotFound { .. }));
    }
}
