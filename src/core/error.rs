//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Precise configuration faults. All of them are fatal and raised before any
/// output is produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bar style must be a single printable character, got {0:?}")]
    InvalidStyle(String),
    #[error("bar width {width} is outside {min}..={max}")]
    InvalidWidth { width: usize, min: usize, max: usize },
    #[error("invalid {bound} bound `{text}`, expected {expected}")]
    InvalidBound {
        bound: &'static str,
        text: String,
        expected: &'static str,
    },
    #[error("logarithmic scale needs a positive {bound} bound, got {value}")]
    NonPositiveLogBound { bound: &'static str, value: f64 },
    #[error("invalid delimiter pattern: {0}")]
    InvalidDelimiter(#[from] regex::Error),
    #[error("invalid numeric format `{template}`: {reason}")]
    InvalidNumericFormat {
        template: String,
        reason: &'static str,
    },
}

/// A single input record that could not be rendered. Recoverable: the
/// record is skipped and the run carries on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("line {line}: invalid value `{text}`")]
    BadValue { line: usize, text: String },
    #[error("line {line}: value {value} is not finite")]
    NonFinite { line: usize, value: f64 },
    #[error("line {line}: value {value} has no logarithm")]
    NonPositiveLog { line: usize, value: f64 },
    #[error("line {line}: label `{text}` is not a Unix timestamp")]
    BadTimestamp { line: usize, text: String },
}

impl RecordError {
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::BadValue { line, .. }
            | Self::NonFinite { line, .. }
            | Self::NonPositiveLog { line, .. }
            | Self::BadTimestamp { line, .. } => *line,
        }
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum HistError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
