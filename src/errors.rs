/*!
 * Error types for the srt3dass application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that abort the conversion of a subtitle document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The cue index line is not a number or is out of sequence
    #[error("Invalid cue index on line {line_number}: expected {expected}, found {found:?}")]
    InvalidCueIndex {
        /// 1-based line number in the source text
        line_number: usize,
        /// Index the parser was waiting for
        expected: usize,
        /// Offending line as read
        found: String,
    },
}

impl ConversionError {
    /// Line number the error was reported on
    pub fn line_number(&self) -> usize {
        match self {
            Self::InvalidCueIndex { line_number, .. } => *line_number,
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from subtitle conversion
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

// Utility functions for error conversion
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
