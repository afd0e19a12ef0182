//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Parsing of the timesheet text itself never fails; errors only surface at
//! the boundaries: decoding uploaded bytes, loading configuration, and
//! exporting tables.

use thiserror::Error;

/// Errors raised while turning uploaded document bytes into plain text.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::ExtractionError;
///
/// let error = ExtractionError::Decode {
///     message: "invalid utf-8 sequence of 1 bytes from index 3".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to decode document text: invalid utf-8 sequence of 1 bytes from index 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The document bytes could not be decoded into text.
    #[error("Failed to decode document text: {message}")]
    Decode {
        /// A description of the decode failure.
        message: String,
    },

    /// The uploaded document contained no bytes at all.
    #[error("Document is empty")]
    EmptyDocument,
}

/// Errors raised while loading or validating policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    Parse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The staff category is not one of the recognized options.
    #[error("Unknown staff category: {value}")]
    UnknownCategory {
        /// The rejected category string.
        value: String,
    },

    /// A standard duration was not written as `HH:MM`.
    #[error("Invalid duration '{value}', expected HH:MM")]
    InvalidDuration {
        /// The rejected duration string.
        value: String,
    },

    /// A document layout value is unusable.
    #[error("Invalid document layout: {message}")]
    InvalidLayout {
        /// A description of what made the layout invalid.
        message: String,
    },
}

/// Errors raised while editing or rendering export tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("CSV export failed: {message}")]
    Csv {
        /// A description of the CSV failure.
        message: String,
    },

    /// The JSON serializer rejected the table.
    #[error("JSON export failed: {message}")]
    Json {
        /// A description of the serialization failure.
        message: String,
    },

    /// The rendered output could not be flushed.
    #[error("Export I/O failed: {message}")]
    Io {
        /// A description of the I/O failure.
        message: String,
    },

    /// A row index was outside the table.
    #[error("Row index {index} out of range for table with {len} rows")]
    RowOutOfRange {
        /// The requested row index.
        index: usize,
        /// The number of rows in the table.
        len: usize,
    },
}

/// The top-level error type for the timesheet engine.
///
/// Wraps every boundary error so callers chaining several operations can
/// propagate with `?` into one type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Document text extraction failed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Table export failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
