//! Error types for newsgrid.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions up to [`AppError`], which the binary reports before exiting.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every failure the CLI can hit
//!   - [`LayoutError`] - Invalid arguments to the column distributor
//!   - [`InputError`] - Item file/stdin reading failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file loading and validation
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup
//!   - `std::io::Error` - Writing the rendered layout to stdout
//!
//! # Recovery Strategy
//!
//! Only invalid arguments are errors inside the layout core. An empty item list or an
//! unknown height class is handled in-band (empty columns, default height). Malformed
//! JSONL lines are skipped with a warning; everything else is fatal for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from [`crate::cli::run`]. Every domain error converts into it via `From`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Column count or other layout argument was rejected.
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Items could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Config file could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Rendering or writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by the layout core.
///
/// The distributor fails fast, before placing any item, rather than clamping a bad
/// argument into a degenerate layout.
///
/// # Examples
///
/// ```
/// use newsgrid::model::{ColumnCount, LayoutError};
///
/// let err = ColumnCount::new(0).unwrap_err();
/// assert!(matches!(err, LayoutError::InvalidArgument { .. }));
/// assert!(err.to_string().contains("column count"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// An argument is outside its valid domain.
    #[error("Invalid argument {value:?}: {reason}")]
    InvalidArgument {
        /// The rejected value, as the caller supplied it.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl LayoutError {
    pub(crate) fn invalid_column_count(value: impl ToString) -> Self {
        LayoutError::InvalidArgument {
            value: value.to_string(),
            reason: "column count must be a positive integer",
        }
    }
}

/// Errors encountered when reading items from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified item file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use newsgrid::model::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// No file was given and stdin is an interactive terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The input is a JSON array that failed to parse.
    #[error("Malformed item list at line {line}: {reason}")]
    Malformed {
        /// 1-based line reported by the JSON parser.
        line: usize,
        /// Parser message.
        reason: String,
    },

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
