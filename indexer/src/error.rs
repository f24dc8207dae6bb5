//! Error types for the ROM catalog conversion.
//!
//! - [`CsvError`] - reading and parsing the input CSV
//! - [`ConversionError`] - top-level errors returned by [`crate::convert`]
//!
//! `CsvError` converts from [`csv::Error`] and [`std::io::Error`], so `?`
//! works inside the parser. The pipeline lifts it into `ConversionError`
//! with [`ConversionError::input`], which keeps the input path for
//! not-found reports.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open or read the file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] io::Error),

    /// The reader rejected the content (invalid UTF-8, broken quoting).
    #[error("Invalid CSV{}: {message}", line_suffix(.line))]
    ParseError { line: Option<u64>, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => CsvError::IoError(e),
            _ => CsvError::ParseError { line, message },
        }
    }
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::convert`] and
/// [`crate::convert_with`].
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The input file does not exist.
    #[error("Input file not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    /// The input could not be read or parsed.
    #[error("Cannot read input: {0}")]
    Input(CsvError),

    /// A previously written document could not be read back.
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating or writing the output file failed.
    #[error("Failed to write '{}': {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConversionError {
    /// Lift a parser error, reporting a missing file as [`ConversionError::InputNotFound`].
    pub fn input(path: &Path, err: CsvError) -> Self {
        match err {
            CsvError::IoError(e) if e.kind() == io::ErrorKind::NotFound => {
                ConversionError::InputNotFound {
                    path: path.to_path_buf(),
                }
            }
            other => ConversionError::Input(other),
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        ConversionError::OutputWriteFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return ConversionError::InputNotFound {
                path: path.to_path_buf(),
            };
        }
        ConversionError::ReadFailure {
            path: path.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
