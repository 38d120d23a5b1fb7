//! Error types for report-export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the input file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array of records.
    #[error("expected a JSON array of records")]
    NotAnArray,

    /// An element of the array is not an object.
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A field holds a nested array or object.
    #[error("record {index}, field '{field}': nested values are not supported")]
    UnsupportedValue { index: usize, field: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },

    /// The target file name is not a single plain path component.
    #[error("invalid file name '{filename}': must not contain path separators")]
    InvalidFilename { filename: String },

    /// The PDF renderer failed.
    #[error("PDF rendering failed: {message}")]
    Pdf { message: String },

    /// A record does not match the schema under the strict policy.
    #[error("record {record}, field '{field}': {message}")]
    SchemaMismatch {
        record: usize,
        field: String,
        message: String,
    },
}

impl From<printpdf::Error> for ExportError {
    fn from(e: printpdf::Error) -> Self {
        ExportError::Pdf {
            message: e.to_string(),
        }
    }
}
