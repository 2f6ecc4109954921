//! Error types for the editor core
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::policies::ValidationIssue;

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Main error type for editor operations
#[derive(Error, Debug)]
pub enum EditorError {
    /// The text is not well-formed YAML (or its root is not a mapping)
    #[error("{}", format_parse_error(.line, .message))]
    Parse {
        line: Option<usize>,
        message: String,
    },

    /// Well-formed YAML that is not a supported administration file of the expected kind
    #[error("not a supported administration file: {reason}")]
    SchemaMismatch { reason: String },

    /// Pre-save validation rejected the document
    #[error("{}", format_validation(.0))]
    Validation(Vec<ValidationIssue>),

    /// Operation needs a loaded document
    #[error("no document is loaded")]
    NoDocument,

    /// Rendering the document to YAML failed
    #[error("failed to serialize document: {0}")]
    Serialize(String),

    /// The file saver refused or failed to store the bytes
    #[error("failed to save '{filename}': {message}")]
    Save { filename: String, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    pub fn schema_mismatch(reason: impl Into<String>) -> Self {
        EditorError::SchemaMismatch {
            reason: reason.into(),
        }
    }

    /// Short title used when the error is surfaced as a notification
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::Parse { .. } => "Invalid YAML file",
            EditorError::SchemaMismatch { .. } => "Wrong file type",
            EditorError::Validation(_) => "Cannot save file",
            EditorError::NoDocument => "No file loaded",
            EditorError::Serialize(_) | EditorError::Save { .. } => "Save failed",
            EditorError::Config { .. } => "Invalid configuration",
            EditorError::Io(_) => "I/O error",
        }
    }
}

fn format_parse_error(line: &Option<usize>, message: &str) -> String {
    match line {
        Some(line) => format!("invalid YAML at line {}: {}", line, message),
        None => format!("invalid YAML: {}", message),
    }
}

fn format_validation(issues: &[ValidationIssue]) -> String {
    let joined = issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    format!("validation failed: {}", joined)
}
