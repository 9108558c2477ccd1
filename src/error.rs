//! Error types for report generation.
//!
//! Every failure surfaces at the outermost boundary as a one-line message
//! and exit code 1. Nothing is retried: parsing and rendering are local and
//! deterministic.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The input document does not exist
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input document is not well-formed or carries an unparseable attribute
    #[error("Failed to parse '{}': {message}", path.display())]
    MalformedInput { path: PathBuf, message: String },

    /// The selected template has no file in the template directory
    #[error("Template '{name}' not found: {} (No such file or directory)", path.display())]
    TemplateMissing { name: String, path: PathBuf },

    /// A derived counter does not fit its integer type
    #[error("Test counts too large to compute '{0}'")]
    CountOverflow(&'static str),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io { path: path.into(), source }
    }

    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReportError::MalformedInput { path: path.into(), message: message.into() }
    }
}
