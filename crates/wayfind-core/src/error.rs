//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing/invalid graph file, bad mutation)

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph file or mutation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex already exists: {id}")]
    AlreadyExists { id: VertexId },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: VertexId },

    #[error("edge endpoint missing: {id}")]
    EndpointMissing { id: VertexId },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an error for a graph file that could not be read or parsed
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        WayfindError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_) | WayfindError::UsageError(_) => ExitCode::Usage,

            WayfindError::AlreadyExists { .. }
            | WayfindError::VertexNotFound { .. }
            | WayfindError::EndpointMissing { .. }
            | WayfindError::InvalidGraphFile { .. } => ExitCode::Data,

            WayfindError::Io(_)
            | WayfindError::Json(_)
            | WayfindError::Toml(_)
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::AlreadyExists { .. } => "already_exists",
            WayfindError::VertexNotFound { .. } => "vertex_not_found",
            WayfindError::EndpointMissing { .. } => "endpoint_missing",
            WayfindError::InvalidGraphFile { .. } => "invalid_graph_file",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Render this error as a structured JSON envelope for `--format json`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, WayfindError>;
