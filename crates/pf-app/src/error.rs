//! Error types for the pf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for the front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write project file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Batch not found: {0}")]
    BatchNotFound(String),

    #[error("Unknown selection: {field} = '{value}'")]
    UnknownSelection { field: String, value: String },

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<pf_project::ValidationError> for AppError {
    fn from(err: pf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<pf_engine::EngineError> for AppError {
    fn from(err: pf_engine::EngineError) -> Self {
        AppError::Engine(err.to_string())
    }
}

impl From<pf_process::ProcessError> for AppError {
    fn from(err: pf_process::ProcessError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pf_feedstock::FeedstockError> for AppError {
    fn from(err: pf_feedstock::FeedstockError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
