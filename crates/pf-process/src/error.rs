//! Error types for process-model operations.

use thiserror::Error;

/// Errors that can occur while building process-model configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ProcessResult<T> = Result<T, ProcessError>;
