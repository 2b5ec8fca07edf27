//! Error types for the batch engine.

use thiserror::Error;

/// Errors that can occur while running a batch computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Degenerate yield profile: stream total {total} cannot be normalized")]
    DegenerateYield { total: f64 },
}

pub type EngineResult<T> = Result<T, EngineError>;
