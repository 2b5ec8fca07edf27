//! Shared application service layer for pyroflow.
//!
//! This crate provides a unified interface for the front ends, centralizing
//! project management, batch compilation, simulation execution, and report
//! shaping.

pub mod compile;
pub mod error;
pub mod project_service;
pub mod run_service;

// Re-export key types for convenience
pub use compile::compile_batch;
pub use error::{AppError, AppResult};
pub use project_service::{
    BatchSummary, get_batch, list_batches, load_project, save_project, validate_project,
};
pub use run_service::{run_batch, run_sweep};
