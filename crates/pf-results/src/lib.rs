//! pf-results: batch report records and CSV rendering.

pub mod csv;
pub mod types;

pub use csv::{render_batch_csv, render_sweep_csv};
pub use types::*;
