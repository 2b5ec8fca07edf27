//! pf-core: stable foundation for pyroflow.
//!
//! Contains:
//! - units (uom SI types + constructors for the few unit-bearing boundaries)
//! - numeric (Real + tolerances + float helpers + piecewise interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::PfError;
pub use numeric::*;
pub use units::*;
