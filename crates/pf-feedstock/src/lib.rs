//! pf-feedstock: feed characterization for pyroflow.
//!
//! Provides:
//! - Polymer definitions (HDPE, LDPE, PP) with base yield profiles
//! - YieldProfile, the four-stream mass breakdown every stage works on
//! - FeedstockMix, pure or blended feed, and the blend resolver
//!
//! The base yield table is empirical: fixed percentages measured at
//! reference reactor conditions. Everything downstream (temperature,
//! catalyst, equipment corrections) perturbs these numbers; nothing here
//! models chemistry.

pub mod blend;
pub mod error;
pub mod polymer;
pub mod profile;

// Re-exports for ergonomics
pub use blend::FeedstockMix;
pub use error::{FeedstockError, FeedstockResult};
pub use polymer::Polymer;
pub use profile::YieldProfile;
