//! pf-process: reactor-condition models for pyroflow.
//!
//! Provides the empirical corrections applied to a blended yield profile:
//! - temperature response (piecewise-linear oil delta)
//! - catalyst system (type/quantity/efficiency oil bonus)
//! - equipment sequences S1..S6 (additive oil/wax deltas)
//! - wax recycle loop with optional pre-cracker
//!
//! All models are deterministic functions of configuration and are
//! interpolations or multipliers over fixed tables, not kinetics.

pub mod catalyst;
pub mod error;
pub mod recycle;
pub mod sequence;
pub mod temperature;

// Re-exports
pub use catalyst::{CatalystCharge, CatalystType};
pub use error::{ProcessError, ProcessResult};
pub use recycle::{MAX_RECYCLE_PASSES, Precracker, RECYCLE_PASS_CAP, RecyclePlan};
pub use sequence::EquipmentSequence;
pub use temperature::{OIL_TEMP_RESPONSE, oil_delta_for_temp};
