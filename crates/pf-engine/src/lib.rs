//! Deterministic batch engine for plastic pyrolysis.
//!
//! This crate wires the feedstock and process models into a single
//! steady-state pipeline: resolve the blend, apply reactor conditions, run
//! the optional wax recycle, normalize, split the batch into streams and
//! volumes, and evaluate the economics. `simulate` is the only entry point;
//! `sweep_matrix` produces the illustrative temperature matrix from a
//! converged profile.

pub mod economics;
pub mod error;
pub mod fractionate;
pub mod input;
pub mod normalize;
pub mod pipeline;
pub mod sweep;

pub use economics::{EconomicInputs, EconomicsOutcome};
pub use error::{EngineError, EngineResult};
pub use fractionate::{DistillateVolumes, ProductStreams, fractionate_oil, stream_masses};
pub use input::{MIX_SUM_TOLERANCE, SimulationInput};
pub use normalize::normalize;
pub use pipeline::{BatchOutcome, simulate};
pub use sweep::{SWEEP_END_C, SWEEP_START_C, SWEEP_STEP_C, SweepPoint, sweep_matrix};
