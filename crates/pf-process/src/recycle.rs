//! Wax recycle loop and optional pre-cracking unit.

use pf_core::numeric::{Real, ensure_finite};
use pf_feedstock::YieldProfile;

use crate::error::{ProcessError, ProcessResult};

/// Passes beyond this count recover no additional wax.
pub const RECYCLE_PASS_CAP: u32 = 2;

/// Upper bound accepted for a configured pass count.
pub const MAX_RECYCLE_PASSES: u32 = 3;

/// Thermal pre-cracking unit upstream of the recycle loop.
///
/// The unit upgrades part of the recovered wax into additional oil. A
/// boost of 1.0 is a pass-through; values above 1.0 credit extra oil in
/// proportion to the recovered wax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precracker {
    temperature_c: Real,
    catalyst_boost: Real,
}

impl Precracker {
    pub fn new(temperature_c: Real, catalyst_boost: Real) -> ProcessResult<Self> {
        ensure_finite(temperature_c, "pre-cracker temperature").map_err(|_| {
            ProcessError::NonPhysical {
                what: "pre-cracker temperature must be finite",
            }
        })?;
        if !catalyst_boost.is_finite() || catalyst_boost < 1.0 {
            return Err(ProcessError::InvalidArg {
                what: "pre-cracker catalyst boost must be at least 1.0",
            });
        }
        Ok(Self {
            temperature_c,
            catalyst_boost,
        })
    }

    pub fn temperature_c(&self) -> Real {
        self.temperature_c
    }

    pub fn catalyst_boost(&self) -> Real {
        self.catalyst_boost
    }
}

/// Recycle configuration: pass count plus optional pre-cracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecyclePlan {
    max_recycles: u32,
    precracker: Option<Precracker>,
}

impl RecyclePlan {
    pub fn new(max_recycles: u32, precracker: Option<Precracker>) -> ProcessResult<Self> {
        if max_recycles == 0 || max_recycles > MAX_RECYCLE_PASSES {
            return Err(ProcessError::InvalidArg {
                what: "recycle pass count must be between 1 and 3",
            });
        }
        Ok(Self {
            max_recycles,
            precracker,
        })
    }

    pub fn max_recycles(&self) -> u32 {
        self.max_recycles
    }

    pub fn precracker(&self) -> Option<&Precracker> {
        self.precracker.as_ref()
    }

    /// Returns the profile after the recycle loop has run.
    ///
    /// Each effective pass recovers half of the current wax fraction into
    /// oil; passes beyond [`RECYCLE_PASS_CAP`] recover nothing. Char and
    /// non-condensable gas are untouched. Wax below zero is carried through
    /// the same arithmetic rather than being clamped, so an upstream deficit
    /// shows up as an oil debit here.
    pub fn apply(&self, profile: &YieldProfile) -> YieldProfile {
        let effective_passes = self.max_recycles.min(RECYCLE_PASS_CAP) as Real;
        let wax_recovery = 0.5 * profile.wax_pct * effective_passes;

        let mut oil_pct = profile.oil_pct + wax_recovery;
        let wax_pct = profile.wax_pct - wax_recovery;

        if let Some(precracker) = &self.precracker {
            oil_pct += 0.5 * wax_recovery * (precracker.catalyst_boost - 1.0);
        }

        YieldProfile {
            oil_pct,
            wax_pct,
            ..*profile
        }
    }
}
