//! Mass-yield profile record.

use pf_core::numeric::{Real, Tolerances, nearly_equal};

/// Percentage breakdown of batch mass into the four product streams.
///
/// Values are percent of feed mass. During the pipeline the profile is free
/// to drift away from a 100 total (condition deltas, recycle transfers);
/// the normalizer restores exact closure at the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldProfile {
    pub oil_pct: Real,
    pub wax_pct: Real,
    pub char_pct: Real,
    pub ncg_pct: Real,
}

impl YieldProfile {
    pub const fn new(oil_pct: Real, wax_pct: Real, char_pct: Real, ncg_pct: Real) -> Self {
        Self {
            oil_pct,
            wax_pct,
            char_pct,
            ncg_pct,
        }
    }

    /// Sum of the four streams, in percent.
    pub fn total(&self) -> Real {
        self.oil_pct + self.wax_pct + self.char_pct + self.ncg_pct
    }

    /// True when the four streams sum to 100 within `tol`.
    pub fn is_closed(&self, tol: Tolerances) -> bool {
        nearly_equal(self.total(), 100.0, tol)
    }
}
