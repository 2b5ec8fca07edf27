//! Temperature sensitivity matrix.

use pf_core::numeric::{Real, piecewise_linear};
use pf_feedstock::YieldProfile;

/// Sweep range in °C, inclusive.
pub const SWEEP_START_C: u32 = 400;
pub const SWEEP_END_C: u32 = 550;
pub const SWEEP_STEP_C: u32 = 10;

/// One row of the sensitivity matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub temp_c: Real,
    pub oil_pct: Real,
    pub wax_pct: Real,
}

/// Oil and wax response over the sweep range, anchored on converged yields.
///
/// The anchors sit at fixed offsets from the final profile rather than
/// re-running the pipeline per temperature, so the matrix shows the shape
/// of the response around the converged operating point. Outside the
/// anchor span the curves clamp to the endpoint values.
pub fn sweep_matrix(profile: &YieldProfile) -> Vec<SweepPoint> {
    let oil_anchors = [
        (400.0, profile.oil_pct - 6.0),
        (470.0, profile.oil_pct),
        (500.0, profile.oil_pct - 2.0),
    ];
    let wax_anchors = [
        (400.0, profile.wax_pct + 3.0),
        (470.0, profile.wax_pct),
        (500.0, profile.wax_pct + 5.0),
    ];

    (SWEEP_START_C..=SWEEP_END_C)
        .step_by(SWEEP_STEP_C as usize)
        .map(|t| {
            let temp_c = Real::from(t);
            SweepPoint {
                temp_c,
                oil_pct: piecewise_linear(temp_c, &oil_anchors),
                wax_pct: piecewise_linear(temp_c, &wax_anchors),
            }
        })
        .collect()
}
