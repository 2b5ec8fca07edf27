//! The batch pipeline: blend, adjust, recycle, normalize, fractionate,
//! evaluate.

use pf_core::units::{in_kg, in_liters};
use pf_feedstock::YieldProfile;
use pf_process::oil_delta_for_temp;
use tracing::debug;

use crate::economics::EconomicsOutcome;
use crate::error::EngineResult;
use crate::fractionate::{DistillateVolumes, ProductStreams, fractionate_oil, stream_masses};
use crate::input::SimulationInput;
use crate::normalize::normalize;

/// Everything one batch computation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Final normalized yield percentages.
    pub profile: YieldProfile,
    /// Product stream masses.
    pub streams: ProductStreams,
    /// Oil volume and distillation cuts.
    pub distillate: DistillateVolumes,
    /// Revenue, cost, profit, ROI.
    pub economics: EconomicsOutcome,
}

/// Runs the full steady-state batch computation.
///
/// Input is validated once here; the stages assume valid data and run
/// unguarded. The computation is pure: the same input always produces the
/// same outcome, and nothing is retained between calls.
pub fn simulate(input: &SimulationInput) -> EngineResult<BatchOutcome> {
    input.validate()?;

    let base = input.feedstock.resolve();
    debug!(
        oil_pct = base.oil_pct,
        wax_pct = base.wax_pct,
        "feedstock resolved"
    );

    let temp_delta = oil_delta_for_temp(input.reactor_temp_c);
    let catalyst_bonus = input.catalyst.oil_bonus();
    let (sequence_oil, sequence_wax) = input.sequence.yield_deltas();
    let adjusted = YieldProfile {
        oil_pct: base.oil_pct + temp_delta + catalyst_bonus + sequence_oil,
        wax_pct: base.wax_pct + sequence_wax,
        ..base
    };
    debug!(
        temp_delta,
        catalyst_bonus, sequence_oil, sequence_wax, "conditions applied"
    );

    let recycled = match &input.recycle {
        Some(plan) => {
            let recycled = plan.apply(&adjusted);
            debug!(
                oil_pct = recycled.oil_pct,
                wax_pct = recycled.wax_pct,
                "recycle applied"
            );
            recycled
        }
        None => adjusted,
    };

    let profile = normalize(&recycled)?;
    debug!(
        oil_pct = profile.oil_pct,
        wax_pct = profile.wax_pct,
        char_pct = profile.char_pct,
        ncg_pct = profile.ncg_pct,
        "profile normalized"
    );

    let streams = stream_masses(input.batch_size_kg, &profile);
    let distillate = fractionate_oil(streams.oil);

    let economics = input.economics.evaluate(
        input.batch_size_kg,
        input.catalyst.quantity_kg,
        in_liters(distillate.total),
        in_kg(streams.ncg),
    );

    Ok(BatchOutcome {
        profile,
        streams,
        distillate,
        economics,
    })
}
