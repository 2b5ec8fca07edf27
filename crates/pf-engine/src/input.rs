//! Batch input record and boundary validation.

use pf_core::numeric::{Real, ensure_finite};
use pf_feedstock::FeedstockMix;
use pf_process::{CatalystCharge, EquipmentSequence, RecyclePlan};

use crate::economics::EconomicInputs;
use crate::error::{EngineError, EngineResult};

/// Tolerance on a blend summing to 100.
pub const MIX_SUM_TOLERANCE: Real = 1e-6;

/// Complete description of one batch run.
///
/// `reactor_pressure_atm`, `condenser_stages` and `vacuum_pumps` are carried
/// as configuration but do not influence the yield model.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub feedstock: FeedstockMix,
    pub batch_size_kg: Real,
    pub reactor_temp_c: Real,
    pub reactor_pressure_atm: Real,
    pub catalyst: CatalystCharge,
    pub sequence: EquipmentSequence,
    pub condenser_stages: u32,
    pub vacuum_pumps: u32,
    pub recycle: Option<RecyclePlan>,
    pub economics: EconomicInputs,
}

impl SimulationInput {
    /// Checks every precondition the pipeline stages rely on.
    ///
    /// This runs once at the start of a simulation; the stages themselves
    /// assume a valid input and stay unguarded.
    pub fn validate(&self) -> EngineResult<()> {
        if let FeedstockMix::Blended {
            hdpe_pct,
            ldpe_pct,
            pp_pct,
        } = self.feedstock
        {
            let sum = hdpe_pct + ldpe_pct + pp_pct;
            if !sum.is_finite() || (sum - 100.0).abs() > MIX_SUM_TOLERANCE {
                return Err(EngineError::InvalidConfig {
                    field: "feedstock",
                    value: sum,
                    reason: "blend percentages must total 100",
                });
            }
        }

        check_positive(self.batch_size_kg, "batch_size_kg")?;
        check_finite(self.reactor_temp_c, "reactor_temp_c")?;
        check_positive(self.reactor_pressure_atm, "reactor_pressure_atm")?;

        let econ = &self.economics;
        check_non_negative(econ.feed_cost_per_kg, "feed_cost_per_kg")?;
        check_non_negative(econ.energy_cost_per_kg, "energy_cost_per_kg")?;
        check_non_negative(econ.catalyst_cost_per_kg, "catalyst_cost_per_kg")?;
        check_positive(econ.catalyst_life_batches, "catalyst_life_batches")?;
        check_non_negative(econ.ldo_cost_per_l, "ldo_cost_per_l")?;
        check_non_negative(econ.labor_cost_per_hr, "labor_cost_per_hr")?;
        check_non_negative(econ.ncg_reuse_bonus_per_kg, "ncg_reuse_bonus_per_kg")?;
        check_non_negative(econ.oil_price_per_l, "oil_price_per_l")?;

        Ok(())
    }
}

fn check_finite(value: Real, field: &'static str) -> EngineResult<()> {
    ensure_finite(value, field).map_err(|_| EngineError::InvalidConfig {
        field,
        value,
        reason: "must be finite",
    })?;
    Ok(())
}

fn check_positive(value: Real, field: &'static str) -> EngineResult<()> {
    check_finite(value, field)?;
    if value <= 0.0 {
        return Err(EngineError::InvalidConfig {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn check_non_negative(value: Real, field: &'static str) -> EngineResult<()> {
    check_finite(value, field)?;
    if value < 0.0 {
        return Err(EngineError::InvalidConfig {
            field,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_feedstock::Polymer;

    fn valid_input() -> SimulationInput {
        SimulationInput {
            feedstock: FeedstockMix::pure(Polymer::Hdpe),
            batch_size_kg: 10_000.0,
            reactor_temp_c: 450.0,
            reactor_pressure_atm: 1.0,
            catalyst: CatalystCharge::none(),
            sequence: EquipmentSequence::S1Basic,
            condenser_stages: 1,
            vacuum_pumps: 2,
            recycle: None,
            economics: EconomicInputs::default(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn blend_must_total_100() {
        let mut input = valid_input();
        input.feedstock = FeedstockMix::blended(50.0, 30.0, 30.0).unwrap();
        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidConfig {
                field: "feedstock",
                ..
            }
        ));
    }

    #[test]
    fn blend_within_tolerance_passes() {
        let mut input = valid_input();
        input.feedstock = FeedstockMix::blended(40.0, 30.0, 30.0 + 1e-9).unwrap();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn zero_batch_rejected() {
        let mut input = valid_input();
        input.batch_size_kg = 0.0;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfig {
                field: "batch_size_kg",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_temperature_rejected() {
        let mut input = valid_input();
        input.reactor_temp_c = f64::INFINITY;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfig {
                field: "reactor_temp_c",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_batch_size_rejected() {
        let mut input = valid_input();
        input.batch_size_kg = f64::NAN;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfig {
                field: "batch_size_kg",
                ..
            })
        ));
    }

    #[test]
    fn negative_cost_rejected() {
        let mut input = valid_input();
        input.economics.feed_cost_per_kg = -1.0;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfig {
                field: "feed_cost_per_kg",
                ..
            })
        ));
    }

    #[test]
    fn zero_catalyst_life_rejected() {
        // Life divides the catalyst cost, so it must stay positive even when
        // the cost itself is zero.
        let mut input = valid_input();
        input.economics.catalyst_life_batches = 0.0;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfig {
                field: "catalyst_life_batches",
                ..
            })
        ));
    }

    #[test]
    fn zero_costs_are_valid() {
        let mut input = valid_input();
        input.economics = EconomicInputs {
            feed_cost_per_kg: 0.0,
            energy_cost_per_kg: 0.0,
            catalyst_cost_per_kg: 0.0,
            ldo_cost_per_l: 0.0,
            labor_cost_per_hr: 0.0,
            ncg_reuse_bonus_per_kg: 0.0,
            oil_price_per_l: 0.0,
            ..EconomicInputs::default()
        };
        assert!(input.validate().is_ok());
    }
}
