//! Compilation of batch definitions into executable simulation inputs.
//!
//! This is where selection strings from the project file become closed
//! enums. Lookups fail with a typed error instead of defaulting.

use pf_engine::{EconomicInputs, SimulationInput};
use pf_feedstock::{FeedstockMix, Polymer};
use pf_process::{CatalystCharge, CatalystType, EquipmentSequence, Precracker, RecyclePlan};
use pf_project::schema::{BatchDef, EconomicsDef, FeedstockDef};

use crate::error::{AppError, AppResult};

/// Compile a batch definition into a validated simulation input.
pub fn compile_batch(batch: &BatchDef) -> AppResult<SimulationInput> {
    let feedstock = compile_feedstock(&batch.feedstock, &batch.id)?;

    let catalyst_type: CatalystType =
        batch
            .catalyst
            .catalyst_type
            .parse()
            .map_err(|_| AppError::UnknownSelection {
                field: format!("batch '{}' catalyst_type", batch.id),
                value: batch.catalyst.catalyst_type.clone(),
            })?;
    let catalyst = CatalystCharge::new(
        catalyst_type,
        batch.catalyst.quantity_kg,
        batch.catalyst.efficiency_pct,
    )?;

    let sequence: EquipmentSequence =
        batch
            .layout
            .sequence
            .parse()
            .map_err(|_| AppError::UnknownSelection {
                field: format!("batch '{}' layout sequence", batch.id),
                value: batch.layout.sequence.clone(),
            })?;

    let recycle = match &batch.recycle {
        Some(def) => {
            let precracker = match &def.precracker {
                Some(p) => Some(Precracker::new(p.temperature_c, p.catalyst_boost)?),
                None => None,
            };
            Some(RecyclePlan::new(def.max_recycles, precracker)?)
        }
        None => None,
    };

    let input = SimulationInput {
        feedstock,
        batch_size_kg: batch.batch_size_kg,
        reactor_temp_c: batch.reactor.temperature_c,
        reactor_pressure_atm: batch.reactor.pressure_atm,
        catalyst,
        sequence,
        condenser_stages: batch.layout.condenser_stages,
        vacuum_pumps: batch.layout.vacuum_pumps,
        recycle,
        economics: compile_economics(&batch.economics),
    };

    input.validate()?;
    Ok(input)
}

fn compile_feedstock(feedstock: &FeedstockDef, batch_id: &str) -> AppResult<FeedstockMix> {
    match feedstock {
        FeedstockDef::Pure { polymer } => {
            let polymer: Polymer = polymer.parse().map_err(|_| AppError::UnknownSelection {
                field: format!("batch '{}' feedstock polymer", batch_id),
                value: polymer.clone(),
            })?;
            Ok(FeedstockMix::pure(polymer))
        }
        FeedstockDef::Mixed {
            hdpe_pct,
            ldpe_pct,
            pp_pct,
        } => Ok(FeedstockMix::blended(*hdpe_pct, *ldpe_pct, *pp_pct)?),
    }
}

fn compile_economics(economics: &EconomicsDef) -> EconomicInputs {
    EconomicInputs {
        feed_cost_per_kg: economics.feed_cost_per_kg,
        energy_cost_per_kg: economics.energy_cost_per_kg,
        catalyst_cost_per_kg: economics.catalyst_cost_per_kg,
        catalyst_life_batches: economics.catalyst_life_batches,
        ldo_cost_per_l: economics.ldo_cost_per_l,
        labor_cost_per_hr: economics.labor_cost_per_hr,
        ncg_reuse_bonus_per_kg: economics.ncg_reuse_bonus_per_kg,
        oil_price_per_l: economics.oil_price_per_l,
    }
}
