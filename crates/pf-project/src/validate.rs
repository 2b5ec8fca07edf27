//! Batch project validation logic.

use crate::schema::{
    BatchDef, CatalystDef, EconomicsDef, FeedstockDef, LayoutDef, Project, ReactorDef, RecycleDef,
};
use pf_core::{Tolerances, nearly_equal};
use pf_feedstock::Polymer;
use pf_process::{CatalystType, EquipmentSequence, MAX_RECYCLE_PASSES};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown selection: {field} = '{value}'")]
    UnknownSelection { field: String, value: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut batch_ids = HashSet::new();
    for batch in &project.batches {
        if !batch_ids.insert(&batch.id) {
            return Err(ValidationError::DuplicateId {
                id: batch.id.clone(),
                context: "batches".to_string(),
            });
        }
        validate_batch(batch)?;
    }

    Ok(())
}

fn validate_batch(batch: &BatchDef) -> Result<(), ValidationError> {
    if !batch.batch_size_kg.is_finite() || batch.batch_size_kg <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' batch_size_kg", batch.name),
            value: batch.batch_size_kg.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    validate_feedstock(&batch.feedstock, &batch.name)?;
    validate_reactor(&batch.reactor, &batch.name)?;
    validate_catalyst(&batch.catalyst, &batch.name)?;
    validate_layout(&batch.layout, &batch.name)?;
    if let Some(recycle) = &batch.recycle {
        validate_recycle(recycle, &batch.name)?;
    }
    validate_economics(&batch.economics, &batch.name)?;

    Ok(())
}

fn validate_feedstock(feedstock: &FeedstockDef, batch_name: &str) -> Result<(), ValidationError> {
    match feedstock {
        FeedstockDef::Pure { polymer } => {
            if polymer.parse::<Polymer>().is_err() {
                return Err(ValidationError::UnknownSelection {
                    field: format!("batch '{}' feedstock polymer", batch_name),
                    value: polymer.clone(),
                });
            }
        }
        FeedstockDef::Mixed {
            hdpe_pct,
            ldpe_pct,
            pp_pct,
        } => {
            let shares = [
                ("hdpe_pct", *hdpe_pct),
                ("ldpe_pct", *ldpe_pct),
                ("pp_pct", *pp_pct),
            ];
            for (label, share) in shares {
                if !share.is_finite() || share < 0.0 {
                    return Err(ValidationError::InvalidValue {
                        field: format!("batch '{}' feedstock {}", batch_name, label),
                        value: share.to_string(),
                        reason: "must be non-negative and finite".to_string(),
                    });
                }
            }

            let total = hdpe_pct + ldpe_pct + pp_pct;
            let tol = Tolerances {
                abs: 1e-6,
                rel: 0.0,
            };
            if !nearly_equal(total, 100.0, tol) {
                return Err(ValidationError::InvalidValue {
                    field: format!("batch '{}' feedstock mix", batch_name),
                    value: total.to_string(),
                    reason: "blend percentages must total 100".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_reactor(reactor: &ReactorDef, batch_name: &str) -> Result<(), ValidationError> {
    if !reactor.temperature_c.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' reactor temperature_c", batch_name),
            value: reactor.temperature_c.to_string(),
            reason: "must be finite".to_string(),
        });
    }

    if !reactor.pressure_atm.is_finite() || reactor.pressure_atm <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' reactor pressure_atm", batch_name),
            value: reactor.pressure_atm.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    Ok(())
}

fn validate_catalyst(catalyst: &CatalystDef, batch_name: &str) -> Result<(), ValidationError> {
    if catalyst.catalyst_type.parse::<CatalystType>().is_err() {
        return Err(ValidationError::UnknownSelection {
            field: format!("batch '{}' catalyst_type", batch_name),
            value: catalyst.catalyst_type.clone(),
        });
    }

    if !catalyst.quantity_kg.is_finite() || catalyst.quantity_kg < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' catalyst quantity_kg", batch_name),
            value: catalyst.quantity_kg.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }

    if !catalyst.efficiency_pct.is_finite()
        || catalyst.efficiency_pct < 0.0
        || catalyst.efficiency_pct > 100.0
    {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' catalyst efficiency_pct", batch_name),
            value: catalyst.efficiency_pct.to_string(),
            reason: "must lie in 0..=100".to_string(),
        });
    }

    Ok(())
}

fn validate_layout(layout: &LayoutDef, batch_name: &str) -> Result<(), ValidationError> {
    if layout.sequence.parse::<EquipmentSequence>().is_err() {
        return Err(ValidationError::UnknownSelection {
            field: format!("batch '{}' layout sequence", batch_name),
            value: layout.sequence.clone(),
        });
    }

    if !(1..=3).contains(&layout.condenser_stages) {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' layout condenser_stages", batch_name),
            value: layout.condenser_stages.to_string(),
            reason: "must lie in 1..=3".to_string(),
        });
    }

    if !(2..=3).contains(&layout.vacuum_pumps) {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' layout vacuum_pumps", batch_name),
            value: layout.vacuum_pumps.to_string(),
            reason: "must lie in 2..=3".to_string(),
        });
    }

    Ok(())
}

fn validate_recycle(recycle: &RecycleDef, batch_name: &str) -> Result<(), ValidationError> {
    if recycle.max_recycles < 1 || recycle.max_recycles > MAX_RECYCLE_PASSES {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' recycle max_recycles", batch_name),
            value: recycle.max_recycles.to_string(),
            reason: format!("must lie in 1..={}", MAX_RECYCLE_PASSES),
        });
    }

    if let Some(precracker) = &recycle.precracker {
        if !precracker.temperature_c.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("batch '{}' precracker temperature_c", batch_name),
                value: precracker.temperature_c.to_string(),
                reason: "must be finite".to_string(),
            });
        }

        if !precracker.catalyst_boost.is_finite() || precracker.catalyst_boost < 1.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("batch '{}' precracker catalyst_boost", batch_name),
                value: precracker.catalyst_boost.to_string(),
                reason: "must be at least 1.0 and finite".to_string(),
            });
        }
    }

    Ok(())
}

fn validate_economics(economics: &EconomicsDef, batch_name: &str) -> Result<(), ValidationError> {
    let rates = [
        ("feed_cost_per_kg", economics.feed_cost_per_kg),
        ("energy_cost_per_kg", economics.energy_cost_per_kg),
        ("catalyst_cost_per_kg", economics.catalyst_cost_per_kg),
        ("ldo_cost_per_l", economics.ldo_cost_per_l),
        ("labor_cost_per_hr", economics.labor_cost_per_hr),
        ("ncg_reuse_bonus_per_kg", economics.ncg_reuse_bonus_per_kg),
        ("oil_price_per_l", economics.oil_price_per_l),
    ];
    for (label, rate) in rates {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("batch '{}' economics {}", batch_name, label),
                value: rate.to_string(),
                reason: "must be non-negative and finite".to_string(),
            });
        }
    }

    if !economics.catalyst_life_batches.is_finite() || economics.catalyst_life_batches <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("batch '{}' economics catalyst_life_batches", batch_name),
            value: economics.catalyst_life_batches.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    Ok(())
}
