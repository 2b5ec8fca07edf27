//! Batch execution service.

use pf_core::{in_kg, in_liters};
use pf_engine::{BatchOutcome, simulate, sweep_matrix};
use pf_project::schema::Project;
use pf_results::{
    BatchReport, EconomicsSummary, OilVolumes, StreamMasses, SweepRecord, YieldSummary,
};
use tracing::info;

use crate::compile::compile_batch;
use crate::error::AppResult;
use crate::project_service;

/// Run a single batch by id and return its report.
pub fn run_batch(project: &Project, batch_id: &str) -> AppResult<BatchReport> {
    let batch = project_service::get_batch(project, batch_id)?;
    let input = compile_batch(batch)?;
    let outcome = simulate(&input)?;

    info!(
        batch_id,
        oil_pct = outcome.profile.oil_pct,
        roi_pct = outcome.economics.roi_pct,
        "batch simulation complete"
    );

    Ok(outcome_to_report(&outcome))
}

/// Run the temperature sweep for a batch, anchored on its converged yields.
pub fn run_sweep(project: &Project, batch_id: &str) -> AppResult<Vec<SweepRecord>> {
    let batch = project_service::get_batch(project, batch_id)?;
    let input = compile_batch(batch)?;
    let outcome = simulate(&input)?;

    let points = sweep_matrix(&outcome.profile);
    info!(batch_id, points = points.len(), "sweep complete");

    Ok(points
        .iter()
        .map(|point| SweepRecord {
            temp_c: point.temp_c,
            oil_pct: point.oil_pct,
            wax_pct: point.wax_pct,
        })
        .collect())
}

/// Flatten a typed engine outcome into the serializable report record.
fn outcome_to_report(outcome: &BatchOutcome) -> BatchReport {
    BatchReport {
        yields: YieldSummary {
            oil_pct: outcome.profile.oil_pct,
            wax_pct: outcome.profile.wax_pct,
            char_pct: outcome.profile.char_pct,
            ncg_pct: outcome.profile.ncg_pct,
        },
        streams: StreamMasses {
            oil_kg: in_kg(outcome.streams.oil),
            wax_kg: in_kg(outcome.streams.wax),
            char_kg: in_kg(outcome.streams.char_mass),
            ncg_kg: in_kg(outcome.streams.ncg),
        },
        oil: OilVolumes {
            total_l: in_liters(outcome.distillate.total),
            light_l: in_liters(outcome.distillate.light),
            mid_l: in_liters(outcome.distillate.mid),
            heavy_l: in_liters(outcome.distillate.heavy),
        },
        economics: EconomicsSummary {
            revenue: outcome.economics.revenue,
            total_cost: outcome.economics.total_cost,
            profit: outcome.economics.profit,
            roi_pct: outcome.economics.roi_pct,
        },
    }
}
