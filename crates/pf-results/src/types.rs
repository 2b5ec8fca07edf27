//! Report data types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub yields: YieldSummary,
    pub streams: StreamMasses,
    pub oil: OilVolumes,
    pub economics: EconomicsSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldSummary {
    pub oil_pct: f64,
    pub wax_pct: f64,
    pub char_pct: f64,
    pub ncg_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamMasses {
    pub oil_kg: f64,
    pub wax_kg: f64,
    pub char_kg: f64,
    pub ncg_kg: f64,
}

/// Condensed-oil volume and its distillation cuts.
///
/// Cuts are C5–C10 (light), C11–C17 (mid) and C18–C24 (heavy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OilVolumes {
    pub total_l: f64,
    pub light_l: f64,
    pub mid_l: f64,
    pub heavy_l: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicsSummary {
    pub revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub roi_pct: f64,
}

/// One point of the temperature sensitivity matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRecord {
    pub temp_c: f64,
    pub oil_pct: f64,
    pub wax_pct: f64,
}
