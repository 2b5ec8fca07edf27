//! Batch economics.

use pf_core::numeric::Real;

/// Unit prices and costs for one batch run, in ₹.
///
/// `ldo_cost_per_l` and `labor_cost_per_hr` are accepted alongside the
/// others but do not enter the profit formula; they are carried so a
/// configuration can state them without being rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicInputs {
    pub feed_cost_per_kg: Real,
    pub energy_cost_per_kg: Real,
    pub catalyst_cost_per_kg: Real,
    pub catalyst_life_batches: Real,
    pub ldo_cost_per_l: Real,
    pub labor_cost_per_hr: Real,
    pub ncg_reuse_bonus_per_kg: Real,
    pub oil_price_per_l: Real,
}

impl Default for EconomicInputs {
    fn default() -> Self {
        Self {
            feed_cost_per_kg: 10.0,
            energy_cost_per_kg: 1.5,
            catalyst_cost_per_kg: 45.0,
            catalyst_life_batches: 20.0,
            ldo_cost_per_l: 52.0,
            labor_cost_per_hr: 70.0,
            ncg_reuse_bonus_per_kg: 15.0,
            oil_price_per_l: 60.0,
        }
    }
}

/// Revenue, cost and return for one batch, in ₹.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicsOutcome {
    pub revenue: Real,
    pub total_cost: Real,
    pub profit: Real,
    pub roi_pct: Real,
}

impl EconomicInputs {
    /// Evaluates batch economics.
    ///
    /// Revenue is oil volume at the oil price plus the NCG reuse credit.
    /// Cost is feed plus energy (both per kg of batch) plus the catalyst
    /// charge amortized over its life. ROI is exactly 0 when the total cost
    /// is not positive, never a division by zero.
    pub fn evaluate(
        &self,
        batch_size_kg: Real,
        catalyst_qty_kg: Real,
        oil_volume_l: Real,
        ncg_kg: Real,
    ) -> EconomicsOutcome {
        let revenue =
            oil_volume_l * self.oil_price_per_l + ncg_kg * self.ncg_reuse_bonus_per_kg;
        let total_cost = batch_size_kg * self.feed_cost_per_kg
            + batch_size_kg * self.energy_cost_per_kg
            + catalyst_qty_kg * self.catalyst_cost_per_kg / self.catalyst_life_batches;
        let profit = revenue - total_cost;
        let roi_pct = if total_cost > 0.0 {
            profit / total_cost * 100.0
        } else {
            0.0
        };

        EconomicsOutcome {
            revenue,
            total_cost,
            profit,
            roi_pct,
        }
    }
}
