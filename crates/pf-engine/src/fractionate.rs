//! Product stream masses and oil fractionation.

use pf_core::numeric::Real;
use pf_core::units::{Mass, Volume, kg, kg_per_liter};
use pf_feedstock::YieldProfile;

/// Condensed pyrolysis-oil density, kg/L.
pub const OIL_DENSITY_KG_PER_L: Real = 0.806;

/// Mass fractions of the light / mid / heavy distillation cuts.
pub const CUT_MASS_FRACTIONS: [Real; 3] = [0.25, 0.50, 0.25];

/// Cut densities in kg/L: C5–C10, C11–C17, C18–C24.
pub const CUT_DENSITIES_KG_PER_L: [Real; 3] = [0.715, 0.82, 0.885];

/// Batch mass split across the four product streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductStreams {
    pub oil: Mass,
    pub wax: Mass,
    // "char" is reserved
    pub char_mass: Mass,
    pub ncg: Mass,
}

/// Oil volume and its three cut volumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistillateVolumes {
    pub total: Volume,
    pub light: Volume,
    pub mid: Volume,
    pub heavy: Volume,
}

/// Splits the batch mass by the normalized yield percentages.
pub fn stream_masses(batch_size_kg: Real, profile: &YieldProfile) -> ProductStreams {
    ProductStreams {
        oil: kg(batch_size_kg * profile.oil_pct / 100.0),
        wax: kg(batch_size_kg * profile.wax_pct / 100.0),
        char_mass: kg(batch_size_kg * profile.char_pct / 100.0),
        ncg: kg(batch_size_kg * profile.ncg_pct / 100.0),
    }
}

/// Converts the oil stream to volume and splits it into fixed cuts.
///
/// Each cut mass is a fixed fraction of the oil mass, converted to volume
/// at that cut's own density. The cut volumes therefore do not sum to the
/// total, which is converted at the whole-oil density.
pub fn fractionate_oil(oil: Mass) -> DistillateVolumes {
    DistillateVolumes {
        total: oil / kg_per_liter(OIL_DENSITY_KG_PER_L),
        light: oil * CUT_MASS_FRACTIONS[0] / kg_per_liter(CUT_DENSITIES_KG_PER_L[0]),
        mid: oil * CUT_MASS_FRACTIONS[1] / kg_per_liter(CUT_DENSITIES_KG_PER_L[1]),
        heavy: oil * CUT_MASS_FRACTIONS[2] / kg_per_liter(CUT_DENSITIES_KG_PER_L[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{in_kg, in_liters};

    #[test]
    fn masses_follow_percentages() {
        let profile = YieldProfile::new(75.0, 5.0, 10.0, 10.0);
        let streams = stream_masses(10_000.0, &profile);
        assert_eq!(in_kg(streams.oil), 7_500.0);
        assert_eq!(in_kg(streams.wax), 500.0);
        assert_eq!(in_kg(streams.char_mass), 1_000.0);
        assert_eq!(in_kg(streams.ncg), 1_000.0);
    }

    #[test]
    fn oil_volume_at_reference_density() {
        let volumes = fractionate_oil(kg(7_500.0));
        assert!((in_liters(volumes.total) - 7_500.0 / 0.806).abs() < 1e-6);
    }

    #[test]
    fn cut_volumes_use_cut_densities() {
        let volumes = fractionate_oil(kg(7_500.0));
        assert!((in_liters(volumes.light) - 1_875.0 / 0.715).abs() < 1e-6);
        assert!((in_liters(volumes.mid) - 3_750.0 / 0.82).abs() < 1e-6);
        assert!((in_liters(volumes.heavy) - 1_875.0 / 0.885).abs() < 1e-6);
    }

    #[test]
    fn cut_volumes_do_not_sum_to_total() {
        // Cut densities straddle the whole-oil density, so the sum of cut
        // volumes differs from the total volume.
        let volumes = fractionate_oil(kg(7_500.0));
        let cut_sum = in_liters(volumes.light) + in_liters(volumes.mid) + in_liters(volumes.heavy);
        assert!((cut_sum - in_liters(volumes.total)).abs() > 1.0);
    }

    #[test]
    fn cut_fractions_cover_the_oil() {
        let total: Real = CUT_MASS_FRACTIONS.iter().sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn zero_oil_gives_zero_volumes() {
        let volumes = fractionate_oil(kg(0.0));
        assert_eq!(in_liters(volumes.total), 0.0);
        assert_eq!(in_liters(volumes.light), 0.0);
    }
}
