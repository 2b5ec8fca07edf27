//! Yield-profile normalization.

use pf_feedstock::YieldProfile;

use crate::error::{EngineError, EngineResult};

/// Rescales the profile so the four streams total exactly 100.
///
/// Oil, wax and char are scaled by `100 / total`; ncg is derived as the
/// remainder so closure is exact instead of accumulating a fourth rounding
/// term. A non-positive or non-finite total has no meaningful scale and is
/// reported as degenerate.
pub fn normalize(profile: &YieldProfile) -> EngineResult<YieldProfile> {
    let total = profile.total();
    if !total.is_finite() || total <= 0.0 {
        return Err(EngineError::DegenerateYield { total });
    }

    let scale = 100.0 / total;
    let oil_pct = profile.oil_pct * scale;
    let wax_pct = profile.wax_pct * scale;
    let char_pct = profile.char_pct * scale;
    let ncg_pct = 100.0 - oil_pct - wax_pct - char_pct;

    Ok(YieldProfile::new(oil_pct, wax_pct, char_pct, ncg_pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn closed_profile_is_unchanged() {
        let profile = YieldProfile::new(75.0, 5.0, 10.0, 10.0);
        let normalized = normalize(&profile).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(normalized.oil_pct, 75.0, tol));
        assert!(nearly_equal(normalized.wax_pct, 5.0, tol));
        assert!(nearly_equal(normalized.char_pct, 10.0, tol));
        assert!(nearly_equal(normalized.ncg_pct, 10.0, tol));
    }

    #[test]
    fn open_profile_is_rescaled() {
        // 81 + 5 + 10 + 10 = 106, as after a +6 temperature delta.
        let profile = YieldProfile::new(81.0, 5.0, 10.0, 10.0);
        let normalized = normalize(&profile).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(normalized.oil_pct, 8_100.0 / 106.0, tol));
        assert!(nearly_equal(normalized.wax_pct, 500.0 / 106.0, tol));
        assert!(nearly_equal(normalized.char_pct, 1_000.0 / 106.0, tol));
    }

    #[test]
    fn closure_holds_after_normalization() {
        let profile = YieldProfile::new(83.7, 1.3, 9.4, 11.2);
        let normalized = normalize(&profile).unwrap();
        assert!(normalized.is_closed(Tolerances::default()));
    }

    #[test]
    fn zero_total_is_degenerate() {
        let profile = YieldProfile::new(0.0, 0.0, 0.0, 0.0);
        let err = normalize(&profile).unwrap_err();
        assert!(matches!(err, EngineError::DegenerateYield { total } if total == 0.0));
    }

    #[test]
    fn negative_total_is_degenerate() {
        let profile = YieldProfile::new(-60.0, 5.0, 10.0, 10.0);
        assert!(matches!(
            normalize(&profile),
            Err(EngineError::DegenerateYield { .. })
        ));
    }

    #[test]
    fn non_finite_total_is_degenerate() {
        let profile = YieldProfile::new(f64::NAN, 5.0, 10.0, 10.0);
        assert!(matches!(
            normalize(&profile),
            Err(EngineError::DegenerateYield { .. })
        ));
    }
}
