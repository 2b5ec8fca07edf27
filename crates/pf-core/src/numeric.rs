use crate::PfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Piecewise-linear interpolation over `(x, y)` anchors sorted by x.
///
/// Inputs left of the first anchor return the first y; inputs right of the
/// last anchor return the last y. An empty anchor slice returns 0.0.
pub fn piecewise_linear(x: Real, anchors: &[(Real, Real)]) -> Real {
    let Some(&(x_first, y_first)) = anchors.first() else {
        return 0.0;
    };
    if x <= x_first {
        return y_first;
    }
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
        }
    }
    anchors[anchors.len() - 1].1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn piecewise_linear_interior_points() {
        let anchors = [(400.0, 0.0), (470.0, 6.0), (500.0, -2.0)];
        assert_eq!(piecewise_linear(400.0, &anchors), 0.0);
        assert_eq!(piecewise_linear(470.0, &anchors), 6.0);
        assert_eq!(piecewise_linear(500.0, &anchors), -2.0);
        assert!((piecewise_linear(435.0, &anchors) - 3.0).abs() < 1e-12);
        assert!((piecewise_linear(485.0, &anchors) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn piecewise_linear_clamps_at_endpoints() {
        let anchors = [(400.0, 0.0), (470.0, 6.0), (500.0, -2.0)];
        assert_eq!(piecewise_linear(350.0, &anchors), 0.0);
        assert_eq!(piecewise_linear(550.0, &anchors), -2.0);
    }

    #[test]
    fn piecewise_linear_degenerate_tables() {
        assert_eq!(piecewise_linear(1.0, &[]), 0.0);
        assert_eq!(piecewise_linear(1.0, &[(5.0, 7.0)]), 7.0);
        assert_eq!(piecewise_linear(9.0, &[(5.0, 7.0)]), 7.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn piecewise_linear_stays_within_anchor_range(x in 300.0_f64..600.0_f64) {
            let anchors = [(400.0, 0.0), (470.0, 6.0), (500.0, -2.0)];
            let y = piecewise_linear(x, &anchors);
            prop_assert!(y >= -2.0);
            prop_assert!(y <= 6.0);
        }
    }
}
