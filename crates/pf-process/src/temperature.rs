//! Reactor temperature response.

use pf_core::numeric::{Real, piecewise_linear};

/// Additive oil-yield delta vs reactor temperature, in percent points.
///
/// Empirical anchors: no correction at 400 °C, peak +6 at 470 °C, then
/// over-cracking pulls the correction down to −2 by 500 °C. Outside the
/// anchor span the endpoint value holds.
pub const OIL_TEMP_RESPONSE: [(Real, Real); 3] = [(400.0, 0.0), (470.0, 6.0), (500.0, -2.0)];

/// Oil-yield delta for a reactor temperature in °C.
pub fn oil_delta_for_temp(reactor_temp_c: Real) -> Real {
    piecewise_linear(reactor_temp_c, &OIL_TEMP_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_exact() {
        assert_eq!(oil_delta_for_temp(400.0), 0.0);
        assert_eq!(oil_delta_for_temp(470.0), 6.0);
        assert_eq!(oil_delta_for_temp(500.0), -2.0);
    }

    #[test]
    fn interpolates_between_anchors() {
        assert!((oil_delta_for_temp(435.0) - 3.0).abs() < 1e-12);
        assert!((oil_delta_for_temp(485.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_anchor_span() {
        assert_eq!(oil_delta_for_temp(350.0), 0.0);
        assert_eq!(oil_delta_for_temp(550.0), -2.0);
    }
}
