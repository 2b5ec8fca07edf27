//! Catalyst system model.

use crate::error::{ProcessError, ProcessResult};
use pf_core::numeric::Real;

/// Cracking catalysts used in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalystType {
    /// Zeolite ZSM-5
    Zsm5,
    /// Activated alumina
    Alumina,
    /// Natural clay
    Clay,
    /// Bentonite clay
    Bentonite,
    /// Spent FCC catalyst
    FccCatalyst,
    /// Purely thermal run, no catalyst
    None,
}

impl CatalystType {
    pub const ALL: [CatalystType; 6] = [
        CatalystType::Zsm5,
        CatalystType::Alumina,
        CatalystType::Clay,
        CatalystType::Bentonite,
        CatalystType::FccCatalyst,
        CatalystType::None,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CatalystType::Zsm5 => "ZSM-5",
            CatalystType::Alumina => "Alumina",
            CatalystType::Clay => "Clay",
            CatalystType::Bentonite => "Bentonite",
            CatalystType::FccCatalyst => "FCC Catalyst",
            CatalystType::None => "None",
        }
    }

    /// Relative cracking activity; scales the oil bonus linearly.
    ///
    /// "None" maps to zero so the bonus vanishes regardless of loading.
    pub fn activity_multiplier(&self) -> Real {
        match self {
            CatalystType::Zsm5 => 1.2,
            CatalystType::Alumina => 1.0,
            CatalystType::Clay => 0.9,
            CatalystType::Bentonite => 0.85,
            CatalystType::FccCatalyst => 1.1,
            CatalystType::None => 0.0,
        }
    }
}

impl std::str::FromStr for CatalystType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ZSM-5" | "ZSM5" => Ok(CatalystType::Zsm5),
            "ALUMINA" => Ok(CatalystType::Alumina),
            "CLAY" => Ok(CatalystType::Clay),
            "BENTONITE" => Ok(CatalystType::Bentonite),
            "FCC CATALYST" | "FCC" => Ok(CatalystType::FccCatalyst),
            "NONE" => Ok(CatalystType::None),
            _ => Err("unknown catalyst type"),
        }
    }
}

/// Catalyst loading for one batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalystCharge {
    pub catalyst: CatalystType,
    pub quantity_kg: Real,
    pub efficiency_pct: Real,
}

impl CatalystCharge {
    /// Create a catalyst charge.
    ///
    /// # Errors
    /// Returns an error if quantity or efficiency is negative or non-finite.
    pub fn new(
        catalyst: CatalystType,
        quantity_kg: Real,
        efficiency_pct: Real,
    ) -> ProcessResult<Self> {
        if !quantity_kg.is_finite() || quantity_kg < 0.0 {
            return Err(ProcessError::InvalidArg {
                what: "catalyst quantity must be non-negative and finite",
            });
        }
        if !efficiency_pct.is_finite() || efficiency_pct < 0.0 {
            return Err(ProcessError::InvalidArg {
                what: "catalyst efficiency must be non-negative and finite",
            });
        }

        Ok(Self {
            catalyst,
            quantity_kg,
            efficiency_pct,
        })
    }

    /// A purely thermal run: no catalyst, zero loading.
    pub fn none() -> Self {
        Self {
            catalyst: CatalystType::None,
            quantity_kg: 0.0,
            efficiency_pct: 0.0,
        }
    }

    /// Additive oil-yield bonus in percent points.
    ///
    /// Deliberately a linear proxy, not a kinetic model: efficiency and
    /// quantity scale independently and the type multiplier sets the slope.
    pub fn oil_bonus(&self) -> Real {
        self.efficiency_pct / 100.0
            * (self.quantity_kg / 1000.0)
            * self.catalyst.activity_multiplier()
            * 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_table() {
        assert_eq!(CatalystType::Zsm5.activity_multiplier(), 1.2);
        assert_eq!(CatalystType::Alumina.activity_multiplier(), 1.0);
        assert_eq!(CatalystType::Clay.activity_multiplier(), 0.9);
        assert_eq!(CatalystType::Bentonite.activity_multiplier(), 0.85);
        assert_eq!(CatalystType::FccCatalyst.activity_multiplier(), 1.1);
        assert_eq!(CatalystType::None.activity_multiplier(), 0.0);
    }

    #[test]
    fn canonical_key_roundtrip() {
        for catalyst in CatalystType::ALL {
            let parsed = catalyst
                .key()
                .parse::<CatalystType>()
                .expect("canonical key should parse");
            assert_eq!(parsed, catalyst);
        }
    }

    #[test]
    fn parse_rejects_unknown_catalyst() {
        assert!("Platinum".parse::<CatalystType>().is_err());
    }

    #[test]
    fn oil_bonus_reference_case() {
        // 90% efficient, 500 kg ZSM-5: 0.9 * 0.5 * 1.2 * 10
        let charge = CatalystCharge::new(CatalystType::Zsm5, 500.0, 90.0).unwrap();
        assert!((charge.oil_bonus() - 5.4).abs() < 1e-12);
    }

    #[test]
    fn oil_bonus_scales_linearly_with_quantity() {
        let half = CatalystCharge::new(CatalystType::Alumina, 250.0, 80.0).unwrap();
        let full = CatalystCharge::new(CatalystType::Alumina, 500.0, 80.0).unwrap();
        assert!((full.oil_bonus() - 2.0 * half.oil_bonus()).abs() < 1e-12);
    }

    #[test]
    fn none_catalyst_gives_zero_bonus() {
        let charge = CatalystCharge::new(CatalystType::None, 800.0, 95.0).unwrap();
        assert_eq!(charge.oil_bonus(), 0.0);
        assert_eq!(CatalystCharge::none().oil_bonus(), 0.0);
    }

    #[test]
    fn invalid_negative_quantity() {
        assert!(CatalystCharge::new(CatalystType::Clay, -1.0, 90.0).is_err());
    }

    #[test]
    fn invalid_non_finite_efficiency() {
        assert!(CatalystCharge::new(CatalystType::Clay, 100.0, f64::NAN).is_err());
    }
}
