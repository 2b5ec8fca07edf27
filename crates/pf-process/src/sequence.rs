//! Equipment sequence configurations.

use pf_core::numeric::Real;

/// Named equipment arrangements S1..S6.
///
/// Each arrangement applies a fixed additive correction to oil and wax
/// yield. S1 is the zero baseline; S5 is the only oil-negative arrangement
/// (condenser bypass for testing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSequence {
    S1Basic,
    S2CatOnly,
    S3TarCat,
    S4Optimized,
    S5BypassTest,
    S6HeavyOilRecycle,
}

impl EquipmentSequence {
    pub const ALL: [EquipmentSequence; 6] = [
        EquipmentSequence::S1Basic,
        EquipmentSequence::S2CatOnly,
        EquipmentSequence::S3TarCat,
        EquipmentSequence::S4Optimized,
        EquipmentSequence::S5BypassTest,
        EquipmentSequence::S6HeavyOilRecycle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EquipmentSequence::S1Basic => "S1: Basic",
            EquipmentSequence::S2CatOnly => "S2: Cat Only",
            EquipmentSequence::S3TarCat => "S3: Tar+Cat",
            EquipmentSequence::S4Optimized => "S4: Optimized",
            EquipmentSequence::S5BypassTest => "S5: Bypass Test",
            EquipmentSequence::S6HeavyOilRecycle => "S6: Heavy Oil Recycle",
        }
    }

    /// Additive (oil, wax) yield deltas in percent points.
    pub fn yield_deltas(&self) -> (Real, Real) {
        match self {
            EquipmentSequence::S1Basic => (0.0, 0.0),
            EquipmentSequence::S2CatOnly => (3.0, -2.0),
            EquipmentSequence::S3TarCat => (5.0, -4.0),
            EquipmentSequence::S4Optimized => (7.0, -5.0),
            EquipmentSequence::S5BypassTest => (-2.0, 2.0),
            EquipmentSequence::S6HeavyOilRecycle => (8.0, -5.0),
        }
    }
}

impl std::str::FromStr for EquipmentSequence {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S1: BASIC" | "S1" => Ok(EquipmentSequence::S1Basic),
            "S2: CAT ONLY" | "S2" => Ok(EquipmentSequence::S2CatOnly),
            "S3: TAR+CAT" | "S3" => Ok(EquipmentSequence::S3TarCat),
            "S4: OPTIMIZED" | "S4" => Ok(EquipmentSequence::S4Optimized),
            "S5: BYPASS TEST" | "S5" => Ok(EquipmentSequence::S5BypassTest),
            "S6: HEAVY OIL RECYCLE" | "S6" => Ok(EquipmentSequence::S6HeavyOilRecycle),
            _ => Err("unknown equipment sequence"),
        }
    }
}
