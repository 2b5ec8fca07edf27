//! Feed polymer definitions.

use crate::profile::YieldProfile;

/// Plastic polymers with characterized pyrolysis behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polymer {
    /// High-density polyethylene
    Hdpe,
    /// Low-density polyethylene
    Ldpe,
    /// Polypropylene
    Pp,
}

impl Polymer {
    pub const ALL: [Polymer; 3] = [Polymer::Hdpe, Polymer::Ldpe, Polymer::Pp];

    pub fn key(&self) -> &'static str {
        match self {
            Polymer::Hdpe => "HDPE",
            Polymer::Ldpe => "LDPE",
            Polymer::Pp => "PP",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Polymer::Hdpe => "High-Density Polyethylene",
            Polymer::Ldpe => "Low-Density Polyethylene",
            Polymer::Pp => "Polypropylene",
        }
    }

    /// Base yield profile at reference reactor conditions, percent of feed
    /// mass. Empirical values; each row closes to exactly 100.
    pub fn base_profile(&self) -> YieldProfile {
        match self {
            Polymer::Hdpe => YieldProfile::new(75.0, 5.0, 10.0, 10.0),
            Polymer::Ldpe => YieldProfile::new(78.0, 4.0, 8.0, 10.0),
            Polymer::Pp => YieldProfile::new(70.0, 6.0, 10.0, 14.0),
        }
    }
}

impl std::str::FromStr for Polymer {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "HDPE" => Ok(Polymer::Hdpe),
            "LDPE" => Ok(Polymer::Ldpe),
            "PP" | "POLYPROPYLENE" => Ok(Polymer::Pp),
            _ => Err("unknown polymer"),
        }
    }
}
