// pf-core/src/units.rs

use uom::si::f64::{Mass as UomMass, MassDensity as UomMassDensity, Volume as UomVolume};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Mass = UomMass;
pub type Volume = UomVolume;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn liters(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

/// Mass density given in kg/L, the unit the process constants are quoted in.
#[inline]
pub fn kg_per_liter(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v * 1.0e3)
}

#[inline]
pub fn in_liters(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}

#[inline]
pub fn in_kg(v: Mass) -> f64 {
    use uom::si::mass::kilogram;
    v.get::<kilogram>()
}
