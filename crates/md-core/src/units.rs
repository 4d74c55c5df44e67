// md-core/src/units.rs

use std::fmt;

use uom::si::f64::{
    AvailableEnergy as UomAvailableEnergy, DynamicViscosity as UomDynamicViscosity,
    MassDensity as UomMassDensity, MolarMass as UomMolarMass, Pressure as UomPressure,
    Ratio as UomRatio, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Density = UomMassDensity;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
/// Energy per unit mass [J/kg], e.g. latent heat.
pub type SpecificEnergy = UomAvailableEnergy;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalConductivity = UomThermalConductivity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Temperature expressed in degrees Celsius.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn j_per_kg(v: f64) -> SpecificEnergy {
    use uom::si::available_energy::joule_per_kilogram;
    SpecificEnergy::new::<joule_per_kilogram>(v)
}

#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

/// Molar mass expressed in g/mol (numerically equal to kg/kmol).
#[inline]
pub fn to_g_per_mol(mw: MolarMass) -> f64 {
    use uom::si::molar_mass::gram_per_mole;
    mw.get::<gram_per_mole>()
}

/// Moles of solute per kilogram of solvent [mol/kg].
///
/// Not part of the canonical uom set used here, so it is a thin newtype.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Molality(f64);

impl Molality {
    #[inline]
    pub const fn new(mol_per_kg: f64) -> Self {
        Self(mol_per_kg)
    }

    #[inline]
    pub const fn mol_per_kg(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Molality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mol/kg", self.0)
    }
}

#[inline]
pub fn mol_per_kg(v: f64) -> Molality {
    Molality::new(v)
}

pub mod constants {
    /// Zero of the Celsius scale [K].
    pub const T0_K: f64 = 273.15;
    /// Molar mass of water [g/mol].
    pub const MW_H2O: f64 = 18.01534;
    /// Molar mass of sodium chloride [g/mol].
    pub const MW_NACL: f64 = 58.4428;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _r = unitless(0.5);
        let _rho = kg_per_m3(997.0);
        let _mu = pa_s(1e-3);
        let _lambda = w_per_m_k(0.6);
        let _hv = j_per_kg(2.26e6);
        let _mw = g_per_mol(constants::MW_NACL);
        let _m = mol_per_kg(1.0);
    }

    #[test]
    fn celsius_offset() {
        let t = degc(25.0);
        assert!((t.value - 298.15).abs() < 1e-9);
        assert!((to_celsius(k(373.15)) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn molar_mass_units() {
        let mw = g_per_mol(18.01534);
        // SI base is kg/mol
        assert!((mw.value - 0.01801534).abs() < 1e-12);
        assert!((to_g_per_mol(mw) - 18.01534).abs() < 1e-9);
    }

    #[test]
    fn molality_display() {
        assert_eq!(mol_per_kg(2.5).to_string(), "2.5 mol/kg");
    }
}
