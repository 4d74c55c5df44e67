//! Latent heat of vaporization of water at 1 atm (Drioli & Romano).

use md_core::units::{SpecificEnergy, Temperature, j_per_kg};

/// `ΔH = 1e3 · (1.7535 · T + 2024.3)` J/kg with T in kelvin. No range check.
pub fn latent_heat_h2o(t: Temperature) -> SpecificEnergy {
    j_per_kg(1.0e3 * (1.7535 * t.value + 2024.3))
}
