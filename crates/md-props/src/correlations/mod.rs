//! Closed-form property correlations.
//!
//! Base correlations depend only on their inputs; composite correlations
//! (`activity` → `vapor_pressure`, molality → `conductivity::thermal_conductivity_nacl`)
//! call converters and base correlations in a fixed order.

pub mod activity;
pub mod conductivity;
pub mod density;
pub mod latent_heat;
pub mod saturation;
pub mod solubility;
pub mod vapor_pressure;
pub mod viscosity;

pub use activity::activity_coefficient_h2o;
pub use conductivity::{
    phase_conductivity, phase_conductivity_code, thermal_conductivity_gas,
    thermal_conductivity_maxwell, thermal_conductivity_maxwell_code, thermal_conductivity_nacl,
    thermal_conductivity_solid,
};
pub use density::density_nacl;
pub use latent_heat::latent_heat_h2o;
pub use saturation::psat_h2o;
pub use solubility::solubility_nacl;
pub use vapor_pressure::{BrineVaporPressure, VaporPressureBreakdown, vapor_pressure_brine};
pub use viscosity::viscosity_nacl;
