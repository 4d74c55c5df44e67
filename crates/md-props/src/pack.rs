//! Batched evaluation of every brine property at one state.

use md_core::units::{
    Density, DynVisc, Pressure, Ratio, SpecificEnergy, Temperature, ThermalConductivity, unitless,
};

use crate::context::EvalContext;
use crate::correlations::{
    density_nacl, latent_heat_h2o, solubility_nacl, thermal_conductivity_nacl, vapor_pressure_brine,
    viscosity_nacl,
};
use crate::error::PropsResult;

/// Brine properties at a single (T, w) state.
///
/// Useful for cell updates that need several properties of the same feed or
/// permeate state; each correlation reports its own advisories.
#[derive(Clone, Debug, PartialEq)]
pub struct BrinePropertyPack {
    /// Temperature [K]
    pub t: Temperature,
    /// NaCl mass fraction
    pub w_nacl: Ratio,
    /// Density [kg/m³]
    pub rho: Density,
    /// Dynamic viscosity [Pa·s]
    pub mu: DynVisc,
    /// Thermal conductivity [W/(m·K)]
    pub lambda: ThermalConductivity,
    /// Water vapor pressure over the solution [Pa]
    pub p_vap: Pressure,
    /// Saturated NaCl mass fraction at `t`
    pub w_sat: Ratio,
    /// Latent heat of vaporization of water [J/kg]
    pub h_vap: SpecificEnergy,
}

impl BrinePropertyPack {
    pub fn evaluate(ctx: &EvalContext, t: Temperature, w_nacl: Ratio) -> PropsResult<Self> {
        Ok(Self {
            t,
            w_nacl,
            rho: density_nacl(ctx, t, w_nacl),
            mu: viscosity_nacl(ctx, t, w_nacl),
            lambda: thermal_conductivity_nacl(ctx, t, w_nacl)?,
            p_vap: vapor_pressure_brine(ctx, t, unitless(1.0 - w_nacl.value))?,
            w_sat: solubility_nacl(ctx, t),
            h_vap: latent_heat_h2o(t),
        })
    }

    /// Salt content above the solubility limit.
    pub fn is_supersaturated(&self) -> bool {
        self.w_nacl > self.w_sat
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Brine(T={:.2}K,w={:.4},ρ={:.2}kg/m³,μ={:.3e}Pa·s,λ={:.4}W/m·K,pv={:.1}Pa,w_sat={:.4},hv={:.0}J/kg)",
            self.t.value,
            self.w_nacl.value,
            self.rho.value,
            self.mu.value,
            self.lambda.value,
            self.p_vap.value,
            self.w_sat.value,
            self.h_vap.value
        )
    }
}
