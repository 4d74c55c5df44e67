//! Thermal conductivity of porous membranes and of aqueous NaCl.

use md_core::numeric::polyval;
use md_core::units::{Ratio, Temperature, ThermalConductivity, to_celsius, w_per_m_k};

use crate::catalog::{CONDUCTIVITY_NACL_M, CONDUCTIVITY_NACL_T, Correlation};
use crate::context::EvalContext;
use crate::convert::mass_fraction_to_molality;
use crate::error::PropsResult;
use crate::material::{Membrane, Phase};

/// Conductivity of the air/vapor mixture trapped in the pores (Bahmanyar).
pub fn thermal_conductivity_gas(t: Temperature) -> ThermalConductivity {
    w_per_m_k(2.72e-3 + 7.77e-5 * t.value)
}

/// `(A, B)` of `k_s = A·1e-4·T + B·1e-2`.
fn solid_coefficients(membrane: Membrane) -> (f64, f64) {
    match membrane {
        Membrane::Pvdf => (5.769, 0.9144),
        Membrane::Ptfe => (5.769, 8.914),
        Membrane::Pp => (12.5, -23.51),
        Membrane::Pes => (4.167, 1.452),
    }
}

/// Conductivity of the polymer matrix.
pub fn thermal_conductivity_solid(t: Temperature, membrane: Membrane) -> ThermalConductivity {
    let (a, b) = solid_coefficients(membrane);
    w_per_m_k(a * 1.0e-4 * t.value + b * 1.0e-2)
}

/// Conductivity of one phase of the membrane.
pub fn phase_conductivity(t: Temperature, phase: Phase, membrane: Membrane) -> ThermalConductivity {
    match phase {
        Phase::Gas => thermal_conductivity_gas(t),
        Phase::Solid => thermal_conductivity_solid(t, membrane),
    }
}

/// [`phase_conductivity`] for raw driver phase and material codes.
pub fn phase_conductivity_code(
    ctx: &EvalContext,
    t: Temperature,
    phase: i32,
    membrane: i32,
) -> PropsResult<ThermalConductivity> {
    let selected =
        Phase::from_code(phase).and_then(|p| Membrane::from_code(membrane).map(|m| (p, m)));
    match selected {
        Ok((p, m)) => Ok(phase_conductivity(t, p, m)),
        Err(err) => ctx
            .reject_invalid(Correlation::ThermalConductivityMaxwell, "selector", err)
            .map(w_per_m_k),
    }
}

/// Effective membrane conductivity by the Maxwell mixing rule
/// (Garcia-Payo & Izquierdo-Gil, 2004).
///
/// ```text
/// β = (k_s − k_g) / (k_s + 2 k_g)
/// k = k_g · (1 + 2β(1 − ε)) / (1 − β(1 − ε))
/// ```
///
/// At `ε = 1` the result is exactly the gas-phase conductivity.
pub fn thermal_conductivity_maxwell(
    t: Temperature,
    porosity: Ratio,
    membrane: Membrane,
) -> ThermalConductivity {
    let k_gas = thermal_conductivity_gas(t).value;
    let k_solid = thermal_conductivity_solid(t, membrane).value;
    let beta = (k_solid - k_gas) / (k_solid + 2.0 * k_gas);
    let solid_fraction = 1.0 - porosity.value;
    w_per_m_k(k_gas * (1.0 + 2.0 * beta * solid_fraction) / (1.0 - beta * solid_fraction))
}

/// [`thermal_conductivity_maxwell`] for a raw driver material code.
///
/// An unmapped code never falls back to another material: it goes through the
/// context's invalid-input policy (error, or NaN when reporting only).
pub fn thermal_conductivity_maxwell_code(
    ctx: &EvalContext,
    t: Temperature,
    porosity: Ratio,
    code: i32,
) -> PropsResult<ThermalConductivity> {
    match Membrane::from_code(code) {
        Ok(membrane) => Ok(thermal_conductivity_maxwell(t, porosity, membrane)),
        Err(err) => ctx
            .reject_invalid(Correlation::ThermalConductivityMaxwell, "membrane", err)
            .map(w_per_m_k),
    }
}

/// Row `i` holds the temperature polynomial multiplying `mⁱ`.
const RAMIRES_A: [[f64; 3]; 3] = [
    [0.5621, 0.00199, -8.6e-6],
    [-0.01394, 0.000294, -2.3e-6],
    [0.00177, -6.3e-5, 4.5e-7],
];

/// Thermal conductivity of aqueous NaCl (Ramires et al. 1994, eq. 7).
///
/// The NaCl mass fraction is converted to molality `m`, then
///
/// ```text
/// λ = Σᵢ (Σⱼ aᵢⱼ tʲ) mⁱ      t in °C
/// ```
///
/// Validated for 295–365 K and `0 ≤ m ≤ 6 mol/kg` (advisory, gated by
/// verbosity). A negative `w` extrapolates and trips the molality advisory.
/// Only `w ≥ 1` or a non-finite `w` is rejected. It is reported as invalid
/// input and then follows the context's policy (error, or NaN when reporting).
pub fn thermal_conductivity_nacl(
    ctx: &EvalContext,
    t: Temperature,
    w: Ratio,
) -> PropsResult<ThermalConductivity> {
    let m = match mass_fraction_to_molality(w) {
        Ok(m) => m.mol_per_kg(),
        Err(err) => {
            return ctx
                .reject_invalid(Correlation::ThermalConductivityNaCl, "mass fraction", err)
                .map(w_per_m_k);
        }
    };
    ctx.check_range(Correlation::ThermalConductivityNaCl, &CONDUCTIVITY_NACL_T, t.value);
    ctx.check_range(Correlation::ThermalConductivityNaCl, &CONDUCTIVITY_NACL_M, m);

    let t_c = to_celsius(t);
    let terms = RAMIRES_A.map(|row| polyval(&row, t_c));
    Ok(w_per_m_k(polyval(&terms, m)))
}
