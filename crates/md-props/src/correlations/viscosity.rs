//! Dynamic viscosity of aqueous NaCl.

use md_core::units::{DynVisc, Ratio, Temperature, pa_s, to_celsius};

use crate::catalog::{Correlation, VISCOSITY_T, VISCOSITY_W};
use crate::context::EvalContext;

/// Dynamic viscosity of aqueous NaCl, empirical fit of literature data.
///
/// ```text
/// μ = (17.02821 − 0.39206 t + 0.188912 W − 0.00466 t W + 0.003025 t² + 0.011738 W²) · 1e-4
/// ```
///
/// with t in °C and W the NaCl content in weight percent (`100 · w`).
/// The fit is meant for 0–80 °C and `w ∈ [0, 0.25]`; only the composition
/// bound is checked (gated by verbosity). The temperature bound is catalogued
/// with checking disabled.
pub fn viscosity_nacl(ctx: &EvalContext, t: Temperature, w: Ratio) -> DynVisc {
    let t = to_celsius(t);
    let w = w.value;
    ctx.check_range(Correlation::ViscosityNaCl, &VISCOSITY_T, t);
    ctx.check_range(Correlation::ViscosityNaCl, &VISCOSITY_W, w);

    let wt = 100.0 * w;
    let mu = 17.02821 - 0.39206 * t + 0.188912 * wt - 0.00466 * t * wt
        + 0.003025 * t * t
        + 0.011738 * wt * wt;
    pa_s(mu * 1.0e-4)
}
