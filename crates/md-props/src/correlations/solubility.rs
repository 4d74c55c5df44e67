//! Solubility of NaCl in water.

use md_core::numeric::polyval;
use md_core::units::{Ratio, Temperature, to_celsius, unitless};

use crate::catalog::{Correlation, SOLUBILITY_T};
use crate::context::EvalContext;

const SOLUBILITY_COEFFS: [f64; 3] = [0.2628, 62.75e-6, 1.084e-6];

/// Saturated NaCl mass fraction (Sparrow 2003, eq. 5).
///
/// Valid for 0–450 °C. Out-of-range temperatures are reported regardless of
/// the context's verbosity; the polynomial is still evaluated.
pub fn solubility_nacl(ctx: &EvalContext, t: Temperature) -> Ratio {
    let t_c = to_celsius(t);
    ctx.check_range(Correlation::SolubilityNaCl, &SOLUBILITY_T, t_c);
    unitless(polyval(&SOLUBILITY_COEFFS, t_c))
}
