//! Density of aqueous NaCl.

use md_core::numeric::polyval;
use md_core::units::{Density, Ratio, Temperature, kg_per_m3, to_celsius};

use crate::catalog::{Correlation, DENSITY_T};
use crate::context::EvalContext;

/// Row `i` holds the mass-fraction polynomial multiplying `tⁱ`.
const DENSITY_A: [[f64; 5]; 5] = [
    [1.001, 0.7666, -0.0149, 0.2663, 0.8845],
    [-0.0214, -3.496, 10.02, -6.56, -31.37],
    [-5.263, 39.87, 176.2, 363.5, -7.784],
    [15.42, -167.0, 980.7, -2573.0, 876.6],
    [-0.0276, 0.2978, -2.017, 6.345, -3.914],
];
/// Unit scaling of each temperature power.
const DENSITY_C: [f64; 5] = [1.0e3, 1.0, 1.0e-3, 1.0e-6, 1.0e-6];

/// Density of aqueous NaCl (Sparrow 2003, eq. 7).
///
/// ```text
/// ρ = Σᵢ (Σⱼ Aᵢⱼ wʲ) · Cᵢ · tⁱ      t in °C, w = NaCl mass fraction
/// ```
///
/// Validated for 0–300 °C; violations are advisory and gated by verbosity.
pub fn density_nacl(ctx: &EvalContext, t: Temperature, w: Ratio) -> Density {
    let t_c = to_celsius(t);
    ctx.check_range(Correlation::DensityNaCl, &DENSITY_T, t_c);

    let w = w.value;
    let mut b = [0.0; 5];
    for (bi, (row, ci)) in b.iter_mut().zip(DENSITY_A.iter().zip(DENSITY_C)) {
        *bi = polyval(row, w) * ci;
    }
    kg_per_m3(polyval(&b, t_c))
}
