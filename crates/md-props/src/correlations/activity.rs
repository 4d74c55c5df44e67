//! Activity coefficient of water in aqueous NaCl (Lawson & Lloyd).

use md_core::units::{Ratio, unitless};

/// `a = 1 − 0.5 x_nv − 10 x_nv²`, `x_nv` being the molar fraction of the
/// nonvolatile solute. No range check.
pub fn activity_coefficient_h2o(x_nv: Ratio) -> Ratio {
    let x = x_nv.value;
    unitless(1.0 - 0.5 * x - 10.0 * x * x)
}
