//! Saturation pressure of pure water.

use md_core::numeric::polyval;
use md_core::units::{Pressure, Temperature, pa};

/// Critical pressure of water [Pa].
pub const H2O_PC: f64 = 22.089e6;
/// Critical temperature of water [K].
pub const H2O_TC: f64 = 647.286;

const PSAT_A: f64 = 0.01;
const PSAT_TP: f64 = 338.15;
const PSAT_COEFFS: [f64; 8] = [
    -7.419_242_0,
    2.972_21e-1,
    -1.155_286e-1,
    8.685_63e-3,
    1.094_098e-3,
    -4.399_93e-3,
    2.520_658e-3,
    -5.218_684e-4,
];

/// Saturation pressure of water vapor (Reynolds, 1979).
///
/// ```text
/// x    = 0.01 · (T − 338.15)
/// psat = Pc · exp((Tc/T − 1) · Σ cᵢ xⁱ)
/// ```
///
/// No range check is performed; the fit covers the liquid–vapor line up to the
/// critical point and callers are expected to stay within it. Below a few
/// kelvin the exponential underflows to zero.
pub fn psat_h2o(t: Temperature) -> Pressure {
    let t = t.value;
    let x = PSAT_A * (t - PSAT_TP);
    let sum = polyval(&PSAT_COEFFS, x);
    pa(H2O_PC * ((H2O_TC / t - 1.0) * sum).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use md_core::units::{degc, k};

    #[test]
    fn normal_boiling_point() {
        let p = psat_h2o(degc(100.0));
        assert!((p.value - 101_325.0).abs() / 101_325.0 < 0.005, "p = {}", p.value);
    }

    #[test]
    fn room_temperature() {
        // ≈ 3.17 kPa at 25 °C
        let p = psat_h2o(degc(25.0));
        assert!(p.value > 3100.0 && p.value < 3250.0, "p = {}", p.value);
    }

    #[test]
    fn critical_point() {
        let p = psat_h2o(k(H2O_TC));
        assert!((p.value - H2O_PC).abs() < 1e-6 * H2O_PC);
    }
}
