//! Water vapor pressure over brine.

use md_core::units::{Pressure, Ratio, Temperature, pa, unitless};

use crate::catalog::{Correlation, VAPOR_PRESSURE_W};
use crate::composition::MassComposition;
use crate::context::EvalContext;
use crate::convert::mass_to_molar_fraction;
use crate::correlations::activity::activity_coefficient_h2o;
use crate::correlations::saturation::psat_h2o;
use crate::error::{PropsError, PropsResult};

/// Intermediate values of a brine vapor-pressure evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporPressureBreakdown {
    /// Molar fraction of the nonvolatile solute.
    pub x_nonvolatile: Ratio,
    /// Activity coefficient of water.
    pub activity: Ratio,
    /// Saturation pressure of pure water at the same temperature.
    pub psat: Pressure,
    /// `(1 − x_nv) · activity · psat`
    pub vapor_pressure: Pressure,
}

impl VaporPressureBreakdown {
    fn undefined() -> Self {
        Self {
            x_nonvolatile: unitless(f64::NAN),
            activity: unitless(f64::NAN),
            psat: pa(f64::NAN),
            vapor_pressure: pa(f64::NAN),
        }
    }
}

/// Vapor pressure of water over aqueous NaCl as an explicit pipeline:
///
/// 1. binary water/NaCl composition from the water mass fraction
/// 2. molar fraction of the nonvolatile solute
/// 3. activity coefficient of water
/// 4. pure-water saturation pressure, scaled by `(1 − x_nv) · activity`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrineVaporPressure;

impl BrineVaporPressure {
    /// Stages 1–2.
    pub fn nonvolatile_molar_fraction(mass_fraction_h2o: Ratio) -> PropsResult<Ratio> {
        let comp = MassComposition::brine(mass_fraction_h2o.value)?;
        let x_h2o = mass_to_molar_fraction(&comp, 0)?;
        Ok(unitless(1.0 - x_h2o.value))
    }

    /// Stages 3–4 given the nonvolatile molar fraction.
    pub fn from_molar_fraction(t: Temperature, x_nv: Ratio) -> VaporPressureBreakdown {
        let activity = activity_coefficient_h2o(x_nv);
        let psat = psat_h2o(t);
        let vapor_pressure = pa((1.0 - x_nv.value) * activity.value * psat.value);
        VaporPressureBreakdown {
            x_nonvolatile: x_nv,
            activity,
            psat,
            vapor_pressure,
        }
    }

    /// Full pipeline.
    ///
    /// A finite water mass fraction outside `[0, 1]` is an advisory (gated by
    /// verbosity) and is evaluated at the nearest bound. A non-finite fraction
    /// goes through the context's invalid-input policy; under reporting it
    /// yields an all-NaN breakdown.
    pub fn evaluate(
        ctx: &EvalContext,
        t: Temperature,
        mass_fraction_h2o: Ratio,
    ) -> PropsResult<VaporPressureBreakdown> {
        let w = mass_fraction_h2o.value;
        let stage = if w.is_finite() {
            ctx.check_range(Correlation::VaporPressureBrine, &VAPOR_PRESSURE_W, w);
            Self::nonvolatile_molar_fraction(unitless(w.clamp(0.0, 1.0)))
        } else {
            Err(PropsError::InvalidComposition {
                what: format!("non-finite water mass fraction {w}"),
            })
        };
        match stage {
            Ok(x_nv) => Ok(Self::from_molar_fraction(t, x_nv)),
            Err(err) if err.is_invalid_input() => {
                ctx.reject_invalid(Correlation::VaporPressureBrine, "composition", err)?;
                Ok(VaporPressureBreakdown::undefined())
            }
            Err(err) => Err(err),
        }
    }
}

/// Water vapor pressure [Pa] over brine with the given water mass fraction.
pub fn vapor_pressure_brine(
    ctx: &EvalContext,
    t: Temperature,
    mass_fraction_h2o: Ratio,
) -> PropsResult<Pressure> {
    BrineVaporPressure::evaluate(ctx, t, mass_fraction_h2o).map(|b| b.vapor_pressure)
}
