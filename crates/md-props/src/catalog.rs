//! Catalog of correlations and their validated input ranges.
//!
//! The range checks performed inside each correlation read their bounds from
//! the constants defined here, so the catalog and the runtime behavior cannot
//! drift apart.

use std::fmt;

/// Closed interval `[min, max]` in the stated unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidRange {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl ValidRange {
    pub const fn new(min: f64, max: f64, unit: &'static str) -> Self {
        Self { min, max, unit }
    }

    /// NaN is never contained.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] {}", self.min, self.max, self.unit)
    }
}

/// How a range violation is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Gating {
    /// Reported regardless of verbosity.
    Always,
    /// Reported only while the verbosity level allows advisories.
    Verbose,
    /// Listed for reference, never checked at runtime.
    Disabled,
}

/// One validated input of a correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeCheck {
    pub quantity: &'static str,
    pub range: ValidRange,
    pub gating: Gating,
}

pub const SOLUBILITY_T: RangeCheck = RangeCheck {
    quantity: "temperature",
    range: ValidRange::new(0.0, 450.0, "°C"),
    gating: Gating::Always,
};

pub const DENSITY_T: RangeCheck = RangeCheck {
    quantity: "temperature",
    range: ValidRange::new(0.0, 300.0, "°C"),
    gating: Gating::Verbose,
};

pub const VISCOSITY_T: RangeCheck = RangeCheck {
    quantity: "temperature",
    range: ValidRange::new(0.0, 80.0, "°C"),
    gating: Gating::Disabled,
};

pub const VISCOSITY_W: RangeCheck = RangeCheck {
    quantity: "mass fraction",
    range: ValidRange::new(0.0, 0.25, "-"),
    gating: Gating::Verbose,
};

pub const CONDUCTIVITY_NACL_T: RangeCheck = RangeCheck {
    quantity: "temperature",
    range: ValidRange::new(295.0, 365.0, "K"),
    gating: Gating::Verbose,
};

pub const CONDUCTIVITY_NACL_M: RangeCheck = RangeCheck {
    quantity: "molality",
    range: ValidRange::new(0.0, 6.0, "mol/kg"),
    gating: Gating::Verbose,
};

pub const VAPOR_PRESSURE_W: RangeCheck = RangeCheck {
    quantity: "water mass fraction",
    range: ValidRange::new(0.0, 1.0, "-"),
    gating: Gating::Verbose,
};

/// Every correlation exposed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correlation {
    SaturationPressureH2O,
    LatentHeatH2O,
    SolubilityNaCl,
    DensityNaCl,
    ViscosityNaCl,
    ThermalConductivityMaxwell,
    ThermalConductivityNaCl,
    ActivityCoefficientH2O,
    VaporPressureBrine,
    MassFractionToMolality,
    MassToMolarFraction,
}

/// Static description of a correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CorrelationInfo {
    pub name: &'static str,
    pub source: &'static str,
    pub checks: &'static [RangeCheck],
}

impl Correlation {
    pub const ALL: [Correlation; 11] = [
        Correlation::SaturationPressureH2O,
        Correlation::LatentHeatH2O,
        Correlation::SolubilityNaCl,
        Correlation::DensityNaCl,
        Correlation::ViscosityNaCl,
        Correlation::ThermalConductivityMaxwell,
        Correlation::ThermalConductivityNaCl,
        Correlation::ActivityCoefficientH2O,
        Correlation::VaporPressureBrine,
        Correlation::MassFractionToMolality,
        Correlation::MassToMolarFraction,
    ];

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn info(&self) -> CorrelationInfo {
        match self {
            Correlation::SaturationPressureH2O => CorrelationInfo {
                name: "psat_h2o",
                source: "Reynolds, Thermodynamic Properties in SI (1979)",
                checks: &[],
            },
            Correlation::LatentHeatH2O => CorrelationInfo {
                name: "latent_heat_h2o",
                source: "Drioli & Romano, Ind. Eng. Chem. Res. 40 (2001) 1277",
                checks: &[],
            },
            Correlation::SolubilityNaCl => CorrelationInfo {
                name: "solubility_nacl",
                source: "Sparrow, Desalination 159 (2003) 161, eq. 5",
                checks: &[SOLUBILITY_T],
            },
            Correlation::DensityNaCl => CorrelationInfo {
                name: "density_nacl",
                source: "Sparrow, Desalination 159 (2003) 161, eq. 7",
                checks: &[DENSITY_T],
            },
            Correlation::ViscosityNaCl => CorrelationInfo {
                name: "viscosity_nacl",
                source: "empirical fit of literature data",
                checks: &[VISCOSITY_T, VISCOSITY_W],
            },
            Correlation::ThermalConductivityMaxwell => CorrelationInfo {
                name: "thermal_conductivity_maxwell",
                source: "Garcia-Payo & Izquierdo-Gil, J. Phys. D 37 (2004) 3008",
                checks: &[],
            },
            Correlation::ThermalConductivityNaCl => CorrelationInfo {
                name: "thermal_conductivity_nacl",
                source: "Ramires et al., J. Chem. Eng. Data 39 (1994), eq. 7",
                checks: &[CONDUCTIVITY_NACL_T, CONDUCTIVITY_NACL_M],
            },
            Correlation::ActivityCoefficientH2O => CorrelationInfo {
                name: "activity_coefficient_h2o",
                source: "Lawson & Lloyd",
                checks: &[],
            },
            Correlation::VaporPressureBrine => CorrelationInfo {
                name: "vapor_pressure_brine",
                source: "molar fraction + activity coefficient + psat_h2o",
                checks: &[VAPOR_PRESSURE_W],
            },
            Correlation::MassFractionToMolality => CorrelationInfo {
                name: "mass_fraction_to_molality",
                source: "definition of molality",
                checks: &[],
            },
            Correlation::MassToMolarFraction => CorrelationInfo {
                name: "mass_to_molar_fraction",
                source: "definition of molar fraction",
                checks: &[],
            },
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
