//! md-props: thermophysical property correlations for membrane distillation.
//!
//! Provides:
//! - Saturation pressure and latent heat of water
//! - Solubility, density, viscosity and thermal conductivity of aqueous NaCl
//! - Effective thermal conductivity of porous membranes (Maxwell mixing rule)
//! - Activity coefficient of water and vapor pressure over brine
//! - Mass fraction ↔ molality and mass fraction → molar fraction converters
//!
//! # Architecture
//!
//! Every correlation is a stateless function. Those with a validated input
//! range take an [`EvalContext`], which carries the verbosity level, the
//! invalid-input policy and the [`DiagnosticSink`] that receives out-of-range
//! advisories. A context is built once by the driver and shared by reference
//! across worker threads.
//!
//! # Example
//!
//! ```
//! use md_core::units::{k, unitless};
//! use md_props::{EvalContext, Membrane, thermal_conductivity_maxwell, vapor_pressure_brine};
//!
//! let ctx = EvalContext::default();
//! let pv = vapor_pressure_brine(&ctx, k(333.15), unitless(0.965)).unwrap();
//! let km = thermal_conductivity_maxwell(k(333.15), unitless(0.8), Membrane::Ptfe);
//! println!("pv = {} Pa, k_m = {} W/(m·K)", pv.value, km.value);
//! ```

pub mod catalog;
pub mod composition;
pub mod context;
pub mod convert;
pub mod correlations;
pub mod diagnostics;
pub mod error;
pub mod material;
pub mod pack;
pub mod species;
pub mod sweeps;

// Re-exports for ergonomics
pub use catalog::{Correlation, CorrelationInfo, Gating, RangeCheck, ValidRange};
pub use composition::{MAX_SPECIES, MassComposition};
pub use context::{EvalConfig, EvalContext, InvalidInputPolicy};
pub use convert::{
    mass_fraction_to_molality, mass_to_molar_fraction, mass_to_molar_fractions,
    molality_to_mass_fraction, molar_fraction_from_slices,
};
pub use correlations::*;
pub use diagnostics::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, NullSink, TracingSink, Verbosity,
};
pub use error::{PropsError, PropsResult};
pub use material::{Membrane, Phase};
pub use pack::BrinePropertyPack;
pub use species::Species;
pub use sweeps::{SweepDefinition, SweepError, SweepResult, SweepType};
