//! Evaluation context: configuration plus the diagnostic channel.
//!
//! One context is built by the driver before evaluation starts and is then
//! shared read-only by every worker (`&EvalContext` is `Send + Sync`).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use md_core::{CoreError, CoreResult};

use crate::catalog::{Correlation, Gating, RangeCheck};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink, Verbosity};
use crate::error::{PropsError, PropsResult};

/// Environment variable holding the verbosity level.
pub const ENV_VERBOSITY: &str = "MDPROPS_VERBOSITY";
/// Environment variable holding the invalid-input policy (`fatal` | `report`).
pub const ENV_INVALID_INPUT: &str = "MDPROPS_INVALID_INPUT";

/// What to do with structurally invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InvalidInputPolicy {
    /// Report, then return the error.
    #[default]
    Fatal,
    /// Report, then return NaN.
    Report,
}

impl FromStr for InvalidInputPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fatal" => Ok(InvalidInputPolicy::Fatal),
            "report" => Ok(InvalidInputPolicy::Report),
            other => Err(CoreError::InvalidArg {
                what: format!("unknown invalid-input policy '{other}'"),
            }),
        }
    }
}

/// Plain configuration values for an evaluation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvalConfig {
    pub verbosity: Verbosity,
    pub invalid_input: InvalidInputPolicy,
}

impl EvalConfig {
    /// Read configuration from `MDPROPS_VERBOSITY` / `MDPROPS_INVALID_INPUT`.
    ///
    /// Unset variables keep their defaults; malformed values are an error.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EvalConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_VERBOSITY) {
            let level = raw.trim().parse::<u8>().map_err(|_| CoreError::InvalidArg {
                what: format!("{ENV_VERBOSITY} must be an integer in 0..=255, got '{raw}'"),
            })?;
            config.verbosity = Verbosity(level);
        }
        if let Some(raw) = lookup(ENV_INVALID_INPUT) {
            config.invalid_input = raw.parse()?;
        }
        Ok(config)
    }
}

/// Configuration and diagnostic sink shared by all correlation calls.
#[derive(Clone)]
pub struct EvalContext {
    config: EvalConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl EvalContext {
    /// Context reporting through [`TracingSink`].
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            sink: Arc::new(TracingSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    pub fn with_invalid_input(mut self, policy: InvalidInputPolicy) -> Self {
        self.config.invalid_input = policy;
        self
    }

    pub fn config(&self) -> EvalConfig {
        self.config
    }

    pub fn verbosity(&self) -> Verbosity {
        self.config.verbosity
    }

    pub fn invalid_input_policy(&self) -> InvalidInputPolicy {
        self.config.invalid_input
    }

    pub fn report(&self, diagnostic: &Diagnostic) {
        self.sink.report(diagnostic);
    }

    /// Check `value` against a validated range, reporting a violation when the
    /// check's gating allows it. Returns whether the value was in range.
    pub fn check_range(&self, correlation: Correlation, check: &RangeCheck, value: f64) -> bool {
        if matches!(check.gating, Gating::Disabled) || check.range.contains(value) {
            return true;
        }
        let emit = match check.gating {
            Gating::Always => true,
            Gating::Verbose => self.config.verbosity.allows_advisories(),
            Gating::Disabled => false,
        };
        if emit {
            self.report(&Diagnostic::out_of_range(correlation, check, value));
        }
        false
    }

    /// Route an invalid-input error through the configured policy.
    ///
    /// The error is always reported. Under [`InvalidInputPolicy::Fatal`] it is
    /// returned; under [`InvalidInputPolicy::Report`] the call yields NaN.
    pub fn reject_invalid(
        &self,
        correlation: Correlation,
        quantity: &'static str,
        err: PropsError,
    ) -> PropsResult<f64> {
        self.report(&Diagnostic::invalid_input(correlation, quantity, &err));
        match self.config.invalid_input {
            InvalidInputPolicy::Fatal => Err(err),
            InvalidInputPolicy::Report => Ok(f64::NAN),
        }
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new(EvalConfig::default())
    }
}

impl fmt::Debug for EvalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DENSITY_T, SOLUBILITY_T, VISCOSITY_T};
    use crate::diagnostics::{CollectingSink, DiagnosticKind};
    use std::collections::HashMap;

    fn collecting(verbosity: Verbosity) -> (EvalContext, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        let ctx = EvalContext::default()
            .with_verbosity(verbosity)
            .with_sink(sink.clone());
        (ctx, sink)
    }

    #[test]
    fn context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EvalContext>();
    }

    #[test]
    fn gated_check_respects_verbosity() {
        let (ctx, sink) = collecting(Verbosity::DEFAULT);
        assert!(!ctx.check_range(Correlation::DensityNaCl, &DENSITY_T, 400.0));
        assert_eq!(sink.len(), 1);

        let (ctx, sink) = collecting(Verbosity::QUIET);
        assert!(!ctx.check_range(Correlation::DensityNaCl, &DENSITY_T, 400.0));
        assert!(sink.is_empty());
    }

    #[test]
    fn ungated_check_ignores_verbosity() {
        let (ctx, sink) = collecting(Verbosity::SILENT);
        assert!(!ctx.check_range(Correlation::SolubilityNaCl, &SOLUBILITY_T, 500.0));
        assert_eq!(sink.count(DiagnosticKind::OutOfRange), 1);
    }

    #[test]
    fn disabled_check_never_fires() {
        let (ctx, sink) = collecting(Verbosity::VERBOSE);
        assert!(ctx.check_range(Correlation::ViscosityNaCl, &VISCOSITY_T, 500.0));
        assert!(sink.is_empty());
    }

    #[test]
    fn in_range_is_silent() {
        let (ctx, sink) = collecting(Verbosity::VERBOSE);
        assert!(ctx.check_range(Correlation::DensityNaCl, &DENSITY_T, 25.0));
        assert!(sink.is_empty());
    }

    #[test]
    fn reject_invalid_policies() {
        let err = PropsError::InvalidSelector {
            what: "membrane",
            code: "5".into(),
        };

        let (ctx, sink) = collecting(Verbosity::SILENT);
        let result =
            ctx.reject_invalid(Correlation::ThermalConductivityMaxwell, "membrane", err.clone());
        assert_eq!(result, Err(err.clone()));
        assert_eq!(sink.count(DiagnosticKind::InvalidInput), 1);

        let (ctx, sink) = collecting(Verbosity::SILENT);
        let ctx = ctx.with_invalid_input(InvalidInputPolicy::Report);
        let value = ctx
            .reject_invalid(Correlation::ThermalConductivityMaxwell, "membrane", err)
            .unwrap();
        assert!(value.is_nan());
        assert_eq!(sink.count(DiagnosticKind::InvalidInput), 1);
    }

    #[test]
    fn config_from_lookup() {
        let vars: HashMap<&str, &str> =
            [(ENV_VERBOSITY, "2"), (ENV_INVALID_INPUT, "Report")].into_iter().collect();
        let config = EvalConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.verbosity, Verbosity::QUIET);
        assert_eq!(config.invalid_input, InvalidInputPolicy::Report);

        let config = EvalConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, EvalConfig::default());
    }

    #[test]
    fn config_from_lookup_rejects_garbage() {
        let bad_level =
            EvalConfig::from_lookup(|k| (k == ENV_VERBOSITY).then(|| "loud".to_string()));
        assert!(bad_level.is_err());

        let bad_policy =
            EvalConfig::from_lookup(|k| (k == ENV_INVALID_INPUT).then(|| "ignore".to_string()));
        assert!(matches!(bad_policy, Err(CoreError::InvalidArg { .. })));
    }
}
