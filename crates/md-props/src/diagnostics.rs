//! Structured diagnostics and the sinks that receive them.
//!
//! Correlations never log directly. They build a [`Diagnostic`] and hand it to
//! the [`DiagnosticSink`] attached to the evaluation context, which lets the
//! driver decide where warnings end up.

use std::fmt;
use std::sync::Mutex;

use crate::catalog::{Correlation, RangeCheck, ValidRange};
use crate::error::PropsError;

/// Process-wide verbosity threshold, 0 being the most verbose.
///
/// Advisories gated on verbosity are reported only while the level is below
/// [`Verbosity::ADVISORY_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Verbosity(pub u8);

impl Verbosity {
    pub const VERBOSE: Verbosity = Verbosity(0);
    pub const DEFAULT: Verbosity = Verbosity(1);
    pub const QUIET: Verbosity = Verbosity(2);
    pub const SILENT: Verbosity = Verbosity(u8::MAX);

    pub const ADVISORY_THRESHOLD: u8 = 2;

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn allows_advisories(self) -> bool {
        self.0 < Self::ADVISORY_THRESHOLD
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::DEFAULT
    }
}

/// Severity class of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// Input outside the validated domain; a value was still computed.
    OutOfRange,
    /// Structurally invalid input (unmapped selector, malformed composition).
    InvalidInput,
}

/// A single diagnostic event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub correlation: Correlation,
    /// Name of the offending input ("temperature", "molality", ...).
    pub quantity: &'static str,
    /// Offending value, in the unit of `range` when present.
    pub value: Option<f64>,
    pub range: Option<ValidRange>,
    pub message: Option<String>,
}

impl Diagnostic {
    pub fn out_of_range(correlation: Correlation, check: &RangeCheck, value: f64) -> Self {
        Self {
            kind: DiagnosticKind::OutOfRange,
            correlation,
            quantity: check.quantity,
            value: Some(value),
            range: Some(check.range),
            message: None,
        }
    }

    pub fn invalid_input(
        correlation: Correlation,
        quantity: &'static str,
        err: &PropsError,
    ) -> Self {
        Self {
            kind: DiagnosticKind::InvalidInput,
            correlation,
            quantity,
            value: None,
            range: None,
            message: Some(err.to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::OutOfRange => {
                write!(f, "[WARNING] {}: {}", self.correlation, self.quantity)?;
                if let Some(v) = self.value {
                    write!(f, " {v}")?;
                }
                match self.range {
                    Some(r) => write!(f, " is out of range {r}"),
                    None => write!(f, " is out of range"),
                }
            }
            DiagnosticKind::InvalidInput => {
                write!(f, "[ERROR] {}: invalid {}", self.correlation, self.quantity)?;
                if let Some(msg) = &self.message {
                    write!(f, " ({msg})")?;
                }
                Ok(())
            }
        }
    }
}

/// Receiver for diagnostic events.
///
/// Implementations must be thread-safe: one sink is shared by every worker
/// evaluating with the same context.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, d: &Diagnostic) {
        let (min, max) = d.range.map_or((f64::NAN, f64::NAN), |r| (r.min, r.max));
        let value = d.value.unwrap_or(f64::NAN);
        match d.kind {
            DiagnosticKind::OutOfRange => tracing::warn!(
                correlation = d.correlation.name(),
                quantity = d.quantity,
                value,
                min,
                max,
                "{d}"
            ),
            DiagnosticKind::InvalidInput => tracing::error!(
                correlation = d.correlation.name(),
                quantity = d.quantity,
                "{d}"
            ),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Records diagnostics in memory, e.g. for a per-timestep summary.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.lock().iter().filter(|d| d.kind == kind).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}
