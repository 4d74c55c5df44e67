//! Property correlation errors.

use md_core::CoreError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur while evaluating a correlation.
///
/// Advisory range violations are never errors; they travel through the
/// diagnostic sink instead (see [`crate::diagnostics`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// A raw selector code that maps to no known variant.
    #[error("Invalid selector for {what}: {code}")]
    InvalidSelector { what: &'static str, code: String },

    /// Structurally malformed composition vector.
    #[error("Invalid composition: {what}")]
    InvalidComposition { what: String },

    /// Input outside the mathematical domain of a conversion.
    #[error("Domain error for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    /// Non-finite input or result.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Malformed argument that is neither a selector nor a composition.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },
}

impl PropsError {
    /// True for the invalid-input class (selector/composition), as opposed to
    /// numeric domain failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PropsError::InvalidSelector { .. } | PropsError::InvalidComposition { .. }
        )
    }
}

impl From<PropsError> for CoreError {
    fn from(err: PropsError) -> Self {
        match err {
            PropsError::NonFinite { what, value } => CoreError::NonFinite { what, value },
            PropsError::Domain { what, value } => CoreError::InvalidArg {
                what: format!("{what} out of domain: {value}"),
            },
            PropsError::InvalidSelector { what, code } => CoreError::InvalidArg {
                what: format!("unknown {what} selector {code}"),
            },
            PropsError::InvalidComposition { what } => CoreError::InvalidArg {
                what: format!("invalid composition: {what}"),
            },
            PropsError::InvalidArgument { what } => CoreError::InvalidArg { what },
        }
    }
}

impl From<CoreError> for PropsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NonFinite { what, value } => PropsError::NonFinite { what, value },
            CoreError::InvalidArg { what } => PropsError::InvalidArgument { what },
        }
    }
}
