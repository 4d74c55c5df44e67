//! Property sweeps.
//!
//! Generates parameter points (temperature, mass fraction, porosity, ...) and
//! evaluates a correlation over them in parallel. Used for tables, plots and
//! checking a correlation's behavior across its validated range.

use std::fmt;

use rayon::prelude::*;
use thiserror::Error;

use crate::error::PropsError;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid sweep configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Evaluation failed at point {point_index}: {source}")]
    Evaluation {
        point_index: usize,
        #[source]
        source: PropsError,
    },
}

/// Definition of a single parameter sweep, bounds in canonical SI units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

/// Inputs and evaluated values, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult<T> {
    pub inputs: Vec<f64>,
    pub values: Vec<T>,
}

impl<T> SweepResult<T> {
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> + '_ {
        self.inputs.iter().copied().zip(self.values.iter())
    }
}

impl SweepDefinition {
    pub fn new(
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    pub fn linear(start: f64, end: f64, num_points: usize) -> Result<Self, SweepError> {
        Self::new(start, end, num_points, SweepType::Linear)
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // For logarithmic sweep, both start and end must be positive
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }

    /// Evaluate `f` at every point, in parallel, preserving point order.
    pub fn evaluate<T, F>(&self, f: F) -> SweepResult<T>
    where
        T: Send,
        F: Fn(f64) -> T + Sync + Send,
    {
        let inputs = self.generate_points();
        let values = inputs.par_iter().map(|&x| f(x)).collect();
        SweepResult { inputs, values }
    }

    /// Like [`SweepDefinition::evaluate`] for fallible correlations; the first
    /// failing point (lowest index) is returned as the error.
    pub fn try_evaluate<T, F>(&self, f: F) -> Result<SweepResult<T>, SweepError>
    where
        T: Send,
        F: Fn(f64) -> Result<T, PropsError> + Sync + Send,
    {
        let inputs = self.generate_points();
        let outcomes: Vec<Result<T, PropsError>> = inputs.par_iter().map(|&x| f(x)).collect();
        let mut values = Vec::with_capacity(outcomes.len());
        for (point_index, outcome) in outcomes.into_iter().enumerate() {
            values.push(outcome.map_err(|source| SweepError::Evaluation {
                point_index,
                source,
            })?);
        }
        Ok(SweepResult { inputs, values })
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::mass_fraction_to_molality;
    use crate::correlations::psat_h2o;
    use md_core::units::{k, unitless};

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::linear(300.0, 400.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 300.0).abs() < 1e-9);
        assert!((points[2] - 350.0).abs() < 1e-9);
        assert_eq!(points[4], 400.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::new(1e-3, 1e-1, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 1e-3);
        assert_eq!(points[2], 1e-1);
        assert!((points[1] - 1e-2).abs() / 1e-2 < 1e-9);
    }

    #[test]
    fn logarithmic_falls_back_to_linear() {
        let sweep = SweepDefinition::new(0.0, 0.2, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert!((points[1] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn reject_invalid_configuration() {
        assert!(SweepDefinition::linear(300.0, 400.0, 1).is_err());
        assert!(SweepDefinition::linear(300.0, 300.0, 5).is_err());
        assert!(SweepDefinition::linear(f64::NAN, 300.0, 5).is_err());
    }

    #[test]
    fn evaluate_preserves_order() {
        let sweep = SweepDefinition::linear(280.0, 360.0, 81).unwrap();
        let result = sweep.evaluate(|t| psat_h2o(k(t)).value);
        assert_eq!(result.len(), 81);
        for (x, &p) in result.iter() {
            assert_eq!(p, psat_h2o(k(x)).value);
        }
        assert!(result.values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn try_evaluate_reports_first_failure() {
        let sweep = SweepDefinition::linear(0.0, 1.0, 11).unwrap();
        let err = sweep
            .try_evaluate(|w| mass_fraction_to_molality(unitless(w)))
            .unwrap_err();
        assert!(matches!(err, SweepError::Evaluation { point_index: 10, .. }));

        let ok = SweepDefinition::linear(0.0, 0.5, 6)
            .unwrap()
            .try_evaluate(|w| mass_fraction_to_molality(unitless(w)))
            .unwrap();
        assert_eq!(ok.values.len(), 6);
    }
}
