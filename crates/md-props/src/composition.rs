//! Composition vectors defined by mass fractions.

use arrayvec::ArrayVec;
use md_core::numeric::{Tolerances, nearly_equal};

use crate::error::{PropsError, PropsResult};
use crate::species::Species;

/// Upper bound on the number of species in one composition.
pub const MAX_SPECIES: usize = 8;

/// Ordered `(molar mass [g/mol], mass fraction)` pairs.
///
/// Entries are validated on construction (finite, positive molar masses;
/// finite, non-negative mass fractions). The fractions are *not* normalized
/// and are not required to sum to one; callers that rely on closure can check
/// [`MassComposition::mass_fraction_sum`].
#[derive(Debug, Clone, PartialEq)]
pub struct MassComposition {
    items: ArrayVec<(f64, f64), MAX_SPECIES>,
}

impl MassComposition {
    /// Create a composition from `(molar mass [g/mol], mass fraction)` pairs.
    pub fn new(pairs: &[(f64, f64)]) -> PropsResult<Self> {
        if pairs.is_empty() {
            return Err(invalid("empty composition"));
        }
        if pairs.len() > MAX_SPECIES {
            return Err(invalid(format!(
                "{} species exceeds the supported maximum of {MAX_SPECIES}",
                pairs.len()
            )));
        }

        let mut items = ArrayVec::new();
        for (i, &(mw, w)) in pairs.iter().enumerate() {
            if !mw.is_finite() || mw <= 0.0 {
                return Err(invalid(format!(
                    "molar mass of species {i} must be positive and finite, got {mw}"
                )));
            }
            if !w.is_finite() {
                return Err(invalid(format!("non-finite mass fraction for species {i}")));
            }
            if w < 0.0 {
                return Err(invalid(format!("negative mass fraction {w} for species {i}")));
            }
            items.push((mw, w));
        }

        Ok(Self { items })
    }

    /// Create a composition from parallel molar-mass and mass-fraction slices.
    pub fn from_slices(molar_masses: &[f64], mass_fractions: &[f64]) -> PropsResult<Self> {
        if molar_masses.len() != mass_fractions.len() {
            return Err(invalid(format!(
                "{} molar masses but {} mass fractions",
                molar_masses.len(),
                mass_fractions.len()
            )));
        }
        if molar_masses.len() > MAX_SPECIES {
            return Err(invalid(format!(
                "{} species exceeds the supported maximum of {MAX_SPECIES}",
                molar_masses.len()
            )));
        }
        let pairs: ArrayVec<(f64, f64), MAX_SPECIES> = molar_masses
            .iter()
            .copied()
            .zip(mass_fractions.iter().copied())
            .collect();
        Self::new(&pairs)
    }

    /// Create a composition from known species.
    pub fn from_species(fractions: &[(Species, f64)]) -> PropsResult<Self> {
        if fractions.len() > MAX_SPECIES {
            return Err(invalid(format!(
                "{} species exceeds the supported maximum of {MAX_SPECIES}",
                fractions.len()
            )));
        }
        let pairs: ArrayVec<(f64, f64), MAX_SPECIES> = fractions
            .iter()
            .map(|(s, w)| (s.molar_mass_g_per_mol(), *w))
            .collect();
        Self::new(&pairs)
    }

    /// Binary water/NaCl composition with water at index 0.
    pub fn brine(mass_fraction_h2o: f64) -> PropsResult<Self> {
        Self::from_species(&[
            (Species::H2O, mass_fraction_h2o),
            (Species::NaCl, 1.0 - mass_fraction_h2o),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Molar mass [g/mol] of species `i`.
    pub fn molar_mass(&self, i: usize) -> Option<f64> {
        self.items.get(i).map(|(mw, _)| *mw)
    }

    /// Mass fraction of species `i`.
    pub fn mass_fraction(&self, i: usize) -> Option<f64> {
        self.items.get(i).map(|(_, w)| *w)
    }

    pub fn mass_fraction_sum(&self) -> f64 {
        self.items.iter().map(|(_, w)| w).sum()
    }

    /// Whether the mass fractions sum to one within `tol`.
    pub fn is_closed(&self, tol: Tolerances) -> bool {
        nearly_equal(self.mass_fraction_sum(), 1.0, tol)
    }

    /// Iterate over `(molar mass, mass fraction)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.items.iter().copied()
    }
}

fn invalid(what: impl Into<String>) -> PropsError {
    PropsError::InvalidComposition { what: what.into() }
}
