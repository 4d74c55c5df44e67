//! Composition unit converters.

use arrayvec::ArrayVec;
use md_core::numeric::ensure_finite;
use md_core::units::{Molality, Ratio, constants::MW_NACL, mol_per_kg, unitless};

use crate::catalog::Correlation;
use crate::composition::{MAX_SPECIES, MassComposition};
use crate::context::EvalContext;
use crate::error::{PropsError, PropsResult};

/// Convert an NaCl mass fraction into molality [mol/kg].
///
/// `m = w / (1 − w) / M_NaCl · 1000`. Physical for `w` in `[0, 1)`. The
/// formula is evaluated for any finite `w < 1`, so a slightly negative fraction
/// yields a slightly negative molality that callers can range-check. The result
/// grows without bound as `w → 1`; `w ≥ 1` (and any input whose result is not
/// finite) is a domain error rather than a huge or signed-infinite value.
pub fn mass_fraction_to_molality(w: Ratio) -> PropsResult<Molality> {
    let w = ensure_finite(w.value, "NaCl mass fraction")?;
    if w >= 1.0 {
        return Err(PropsError::Domain {
            what: "NaCl mass fraction",
            value: w,
        });
    }
    let m = w / (1.0 - w) / MW_NACL * 1000.0;
    if !m.is_finite() {
        return Err(PropsError::Domain {
            what: "NaCl mass fraction",
            value: w,
        });
    }
    Ok(mol_per_kg(m))
}

/// Inverse of [`mass_fraction_to_molality`].
pub fn molality_to_mass_fraction(m: Molality) -> PropsResult<Ratio> {
    let m = ensure_finite(m.mol_per_kg(), "molality")?;
    if m < 0.0 {
        return Err(PropsError::Domain {
            what: "molality",
            value: m,
        });
    }
    let solute = m * MW_NACL / 1000.0; // kg solute per kg solvent
    Ok(unitless(solute / (1.0 + solute)))
}

/// Moles per unit mass of every species, plus their sum.
fn mole_counts(comp: &MassComposition) -> (ArrayVec<f64, MAX_SPECIES>, f64) {
    let moles: ArrayVec<f64, MAX_SPECIES> = comp.iter().map(|(mw, w)| w / mw).collect();
    let total = moles.iter().sum();
    (moles, total)
}

/// Molar fraction of species `target`.
pub fn mass_to_molar_fraction(comp: &MassComposition, target: usize) -> PropsResult<Ratio> {
    if target >= comp.len() {
        return Err(PropsError::InvalidComposition {
            what: format!(
                "target index {target} out of range for {} species",
                comp.len()
            ),
        });
    }
    let (moles, total) = mole_counts(comp);
    if total <= 0.0 || !total.is_finite() {
        return Err(PropsError::InvalidComposition {
            what: format!("total mole count must be positive and finite, got {total}"),
        });
    }
    Ok(unitless(moles[target] / total))
}

/// Molar fractions of every species, in composition order.
pub fn mass_to_molar_fractions(
    comp: &MassComposition,
) -> PropsResult<ArrayVec<Ratio, MAX_SPECIES>> {
    let (moles, total) = mole_counts(comp);
    if total <= 0.0 || !total.is_finite() {
        return Err(PropsError::InvalidComposition {
            what: format!("total mole count must be positive and finite, got {total}"),
        });
    }
    Ok(moles.iter().map(|n| unitless(n / total)).collect())
}

/// Driver-facing molar fraction from raw parallel slices.
///
/// Malformed input (length mismatch, empty, bad index, ...) goes through the
/// context's invalid-input policy.
pub fn molar_fraction_from_slices(
    ctx: &EvalContext,
    molar_masses: &[f64],
    mass_fractions: &[f64],
    target: usize,
) -> PropsResult<Ratio> {
    let result = MassComposition::from_slices(molar_masses, mass_fractions)
        .and_then(|comp| mass_to_molar_fraction(&comp, target));
    match result {
        Ok(x) => Ok(x),
        Err(err) if err.is_invalid_input() => ctx
            .reject_invalid(Correlation::MassToMolarFraction, "composition", err)
            .map(unitless),
        Err(err) => Err(err),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn molality_round_trip(w in 0.0_f64..=0.9) {
            let m = mass_fraction_to_molality(unitless(w)).unwrap();
            let back = molality_to_mass_fraction(m).unwrap();
            prop_assert!((back.value - w).abs() <= 1e-12);
        }

        #[test]
        fn binary_molar_fractions_sum_to_one(w in 0.0_f64..=1.0) {
            let comp = MassComposition::brine(w).unwrap();
            let x0 = mass_to_molar_fraction(&comp, 0).unwrap().value;
            let x1 = mass_to_molar_fraction(&comp, 1).unwrap().value;
            prop_assert!((x0 + x1 - 1.0).abs() <= 1e-12);
        }

        #[test]
        fn molar_fractions_sum_to_one(
            pairs in prop::collection::vec((1.0_f64..200.0, 0.01_f64..1.0), 1..MAX_SPECIES)
        ) {
            let comp = MassComposition::new(&pairs).unwrap();
            let sum: f64 = mass_to_molar_fractions(&comp).unwrap().iter().map(|x| x.value).sum();
            prop_assert!((sum - 1.0).abs() <= 1e-12);
        }
    }
}
