//! Chemical species definitions.

use md_core::units::{MolarMass, constants, g_per_mol};

/// Species present in the water/brine systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Water (H₂O)
    H2O,
    /// Sodium chloride (NaCl)
    NaCl,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::H2O, Species::NaCl];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H2O => "H2O",
            Species::NaCl => "NaCl",
        }
    }

    /// Molar mass [g/mol].
    pub fn molar_mass_g_per_mol(&self) -> f64 {
        match self {
            Species::H2O => constants::MW_H2O,
            Species::NaCl => constants::MW_NACL,
        }
    }

    pub fn molar_mass(&self) -> MolarMass {
        g_per_mol(self.molar_mass_g_per_mol())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "H2O" | "WATER" => Ok(Species::H2O),
            "NACL" | "SALT" | "SODIUM CHLORIDE" => Ok(Species::NaCl),
            _ => Err("unknown species"),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
