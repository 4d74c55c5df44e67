//! Membrane material and phase selectors.
//!
//! Drivers hand over integer codes; these are mapped exactly once, at
//! construction, so a correlation never sees an unmapped selector.

use crate::error::{PropsError, PropsResult};

/// Polymer membrane materials with tabulated solid-phase conductivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Membrane {
    /// Polyvinylidene fluoride (driver code 0)
    Pvdf,
    /// Polytetrafluoroethylene (driver code 1)
    Ptfe,
    /// Polypropylene (driver code 2)
    Pp,
    /// Polyethersulfone (driver code 3)
    Pes,
}

/// Phases of a porous membrane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Air and vapor trapped in the pores (driver code 0)
    Gas,
    /// Polymer matrix (driver code 1)
    Solid,
}

impl Membrane {
    pub const ALL: [Membrane; 4] = [Membrane::Pvdf, Membrane::Ptfe, Membrane::Pp, Membrane::Pes];

    pub fn key(&self) -> &'static str {
        match self {
            Membrane::Pvdf => "PVDF",
            Membrane::Ptfe => "PTFE",
            Membrane::Pp => "PP",
            Membrane::Pes => "PES",
        }
    }

    /// Integer code used by the external driver.
    pub fn code(&self) -> i32 {
        match self {
            Membrane::Pvdf => 0,
            Membrane::Ptfe => 1,
            Membrane::Pp => 2,
            Membrane::Pes => 3,
        }
    }

    /// Map a driver code to a membrane.
    pub fn from_code(code: i32) -> PropsResult<Self> {
        match code {
            0 => Ok(Membrane::Pvdf),
            1 => Ok(Membrane::Ptfe),
            2 => Ok(Membrane::Pp),
            3 => Ok(Membrane::Pes),
            other => Err(PropsError::InvalidSelector {
                what: "membrane",
                code: other.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for Membrane {
    type Error = PropsError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Membrane::from_code(code)
    }
}

impl std::str::FromStr for Membrane {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PVDF" => Ok(Membrane::Pvdf),
            "PTFE" => Ok(Membrane::Ptfe),
            "PP" | "POLYPROPYLENE" => Ok(Membrane::Pp),
            "PES" => Ok(Membrane::Pes),
            _ => Err(PropsError::InvalidSelector {
                what: "membrane",
                code: s.to_string(),
            }),
        }
    }
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Gas, Phase::Solid];

    pub fn key(&self) -> &'static str {
        match self {
            Phase::Gas => "gas",
            Phase::Solid => "solid",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Phase::Gas => 0,
            Phase::Solid => 1,
        }
    }

    pub fn from_code(code: i32) -> PropsResult<Self> {
        match code {
            0 => Ok(Phase::Gas),
            1 => Ok(Phase::Solid),
            other => Err(PropsError::InvalidSelector {
                what: "phase",
                code: other.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for Phase {
    type Error = PropsError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Phase::from_code(code)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::fmt::Display for Membrane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for m in Membrane::ALL {
            assert_eq!(Membrane::from_code(m.code()).unwrap(), m);
            assert_eq!(Membrane::try_from(m.code()).unwrap(), m);
            assert_eq!(m.key().parse::<Membrane>().unwrap(), m);
        }
    }

    #[test]
    fn unmapped_code_is_rejected() {
        for code in [-1, 4, 99, i32::MIN, i32::MAX] {
            let err = Membrane::from_code(code).unwrap_err();
            assert!(matches!(err, PropsError::InvalidSelector { what: "membrane", .. }));
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn phase_codes() {
        for p in Phase::ALL {
            assert_eq!(Phase::from_code(p.code()).unwrap(), p);
            assert_eq!(Phase::try_from(p.code()).unwrap(), p);
        }
        for code in [-1, 2, i32::MAX] {
            let err = Phase::try_from(code).unwrap_err();
            assert!(matches!(err, PropsError::InvalidSelector { what: "phase", .. }));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("nylon".parse::<Membrane>().is_err());
    }
}
