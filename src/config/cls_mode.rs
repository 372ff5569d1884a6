// <FILE>src/config/cls_mode.rs</FILE> - <DESC>Mode and ErrorMode enums with case-insensitive parsing</DESC>
// <VERS>VERSION: 1.0.0</VERS>
// <WCTX>Initial implementation</WCTX>
// <CLOG>Initial creation</CLOG>

use std::str::FromStr;

use super::ConfigError;

/// Which side(s) of an operation get perturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No perturbation; pass-through IEEE arithmetic.
    Ieee,
    /// Precision bounding: perturb inputs only.
    Pb,
    /// Random rounding: perturb the result only, skipping representable
    /// exact results.
    Rr,
    /// Both inputs and result.
    Mca,
}

impl Mode {
    pub(super) fn to_u8(self) -> u8 {
        match self {
            Mode::Ieee => 0,
            Mode::Pb => 1,
            Mode::Rr => 2,
            Mode::Mca => 3,
        }
    }

    pub(super) fn from_u8(v: u8) -> Mode {
        match v {
            0 => Mode::Ieee,
            1 => Mode::Pb,
            2 => Mode::Rr,
            _ => Mode::Mca,
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ieee" => Ok(Mode::Ieee),
            "pb" => Ok(Mode::Pb),
            "rr" => Ok(Mode::Rr),
            "mca" => Ok(Mode::Mca),
            other => Err(ConfigError::InvalidValue {
                option: "mode",
                value: other.to_string(),
            }),
        }
    }
}

/// Which noise components are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Noise scaled by operand magnitude.
    Rel,
    /// Noise at a fixed absolute exponent.
    Abs,
    /// Both, summed.
    All,
}

impl ErrorMode {
    pub(super) fn to_u8(self) -> u8 {
        match self {
            ErrorMode::Rel => 0,
            ErrorMode::Abs => 1,
            ErrorMode::All => 2,
        }
    }

    pub(super) fn from_u8(v: u8) -> ErrorMode {
        match v {
            0 => ErrorMode::Rel,
            1 => ErrorMode::Abs,
            _ => ErrorMode::All,
        }
    }
}

impl ErrorMode {
    pub fn has_rel(self) -> bool {
        matches!(self, ErrorMode::Rel | ErrorMode::All)
    }

    pub fn has_abs(self) -> bool {
        matches!(self, ErrorMode::Abs | ErrorMode::All)
    }
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rel" => Ok(ErrorMode::Rel),
            "abs" => Ok(ErrorMode::Abs),
            "all" => Ok(ErrorMode::All),
            other => Err(ConfigError::InvalidValue {
                option: "error-mode",
                value: other.to_string(),
            }),
        }
    }
}


// <FILE>src/config/cls_mode.rs</FILE> - <DESC>Mode and ErrorMode enums with case-insensitive parsing</DESC>
// <VERS>END OF VERSION: 1.0.0</VERS>
