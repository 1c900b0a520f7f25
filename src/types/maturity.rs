//! Coconut maturity classification.
//!
//! The robot's classifier reports one of three maturity classes; anything
//! else is treated as `Unknown`. Parsing is case-insensitive so values are
//! canonicalized once at the boundary, regardless of whether they arrive as
//! a stored classification (`mature`) or a display label (`Mature`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maturity class of a scanned coconut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    /// Not ready for harvest.
    Premature,
    /// Ready for harvest.
    Mature,
    /// Should be harvested immediately.
    Overmature,
    /// Classifier returned an unrecognized class.
    Unknown,
}

impl Maturity {
    /// Human-readable analysis summary, as shown after a completed scan.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Premature => "Analysis Complete: Coconut is PREMATURE - Not ready for harvest",
            Self::Mature => "Analysis Complete: Coconut is MATURE - Ready for harvest",
            Self::Overmature => {
                "Analysis Complete: Coconut is OVERMATURE - Should be harvested immediately"
            }
            Self::Unknown => "Analysis Complete: Unknown classification",
        }
    }

    /// Display color hex for this class (a hint for UIs, not business logic).
    pub fn color(&self) -> &'static str {
        match self {
            Self::Premature => "#FF6B6B",
            Self::Mature => "#4ECDC4",
            Self::Overmature => "#45B7D1",
            Self::Unknown => "#10B981",
        }
    }
}

impl Default for Maturity {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Premature => write!(f, "premature"),
            Self::Mature => write!(f, "mature"),
            Self::Overmature => write!(f, "overmature"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Maturity {
    type Err = std::convert::Infallible;

    /// Unrecognized classes parse as `Unknown` rather than failing, matching
    /// how the capture flow treats novel classifier output.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "premature" => Self::Premature,
            "mature" => Self::Mature,
            "overmature" => Self::Overmature,
            _ => Self::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maturity_display() {
        assert_eq!(Maturity::Premature.to_string(), "premature");
        assert_eq!(Maturity::Mature.to_string(), "mature");
        assert_eq!(Maturity::Overmature.to_string(), "overmature");
        assert_eq!(Maturity::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_maturity_from_str_case_insensitive() {
        assert_eq!("Mature".parse::<Maturity>().unwrap(), Maturity::Mature);
        assert_eq!("PREMATURE".parse::<Maturity>().unwrap(), Maturity::Premature);
        assert_eq!("overmature".parse::<Maturity>().unwrap(), Maturity::Overmature);
    }

    #[test]
    fn test_maturity_from_str_unrecognized() {
        assert_eq!("ripe".parse::<Maturity>().unwrap(), Maturity::Unknown);
        assert_eq!("".parse::<Maturity>().unwrap(), Maturity::Unknown);
    }

    #[test]
    fn test_maturity_serde_lowercase() {
        let json = serde_json::to_string(&Maturity::Overmature).unwrap();
        assert_eq!(json, "\"overmature\"");
        let parsed: Maturity = serde_json::from_str("\"mature\"").unwrap();
        assert_eq!(parsed, Maturity::Mature);
    }
}
