//! Classification confidence percentage.
//!
//! The classifier reports a percentage in `[0, 100]`. The newtype validates
//! at construction and at deserialization so out-of-range values never
//! enter the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence percentage, guaranteed to lie in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Create a validated confidence value.
    pub fn new(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ConfidenceError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The raw percentage.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded to the nearest whole percent.
    pub fn rounded(&self) -> u32 {
        self.0.round() as u32
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

/// Error type for confidence validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfidenceError {
    #[error("confidence {0} is outside the valid range [0, 100]")]
    OutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_valid_range() {
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(100.0).is_ok());
        assert!(Confidence::new(87.5).is_ok());
    }

    #[test]
    fn test_confidence_out_of_range() {
        assert!(Confidence::new(-0.1).is_err());
        assert!(Confidence::new(100.1).is_err());
        assert!(Confidence::new(f64::NAN).is_err());
    }

    #[test]
    fn test_confidence_rounding() {
        assert_eq!(Confidence::new(87.5).unwrap().rounded(), 88);
        assert_eq!(Confidence::new(87.4).unwrap().rounded(), 87);
    }

    #[test]
    fn test_confidence_deserialization_rejects_invalid() {
        assert!(serde_json::from_str::<Confidence>("95.0").is_ok());
        assert!(serde_json::from_str::<Confidence>("120.0").is_err());
        assert!(serde_json::from_str::<Confidence>("-5.0").is_err());
    }

    #[test]
    fn test_confidence_display_whole_number() {
        // Whole percentages render without a trailing fraction.
        assert_eq!(Confidence::new(80.0).unwrap().to_string(), "80");
        assert_eq!(Confidence::new(87.5).unwrap().to_string(), "87.5");
    }
}
