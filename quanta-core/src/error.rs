//! Runtime errors
//!
//! Dimension and unit mismatches never reach runtime: they fail the build.
//! What remains are the numeric faults of the fixed-size representations,
//! exposed here for the `checked_*` / `try_*` entry points.

use thiserror::Error;
use crate::Ratio;

/// Error type for exact ratio arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatioError {
    #[error("Ratio overflow: result does not fit in i64 terms")]
    Overflow,

    #[error("Ratio terms must be positive")]
    NonPositive,

    #[error("Ratio has no exact root of degree {0}")]
    InexactRoot(i32),
}

/// Error type for rational exponents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExponentError {
    #[error("Exponent denominator must not be zero")]
    ZeroDenominator,
}

/// Error type for explicit conversions of quantity values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    #[error("Value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    #[error("Rescaling {value} by {ratio} overflows {target}")]
    RescaleOverflow {
        value: String,
        ratio: Ratio,
        target: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RatioError::InexactRoot(2).to_string(), "Ratio has no exact root of degree 2");
        let err = QuantityError::RescaleOverflow {
            value: "100".to_string(),
            ratio: Ratio::exp10(1),
            target: "i8",
        };
        assert_eq!(err.to_string(), "Rescaling 100 by 10 overflows i8");
    }
}
