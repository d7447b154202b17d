//! Error type for angle handling.
//!
//! Geometry itself never fails for finite input, so [`CoreError`] only covers
//! the places where text or caller-supplied values enter the crate: parsing
//! coordinate strings and validating them.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidAngle`](CoreError::InvalidAngle) | [`crate::angle::parse`] when the text is not a recognised angle |
//! | [`OutOfRange`](CoreError::OutOfRange) | validation of declinations and sexagesimal fields |
//! | [`NotFinite`](CoreError::NotFinite) | NaN or infinite values handed to validation |

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Text could not be interpreted as an angle.
    #[error("Cannot parse '{input}' as {expected}")]
    InvalidAngle { input: String, expected: String },

    /// A value lies outside its allowed range.
    #[error("{quantity} {value} out of range {range}")]
    OutOfRange {
        quantity: String,
        value: f64,
        range: String,
    },

    /// A NaN or infinite value reached an operation that needs a finite one.
    #[error("Non-finite value in {operation}: {value}")]
    NotFinite { operation: String, value: f64 },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Creates an [`InvalidAngle`](Self::InvalidAngle) error.
    pub fn invalid_angle(input: &str, expected: &str) -> Self {
        Self::InvalidAngle {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(quantity: &str, value: f64, range: &str) -> Self {
        Self::OutOfRange {
            quantity: quantity.to_string(),
            value,
            range: range.to_string(),
        }
    }

    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(operation: &str, value: f64) -> Self {
        Self::NotFinite {
            operation: operation.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_angle_message() {
        let err = CoreError::invalid_angle("12x", "HMS format");
        assert_eq!(err.to_string(), "Cannot parse '12x' as HMS format");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CoreError::out_of_range("Dec", 91.5, "[-90°, +90°]");
        assert_eq!(err.to_string(), "Dec 91.5 out of range [-90°, +90°]");
    }

    #[test]
    fn test_not_finite_message() {
        let err = CoreError::not_finite("validate_declination", f64::NAN);
        assert!(err.to_string().contains("validate_declination"));
    }
}
