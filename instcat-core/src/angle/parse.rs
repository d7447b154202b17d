//! Angle parsing from coordinate text.
//!
//! Accepted notations:
//!
//! ```text
//! Decimal:          83.633   -5.375
//! Colon/space:      05:34:31.9   -05 22 30
//! HMS letters:      5h34m31.9s
//! DMS letters:      -5d22m30s   -5°22'30"
//! ```
//!
//! Colon and space separated values are ambiguous; [`parse_hms`] reads them as
//! hours and [`parse_dms`] as degrees. A sign is only accepted at the front.
//!
//! [`parse_ra`] and [`parse_dec`] are the entry points for cone centers typed
//! by a user: sexagesimal first, decimal degrees as fallback, then range
//! validation.
//!
//! ```
//! use instcat_core::angle::{parse_dec, parse_ra};
//!
//! let ra = parse_ra("05:34:31.94").unwrap();
//! let dec = parse_dec("+22d00m52.2s").unwrap();
//! assert!((ra.degrees() - 83.633083).abs() < 1e-6);
//! assert!((dec.degrees() - 22.014500).abs() < 1e-6);
//! ```

use super::Angle;
use crate::errors::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Parse strings as angles with an explicit unit.
pub trait AngleUnits {
    /// Parse as decimal degrees.
    fn deg(&self) -> CoreResult<Angle>;
    /// Parse as decimal hours (1 hour = 15 degrees).
    fn hours(&self) -> CoreResult<Angle>;
    /// Parse as decimal arcseconds.
    fn arcsec(&self) -> CoreResult<Angle>;
    /// Parse degrees-minutes-seconds.
    fn dms(&self) -> CoreResult<Angle>;
    /// Parse hours-minutes-seconds.
    fn hms(&self) -> CoreResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> CoreResult<Angle> {
        parse_decimal(self).map(Angle::from_degrees)
    }

    #[inline]
    fn hours(&self) -> CoreResult<Angle> {
        parse_decimal(self).map(Angle::from_hours)
    }

    #[inline]
    fn arcsec(&self) -> CoreResult<Angle> {
        parse_decimal(self).map(Angle::from_arcseconds)
    }

    #[inline]
    fn dms(&self) -> CoreResult<Angle> {
        parse_dms(self)
    }

    #[inline]
    fn hms(&self) -> CoreResult<Angle> {
        parse_hms(self)
    }
}

fn parse_decimal(s: &str) -> CoreResult<f64> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::invalid_angle(s, "a decimal number"))?;
    if !value.is_finite() {
        return Err(CoreError::not_finite("parse_decimal", value));
    }
    Ok(value)
}

static SEPARATED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-])?(\d{1,3})[:\s]+(\d{1,2})[:\s]+(\d{1,2}(?:\.\d*)?)$").unwrap()
});

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([+-])?(\d{1,3})h\s*(\d{1,2})m\s*(\d{1,2}(?:\.\d*)?)s?$").unwrap()
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^([+-])?(\d{1,3})[d°]\s*(\d{1,2})['m]\s*(\d{1,2}(?:\.\d*)?)(?:"|''|s)?$"#)
        .unwrap()
});

/// Parse hours-minutes-seconds, e.g. `05:34:31.9` or `5h34m31.9s`.
pub fn parse_hms(s: &str) -> CoreResult<Angle> {
    let trimmed = s.trim();
    let caps = SEPARATED_REGEX
        .captures(trimmed)
        .or_else(|| HMS_REGEX.captures(trimmed))
        .ok_or_else(|| CoreError::invalid_angle(s, "HMS format"))?;
    sexagesimal_value(&caps).map(Angle::from_hours)
}

/// Parse degrees-minutes-seconds, e.g. `-05:22:30` or `-5d22m30s`.
pub fn parse_dms(s: &str) -> CoreResult<Angle> {
    let trimmed = s.trim();
    let caps = SEPARATED_REGEX
        .captures(trimmed)
        .or_else(|| DMS_REGEX.captures(trimmed))
        .ok_or_else(|| CoreError::invalid_angle(s, "DMS format"))?;
    sexagesimal_value(&caps).map(Angle::from_degrees)
}

/// Combines the sign, whole, minute and second groups into one value in the
/// unit of the leading field.
fn sexagesimal_value(caps: &Captures) -> CoreResult<f64> {
    let sign = match caps.get(1).map(|m| m.as_str()) {
        Some("-") => -1.0,
        _ => 1.0,
    };
    let field = |i: usize| -> f64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };
    let (whole, minutes, seconds) = (field(2), field(3), field(4));

    if minutes >= 60.0 {
        return Err(CoreError::out_of_range("minutes", minutes, "[0, 60)"));
    }
    if seconds >= 60.0 {
        return Err(CoreError::out_of_range("seconds", seconds, "[0, 60)"));
    }

    Ok(sign * (whole + minutes / 60.0 + seconds / 3600.0))
}

/// Parse a right ascension: HMS, falling back to decimal degrees.
///
/// The result is wrapped into `[0°, 360°)`.
pub fn parse_ra(s: &str) -> CoreResult<Angle> {
    s.hms().or_else(|_| s.deg())?.validate_right_ascension()
}

/// Parse a declination: DMS, falling back to decimal degrees.
///
/// Values outside `[-90°, +90°]` are rejected.
pub fn parse_dec(s: &str) -> CoreResult<Angle> {
    s.dms().or_else(|_| s.deg())?.validate_declination()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hms_colon() {
        let a = parse_hms("12:30:00").unwrap();
        assert_abs_diff_eq!(a.degrees(), 187.5, epsilon = 1e-10);
    }

    #[test]
    fn test_hms_letters() {
        let a = parse_hms("3h32m10.5s").unwrap();
        let expected = (3.0 + 32.0 / 60.0 + 10.5 / 3600.0) * 15.0;
        assert_abs_diff_eq!(a.degrees(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_dms_negative_zero_degrees() {
        let a = parse_dms("-00:30:00").unwrap();
        assert_abs_diff_eq!(a.degrees(), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dms_symbols() {
        let a = parse_dms("-27°48'36\"").unwrap();
        assert_abs_diff_eq!(a.degrees(), -27.81, epsilon = 1e-10);
    }

    #[test]
    fn test_dms_letters_with_space() {
        let a = parse_dms("+45d 30m 15s").unwrap();
        let expected = 45.0 + 30.0 / 60.0 + 15.0 / 3600.0;
        assert_abs_diff_eq!(a.degrees(), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_minutes_out_of_range() {
        assert!(matches!(
            parse_dms("10:60:00"),
            Err(CoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_hms_rejects_decimal() {
        assert!(matches!(
            parse_hms("53.04"),
            Err(CoreError::InvalidAngle { .. })
        ));
    }

    #[test]
    fn test_parse_ra_decimal_fallback() {
        let a = parse_ra("53.0449009").unwrap();
        assert_abs_diff_eq!(a.degrees(), 53.0449009, epsilon = 1e-10);
    }

    #[test]
    fn test_parse_ra_wraps() {
        let a = parse_ra("-10").unwrap();
        assert_abs_diff_eq!(a.degrees(), 350.0, epsilon = 1e-10);
    }

    #[test]
    fn test_parse_dec_range() {
        assert!(parse_dec("-27.3220807").is_ok());
        assert!(matches!(
            parse_dec("95.0"),
            Err(CoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_ra("north").is_err());
        assert!(parse_dec("").is_err());
        assert!(parse_dec("nan").is_err());
    }

    #[test]
    fn test_unit_methods() {
        assert_abs_diff_eq!("1.5".hours().unwrap().degrees(), 22.5, epsilon = 1e-10);
        assert_abs_diff_eq!("3600".arcsec().unwrap().degrees(), 1.0, epsilon = 1e-12);
    }
}
