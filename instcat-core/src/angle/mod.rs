//! Angle value type, normalization and parsing.
//!
//! [`Angle`] stores radians internally. Constructors and accessors convert
//! from and to degrees, hours and arcseconds so callers never do the unit
//! arithmetic by hand.
//!
//! ```
//! use instcat_core::angle::{Angle, AngleUnits};
//!
//! let ra = "03:32:30".hms().unwrap();
//! assert!((ra.degrees() - 53.125).abs() < 1e-12);
//!
//! let dec = Angle::from_degrees(-27.8);
//! assert!(dec.radians() < 0.0);
//! ```

mod normalize;
pub mod parse;

pub use normalize::{wrap_0_2pi, wrap_pm_pi};
pub use parse::{parse_dec, parse_dms, parse_hms, parse_ra, AngleUnits};

use crate::constants::{ARCSEC_PER_DEGREE, DEGREES_PER_HOUR, DEG_TO_RAD, HALF_PI, RAD_TO_DEG};
use crate::errors::{CoreError, CoreResult};
use std::fmt;

/// A plane angle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Hours of right ascension; one hour is 15 degrees.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * DEGREES_PER_HOUR)
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self::from_degrees(arcsec / ARCSEC_PER_DEGREE)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    /// Same direction, wrapped into `[0, 2π)`.
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    /// Same direction, wrapped into `[-π, π)`.
    #[inline]
    pub fn wrapped_signed(self) -> Self {
        Self::from_radians(wrap_pm_pi(self.rad))
    }

    /// Checks that the angle is a usable declination in `[-90°, +90°]`.
    pub fn validate_declination(self) -> CoreResult<Self> {
        if !self.rad.is_finite() {
            return Err(CoreError::not_finite("validate_declination", self.rad));
        }
        if (-HALF_PI..=HALF_PI).contains(&self.rad) {
            return Ok(self);
        }
        Err(CoreError::out_of_range(
            "Dec",
            self.degrees(),
            "[-90°, +90°]",
        ))
    }

    /// Checks that the angle is finite and wraps it into `[0°, 360°)`.
    pub fn validate_right_ascension(self) -> CoreResult<Self> {
        if self.rad.is_finite() {
            return Ok(self.wrapped());
        }
        Err(CoreError::not_finite("validate_right_ascension", self.rad))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_round_trips() {
        let a = Angle::from_hours(2.0);
        assert_abs_diff_eq!(a.degrees(), 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.hours(), 2.0, epsilon = 1e-12);

        let b = Angle::from_arcseconds(36.0);
        assert_abs_diff_eq!(b.degrees(), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_wrapped_negative() {
        let a = Angle::from_degrees(-10.0).wrapped();
        assert_abs_diff_eq!(a.degrees(), 350.0, epsilon = 1e-10);
    }

    #[test]
    fn test_wrapped_signed() {
        let a = Angle::from_degrees(350.0).wrapped_signed();
        assert_abs_diff_eq!(a.degrees(), -10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_validate_declination() {
        assert!(Angle::from_degrees(90.0).validate_declination().is_ok());
        assert!(Angle::from_degrees(-90.0).validate_declination().is_ok());
        assert!(matches!(
            Angle::from_degrees(90.5).validate_declination(),
            Err(CoreError::OutOfRange { .. })
        ));
        assert!(matches!(
            Angle::from_radians(f64::NAN).validate_declination(),
            Err(CoreError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_right_ascension_wraps() {
        let ra = Angle::from_degrees(370.0).validate_right_ascension().unwrap();
        assert_abs_diff_eq!(ra.degrees(), 10.0, epsilon = 1e-10);
        assert!(Angle::from_radians(f64::INFINITY)
            .validate_right_ascension()
            .is_err());
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", Angle::from_degrees(12.346)), "12.35°");
    }
}
