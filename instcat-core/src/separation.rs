//! Sky positions and the angular separation between them.
//!
//! Separation is a single capability, [`SeparationMetric`], so catalog code
//! can be tested and configured independently of the formula behind it.
//!
//! | Metric | Formula | Range | Use |
//! |--------|---------|-------|-----|
//! | [`Vincenty`] | atan2 form of the great-circle distance | [0°, 180°] | Default; stable everywhere |
//! | [`Haversine`] | half-angle sines, clamped `asin` | [0°, 180°] | Cross-check |
//! | [`FlatSky`] | `sqrt(ΔDec² + (cos δ · ΔRA)²)` | unbounded | Small fields only |
//!
//! [`FlatSky`] reproduces the quick acceptance-cone cut used by phoSim catalog
//! tooling. It is not a metric on the sphere: it is asymmetric (the cosine
//! uses the target's declination) and degrades away from the cone center.

use crate::angle::Angle;
use crate::constants::RAD_TO_DEG;
use crate::math::{haversine_angular_separation, vincenty_angular_separation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A position on the celestial sphere, right ascension and declination in degrees.
///
/// No range checks are applied. Use
/// [`Angle::validate_declination`] when values come from user input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkyPosition {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl SkyPosition {
    #[inline]
    pub const fn new(ra_deg: f64, dec_deg: f64) -> Self {
        Self { ra_deg, dec_deg }
    }

    #[inline]
    pub fn from_angles(ra: Angle, dec: Angle) -> Self {
        Self::new(ra.degrees(), dec.degrees())
    }

    #[inline]
    pub fn dec(&self) -> Angle {
        Angle::from_degrees(self.dec_deg)
    }

    /// Great-circle distance to `other` in degrees, using [`Vincenty`].
    #[inline]
    pub fn separation_deg(&self, other: &SkyPosition) -> f64 {
        Vincenty.separation_deg(self, other)
    }
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(RA {:.6}°, Dec {:+.6}°)", self.ra_deg, self.dec_deg)
    }
}

/// Computes the angular distance between two sky positions.
pub trait SeparationMetric {
    /// Distance from `center` to `target`, in degrees.
    ///
    /// Argument order only matters for metrics that are not symmetric.
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64;
}

impl<M: SeparationMetric + ?Sized> SeparationMetric for &M {
    #[inline]
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64 {
        (**self).separation_deg(center, target)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vincenty;

impl SeparationMetric for Vincenty {
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64 {
        let (d1_sin, d1_cos) = center.dec().sin_cos();
        let (d2_sin, d2_cos) = target.dec().sin_cos();
        let delta_lon = Angle::from_degrees(target.ra_deg - center.ra_deg).radians();

        vincenty_angular_separation(d1_sin, d1_cos, d2_sin, d2_cos, delta_lon) * RAD_TO_DEG
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl SeparationMetric for Haversine {
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64 {
        let delta_lon = Angle::from_degrees(target.ra_deg - center.ra_deg).radians();
        haversine_angular_separation(
            center.dec().radians(),
            target.dec().radians(),
            delta_lon,
        ) * RAD_TO_DEG
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatSky;

impl SeparationMetric for FlatSky {
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64 {
        let d_dec = target.dec_deg - center.dec_deg;
        let d_ra = Angle::from_degrees(target.ra_deg - center.ra_deg)
            .wrapped_signed()
            .degrees();
        let projected = target.dec().cos() * d_ra;
        libm::sqrt(d_dec * d_dec + projected * projected)
    }
}

/// Selects one of the built-in metrics by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeparationMethod {
    #[default]
    Vincenty,
    Haversine,
    FlatSky,
}

impl SeparationMethod {
    pub const ALL: [SeparationMethod; 3] = [
        SeparationMethod::Vincenty,
        SeparationMethod::Haversine,
        SeparationMethod::FlatSky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SeparationMethod::Vincenty => "vincenty",
            SeparationMethod::Haversine => "haversine",
            SeparationMethod::FlatSky => "flat-sky",
        }
    }
}

impl SeparationMetric for SeparationMethod {
    fn separation_deg(&self, center: &SkyPosition, target: &SkyPosition) -> f64 {
        match self {
            SeparationMethod::Vincenty => Vincenty.separation_deg(center, target),
            SeparationMethod::Haversine => Haversine.separation_deg(center, target),
            SeparationMethod::FlatSky => FlatSky.separation_deg(center, target),
        }
    }
}

impl fmt::Display for SeparationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeparationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown separation method '{}' (expected vincenty, haversine or flat-sky)",
                    s
                )
            })
    }
}

/// Great-circle separation in degrees between `(ra0, dec0)` and `(ra1, dec1)`,
/// all in degrees.
///
/// The result lies in `[0, 180]` for finite input; NaN input yields NaN.
///
/// ```
/// use instcat_core::angular_separation;
///
/// assert!((angular_separation(0.0, 90.0, 123.0, 0.0) - 90.0).abs() < 1e-10);
/// ```
#[inline]
pub fn angular_separation(ra0: f64, dec0: f64, ra1: f64, dec1: f64) -> f64 {
    Vincenty.separation_deg(&SkyPosition::new(ra0, dec0), &SkyPosition::new(ra1, dec1))
}
