pub const PI: f64 = std::f64::consts::PI;

pub const TWOPI: f64 = 2.0 * PI;

pub const HALF_PI: f64 = 0.5 * PI;

pub const DEG_TO_RAD: f64 = PI / 180.0;

pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Degrees per hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const ARCSEC_PER_DEGREE: f64 = 3600.0;
