//! Spherical trigonometry kernels.
//!
//! Both functions take a longitude difference in radians and return the
//! central angle in radians.

/// Vincenty's formula for the central angle between two points.
///
/// Well conditioned at every separation, including coincident and antipodal
/// points. The result lies in `[0, π]`.
#[inline]
pub fn vincenty_angular_separation(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    delta_lon: f64,
) -> f64 {
    let (sin_delta_lon, cos_delta_lon) = libm::sincos(delta_lon);

    let num = libm::sqrt(
        (cos_lat2 * sin_delta_lon).powi(2)
            + (cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_delta_lon).powi(2),
    );
    let den = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_delta_lon;

    libm::atan2(num, den)
}

/// Haversine formula for the central angle between two points.
///
/// Takes the latitudes in radians rather than as sine/cosine pairs because the
/// half-angle of their difference is what keeps small separations precise.
/// Near antipodal points rounding can push the haversine slightly above one,
/// so it is clamped before `asin`.
#[inline]
pub fn haversine_angular_separation(lat1: f64, lat2: f64, delta_lon: f64) -> f64 {
    let sin_half_dlat = libm::sin(0.5 * (lat2 - lat1));
    let sin_half_dlon = libm::sin(0.5 * delta_lon);

    let h = sin_half_dlat * sin_half_dlat
        + libm::cos(lat1) * libm::cos(lat2) * sin_half_dlon * sin_half_dlon;
    2.0 * libm::asin(libm::sqrt(h.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn pair(lat: f64) -> (f64, f64) {
        libm::sincos(lat)
    }

    #[test]
    fn test_vincenty_same_point() {
        let (s, c) = pair(0.3);
        assert_eq!(vincenty_angular_separation(s, c, s, c, 0.0), 0.0);
    }

    #[test]
    fn test_vincenty_antipodes() {
        let (s, c) = pair(0.0);
        assert_abs_diff_eq!(vincenty_angular_separation(s, c, s, c, PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_haversine_matches_vincenty() {
        let cases = [
            (0.1, -0.4, 1.2),
            (-1.2, 1.1, -2.9),
            (FRAC_PI_2, 0.0, 0.7),
            (0.5, 0.5 + 1e-7, 1e-7),
            (0.0, 0.0, PI),
        ];
        for (lat1, lat2, dlon) in cases {
            let (s1, c1) = pair(lat1);
            let (s2, c2) = pair(lat2);
            let v = vincenty_angular_separation(s1, c1, s2, c2, dlon);
            let h = haversine_angular_separation(lat1, lat2, dlon);
            assert_abs_diff_eq!(v, h, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_haversine_pole_to_pole() {
        assert_abs_diff_eq!(
            haversine_angular_separation(FRAC_PI_2, -FRAC_PI_2, 0.0),
            PI,
            epsilon = 1e-9
        );
    }
}
