//! Angle wrapping.
//!
//! | Function | Unit | Range |
//! |----------|------|-------|
//! | [`wrap_0_2pi`] | radians | [0, 2π) |
//! | [`wrap_pm_pi`] | radians | [-π, π) |
//!
//! `%` in Rust is a remainder, so negative inputs are shifted back into range
//! after `libm::fmod`.

use crate::constants::{PI, TWOPI};

#[inline]
fn wrap_positive(x: f64, period: f64) -> f64 {
    let w = libm::fmod(x, period);
    let w = if w < 0.0 { w + period } else { w };
    // -tiny + period rounds to period
    if w >= period {
        0.0
    } else {
        w
    }
}

#[inline]
pub fn wrap_0_2pi(rad: f64) -> f64 {
    wrap_positive(rad, TWOPI)
}

#[inline]
pub fn wrap_pm_pi(rad: f64) -> f64 {
    wrap_positive(rad + PI, TWOPI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(0.0), 0.0);
        assert_eq!(wrap_0_2pi(TWOPI), 0.0);
        assert_abs_diff_eq!(wrap_0_2pi(-0.5), TWOPI - 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_0_2pi(2.0 * TWOPI + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_pm_pi_edges() {
        assert_eq!(wrap_pm_pi(PI), -PI);
        assert_abs_diff_eq!(wrap_pm_pi(TWOPI - 0.1), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_tiny_negative() {
        let w = wrap_0_2pi(-1e-20);
        assert!((0.0..TWOPI).contains(&w));
    }

    #[test]
    fn test_wrap_pm_pi_range() {
        for i in -20..20 {
            let w = wrap_pm_pi(i as f64 * 0.7);
            assert!((-PI..PI).contains(&w), "{} out of range", w);
        }
    }
}
