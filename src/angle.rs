//! Angle utilities used by the line filter.
//!
//! Segments are classified by their inclination from the horizontal, folded
//! into `[0, π/2]` so that direction and sign of the slope do not matter.

use std::f64::consts::{FRAC_PI_2, PI};

/// Default width of the near-horizontal exclusion band (π/16 rad, 11.25°).
/// The near-vertical band is twice as wide.
pub const DEFAULT_EPSILON: f64 = PI / 16.0;

/// Inclination of the direction `(dx, dy)` from the horizontal, in `[0, π/2]`.
///
/// Returns `None` when `dx == 0`: the slope is undefined and the caller is
/// expected to drop the segment instead of dividing by zero.
#[inline]
pub fn inclination(dx: f64, dy: f64) -> Option<f64> {
    if dx == 0.0 {
        return None;
    }
    Some((dy / dx).abs().atan())
}

/// True when `theta` lies within `epsilon` of the horizontal.
#[inline]
pub fn is_near_horizontal(theta: f64, epsilon: f64) -> bool {
    theta <= epsilon
}

/// True when `theta` lies within `2 * epsilon` of the vertical.
#[inline]
pub fn is_near_vertical(theta: f64, epsilon: f64) -> bool {
    (theta - FRAC_PI_2).abs() <= 2.0 * epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn inclination_folds_slope_sign() {
        let up = inclination(1.0, 1.0).unwrap();
        let down = inclination(1.0, -1.0).unwrap();
        let back = inclination(-1.0, 1.0).unwrap();
        assert!(approx_eq(up, std::f64::consts::FRAC_PI_4));
        assert!(approx_eq(up, down));
        assert!(approx_eq(up, back));
    }

    #[test]
    fn inclination_undefined_for_vertical() {
        assert!(inclination(0.0, 5.0).is_none());
        assert!(inclination(0.0, 0.0).is_none());
    }

    #[test]
    fn bands_use_asymmetric_widths() {
        let eps = DEFAULT_EPSILON;
        assert!(is_near_horizontal(0.0, eps));
        assert!(is_near_horizontal(eps, eps));
        assert!(!is_near_horizontal(eps * 1.01, eps));

        assert!(is_near_vertical(FRAC_PI_2, eps));
        assert!(is_near_vertical(FRAC_PI_2 - 1.9 * eps, eps));
        assert!(!is_near_vertical(FRAC_PI_2 - 2.1 * eps, eps));
    }
}
