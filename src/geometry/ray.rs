//! Rays through the origin, described only by their angle in degrees.

use super::is_horizontal;
use crate::error::GeometryError;

/// Slope of the ray at angle `t` (degrees).
#[inline]
pub fn slope(t: f64) -> f64 {
    t.to_radians().tan()
}

/// y-coordinate of the point on the ray at angle `t` with the given `x`.
///
/// Total: at 90°/270° the slope is huge but finite, so this degrades rather than fails.
/// Vertical rays should be solved through [`x_at`] instead.
#[inline]
pub fn y_at(x: f64, t: f64) -> f64 {
    slope(t) * x
}

/// x-coordinate of the point on the ray at angle `t` with the given `y`.
///
/// A horizontal ray (0°/180°) has no unique x for any y.
pub fn x_at(y: f64, t: f64) -> Result<f64, GeometryError> {
    if is_horizontal(t) {
        return Err(GeometryError::HorizontalRay { angle: t, y });
    }
    Ok(y / slope(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_at_diagonal() {
        assert!((y_at(3.0, 45.0) - 3.0).abs() < 1e-12);
        assert!((y_at(3.0, 135.0) + 3.0).abs() < 1e-12);
        assert_eq!(y_at(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_x_at_inverts_y_at() {
        for t in [10.0, 45.0, 89.0, 91.0, 200.0, 300.0] {
            let y = y_at(2.5, t);
            let x = x_at(y, t).unwrap();
            assert!((x - 2.5).abs() < 1e-9, "t={}: {} vs 2.5", t, x);
        }
    }

    #[test]
    fn test_x_at_vertical_is_near_zero() {
        let x = x_at(6.0, 90.0).unwrap();
        assert!(x.abs() < 1e-12);
    }

    #[test]
    fn test_x_at_horizontal_errors() {
        assert!(matches!(
            x_at(1.0, 0.0),
            Err(GeometryError::HorizontalRay { .. })
        ));
        assert!(matches!(
            x_at(0.0, 180.0),
            Err(GeometryError::HorizontalRay { .. })
        ));
    }
}
