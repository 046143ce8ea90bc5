//! Where a ray from the origin crosses an origin-centered, possibly rotated ellipse.
//!
//! Substituting `y = m·x` into the rotated implicit form
//! `b²(x cos r + y sin r)² + a²(−x sin r + y cos r)² = a²b²` leaves a quadratic in `x`
//! with no linear term, because the line passes through the center. Its positive root
//! is `|x|`; the quadrant of the ray fixes the sign. Vertical rays have no finite slope,
//! so they are solved as a quadratic in `y` on the line `x = 0`.

use super::{is_left_half, is_vertical, normalize_degrees, ray, Ellipse, Point2D};
use crate::error::GeometryError;

/// Positive root of `A·v² + B·v + C = 0`, or `None` when it is not a finite number.
pub fn positive_root(a: f64, b: f64, c: f64) -> Option<f64> {
    if !(a.is_finite() && a > 0.0) {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if !(discriminant >= 0.0) {
        return None;
    }
    let root = (-b + discriminant.sqrt()) / (2.0 * a);
    root.is_finite().then_some(root)
}

/// Intersection of the ray at angle `t` (degrees) with `ellipse`.
///
/// The returned point lies on the ray itself, not on its extension through the origin.
pub fn intersect(t: f64, ellipse: &Ellipse) -> Result<Point2D, GeometryError> {
    if is_vertical(t) {
        return intersect_vertical(t, ellipse);
    }

    let m = ray::slope(t);
    let (sin_r, cos_r) = ellipse.rotation().to_radians().sin_cos();
    let (a2, b2) = (ellipse.a().powi(2), ellipse.b().powi(2));

    let qa = b2 * (cos_r.powi(2) + 2.0 * m * cos_r * sin_r + m.powi(2) * sin_r.powi(2))
        + a2 * (m.powi(2) * cos_r.powi(2) - 2.0 * m * cos_r * sin_r + sin_r.powi(2));
    let qc = -a2 * b2;

    let mut x = positive_root(qa, 0.0, qc).ok_or_else(|| degenerate(t, ellipse))?;
    if is_left_half(t) {
        x = -x;
    }

    let y = ray::y_at(x, t);
    if !y.is_finite() {
        return Err(degenerate(t, ellipse));
    }
    Ok(Point2D::new(x, y))
}

/// Vertical ray: solve for `y` on `x = x0` with `x0 = 0`, then recover `x` from the ray.
fn intersect_vertical(t: f64, ellipse: &Ellipse) -> Result<Point2D, GeometryError> {
    let x0 = 0.0_f64;
    let (sin_r, cos_r) = ellipse.rotation().to_radians().sin_cos();
    let (a2, b2) = (ellipse.a().powi(2), ellipse.b().powi(2));

    let qa = b2 * sin_r.powi(2) + a2 * cos_r.powi(2);
    let qb = 2.0 * x0 * cos_r * sin_r * (b2 - a2);
    let qc = x0.powi(2) * (b2 * cos_r.powi(2) + a2 * sin_r.powi(2)) - a2 * b2;

    let mut y = positive_root(qa, qb, qc).ok_or_else(|| degenerate(t, ellipse))?;
    if normalize_degrees(t) > 180.0 {
        y = -y;
    }
    let x = ray::x_at(y, t)?;
    Ok(Point2D::new(x, y))
}

/// Closed-form `x` for an un-rotated ellipse: `sqrt(a²b² / (b² + a²tan²t))`, signed by quadrant.
///
/// Only meaningful away from vertical rays, where `tan t` blows up.
pub fn closed_form_x(t: f64, a: f64, b: f64) -> f64 {
    let m = ray::slope(t);
    let x = (a * a * b * b / (b * b + a * a * m * m)).sqrt();
    if is_left_half(t) {
        -x
    } else {
        x
    }
}

fn degenerate(t: f64, ellipse: &Ellipse) -> GeometryError {
    GeometryError::DegenerateIntersection {
        angle: t,
        a: ellipse.a(),
        b: ellipse.b(),
        rotation: ellipse.rotation(),
    }
}
