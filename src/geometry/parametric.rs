//! Boundary points of an ellipse from a parametric angle.

use super::{full_turn, Ellipse, Point2D};

/// Boundary point at parametric angle `t` (degrees), with the ellipse's rotation applied.
pub fn point(t: f64, ellipse: &Ellipse) -> Point2D {
    let (sin_t, cos_t) = t.to_radians().sin_cos();
    let (sin_r, cos_r) = ellipse.rotation().to_radians().sin_cos();
    let (a, b) = (ellipse.a(), ellipse.b());
    Point2D::new(
        a * cos_t * cos_r - b * sin_t * sin_r,
        a * cos_t * sin_r + b * sin_t * cos_r,
    )
}

/// Ordered boundary over `t ∈ [0, 360)` at a fixed step.
pub fn boundary(ellipse: &Ellipse, step: f64) -> Vec<Point2D> {
    full_turn(step).map(|t| point(t, ellipse)).collect()
}

/// Weierstrass-substitution point of the un-rotated ellipse: `u = tan(t/2)`.
///
/// Never reaches `(-a, 0)`; it is only approached as `|u|` grows.
pub fn rational_point(u: f64, ellipse: &Ellipse) -> Point2D {
    let u2 = u * u;
    Point2D::new(
        ellipse.a() * (1.0 - u2) / (u2 + 1.0),
        2.0 * ellipse.b() * u / (u2 + 1.0),
    )
}

/// Rational boundary sampled over `u ∈ [-limit, limit)`.
pub fn rational_boundary(ellipse: &Ellipse, limit: f64, step: f64) -> Vec<Point2D> {
    if !(step > 0.0) || !(limit > 0.0) {
        return Vec::new();
    }
    let count = (2.0 * limit / step).ceil() as usize;
    (0..count)
        .map(|i| -limit + i as f64 * step)
        .filter(|&u| u < limit)
        .map(|u| rational_point(u, ellipse))
        .collect()
}
