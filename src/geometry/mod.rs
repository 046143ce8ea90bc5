pub mod intersect;
pub mod parametric;
pub mod ray;

use serde::{Deserialize, Serialize};
use std::ops::Sub;

use crate::error::GeometryError;

/// Angles closer than this (in degrees) to an axis are treated as lying on it.
pub const ANGLE_EPSILON: f64 = 1e-9;

/// A point in the plane. Produced by the geometry functions, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector from the origin.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An origin-centered ellipse with horizontal radius `a`, vertical radius `b`,
/// rotated counter-clockwise by `rotation` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    a: f64,
    b: f64,
    rotation: f64,
}

impl Ellipse {
    /// Build a validated ellipse. `a` and `b` must be positive and finite.
    pub fn new(a: f64, b: f64, rotation: f64) -> Result<Self, GeometryError> {
        let valid_axis = |v: f64| v.is_finite() && v > 0.0;
        if !valid_axis(a) || !valid_axis(b) || !rotation.is_finite() {
            return Err(GeometryError::InvalidEllipse { a, b, rotation });
        }
        Ok(Self { a, b, rotation })
    }

    /// Un-rotated ellipse, as used for the outer curve.
    pub fn axis_aligned(a: f64, b: f64) -> Result<Self, GeometryError> {
        Self::new(a, b, 0.0)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Same radii with the rotation dropped.
    pub fn unrotated(&self) -> Self {
        Self {
            rotation: 0.0,
            ..*self
        }
    }

    /// Left-hand side of the implicit equation; 1.0 on the boundary.
    pub fn implicit(&self, p: Point2D) -> f64 {
        let (sin_r, cos_r) = self.rotation.to_radians().sin_cos();
        let u = (p.x * cos_r + p.y * sin_r) / self.a;
        let v = (-p.x * sin_r + p.y * cos_r) / self.b;
        u * u + v * v
    }
}

/// Map any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(t: f64) -> f64 {
    let n = t.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

fn near(t: f64, target: f64) -> bool {
    (normalize_degrees(t) - target).abs() < ANGLE_EPSILON
}

/// True for rays pointing straight up or down (90° or 270°).
pub fn is_vertical(t: f64) -> bool {
    near(t, 90.0) || near(t, 270.0)
}

/// True for rays along the x axis (0° or 180°).
pub fn is_horizontal(t: f64) -> bool {
    near(t, 0.0) || near(t, 180.0) || near(t, 360.0)
}

/// True when the ray at `t` points into the left half-plane, i.e. `90 < t < 270`.
pub fn is_left_half(t: f64) -> bool {
    let n = normalize_degrees(t);
    n > 90.0 + ANGLE_EPSILON && n < 270.0 - ANGLE_EPSILON
}

/// Angles `0, step, 2*step, ...` strictly below 360, each computed as `i * step`
/// so rounding does not accumulate over the turn.
pub fn full_turn(step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && step.is_finite() {
        (360.0 / step - ANGLE_EPSILON).ceil().max(0.0) as usize
    } else {
        0
    };
    (0..count).map(move |i| i as f64 * step)
}
