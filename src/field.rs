//! Signed distance between the outer and inner ellipse along rays from the origin.
//!
//! The magnitude is the gap between the two crossing points on the same ray. The sign
//! comes from the x-component of `outer - inner`, a heuristic that is only locally
//! consistent and is undefined when that component is zero.

use tracing::debug;

use crate::error::GeometryError;
use crate::geometry::{full_turn, intersect::intersect, Ellipse, Point2D};

/// One entry of a sweep. `distance` keeps the domain error for angles where the
/// distance could not be computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    pub angle: f64,
    pub distance: Result<f64, GeometryError>,
}

impl DistanceSample {
    pub fn value(&self) -> Option<f64> {
        self.distance.ok()
    }

    pub fn is_defined(&self) -> bool {
        self.distance.is_ok()
    }
}

/// Reduce two crossing points on the ray at `angle` to a signed distance.
///
/// Coincident points give exactly zero.
pub fn signed_distance(angle: f64, outer: Point2D, inner: Point2D) -> Result<f64, GeometryError> {
    let delta = outer - inner;
    if delta.x == 0.0 {
        if delta.y == 0.0 {
            return Ok(0.0);
        }
        return Err(GeometryError::UndefinedSign { angle, dy: delta.y });
    }
    Ok(delta.norm() * delta.x.signum())
}

/// The pair of concentric ellipses being compared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceField {
    outer: Ellipse,
    inner: Ellipse,
}

impl DistanceField {
    pub fn new(outer: Ellipse, inner: Ellipse) -> Self {
        Self { outer, inner }
    }

    pub fn outer(&self) -> &Ellipse {
        &self.outer
    }

    pub fn inner(&self) -> &Ellipse {
        &self.inner
    }

    /// Crossing points of the ray at `t` with the outer and inner ellipse.
    pub fn crossings(&self, t: f64) -> Result<(Point2D, Point2D), GeometryError> {
        Ok((intersect(t, &self.outer)?, intersect(t, &self.inner)?))
    }

    /// Signed distance along the ray at `t`.
    pub fn sample(&self, t: f64) -> Result<f64, GeometryError> {
        let (outer, inner) = self.crossings(t)?;
        signed_distance(t, outer, inner)
    }

    /// One sample per `step` degrees over `[0, 360)`, in angle order.
    ///
    /// Failing angles stay in the sweep with their error attached.
    pub fn sweep(&self, step: f64) -> Sweep {
        let samples = full_turn(step)
            .map(|angle| {
                let distance = self.sample(angle);
                if let Err(e) = &distance {
                    debug!("Sample at {:.3}° undefined: {}", angle, e);
                }
                DistanceSample { angle, distance }
            })
            .collect();
        Sweep { samples }
    }
}

/// An angle-ordered distance curve over one full turn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sweep {
    pub samples: Vec<DistanceSample>,
}

impl Sweep {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(angle, distance)` for every defined sample.
    pub fn defined(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.value().map(|d| (s.angle, d)))
    }

    /// Samples that carry a domain error.
    pub fn undefined(&self) -> impl Iterator<Item = (f64, GeometryError)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.distance.err().map(|e| (s.angle, e)))
    }

    pub fn undefined_count(&self) -> usize {
        self.undefined().count()
    }

    /// Smallest defined distance and its angle.
    pub fn min(&self) -> Option<(f64, f64)> {
        self.defined().min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Largest defined distance and its angle.
    pub fn max(&self) -> Option<(f64, f64)> {
        self.defined().max_by(|a, b| a.1.total_cmp(&b.1))
    }
}
