//! Signed distance between two concentric ellipses, one of them rotated.
//!
//! Rays from the origin are intersected with an axis-aligned outer ellipse and a rotated
//! inner ellipse; the gap between the two crossing points, signed by the x-component of
//! their difference, is sampled over a full turn.

pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod preview;
pub mod report;

pub use config::{Config, ConfigWarning};
pub use error::{ConfigError, GeometryError};
pub use field::{DistanceField, DistanceSample, Sweep};
pub use geometry::{Ellipse, Point2D};
pub use report::Report;
