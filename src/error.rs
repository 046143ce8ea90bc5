use thiserror::Error;

/// Domain errors raised by single ray/ellipse computations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// Semi-axes must be positive and finite, rotation finite
    #[error("invalid ellipse: a={a}, b={b}, rotation={rotation}")]
    InvalidEllipse { a: f64, b: f64, rotation: f64 },

    /// The intersection quadratic has no usable leading coefficient or root
    #[error("degenerate intersection at {angle}° (a={a}, b={b}, rotation={rotation}°)")]
    DegenerateIntersection {
        angle: f64,
        a: f64,
        b: f64,
        rotation: f64,
    },

    /// The x-component of the outer/inner difference is zero while the points differ
    #[error("undefined sign at {angle}°: dx is zero, dy={dy}")]
    UndefinedSign { angle: f64, dy: f64 },

    /// A horizontal ray has no unique x for a given y
    #[error("horizontal ray at {angle}° has no unique x for y={y}")]
    HorizontalRay { angle: f64, y: f64 },
}

/// Hard configuration errors, rejected before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{section}.{field} must be positive and finite, got {value}")]
    NonPositive {
        section: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be in (0, 360], got {value}")]
    StepOutOfRange { field: &'static str, value: f64 },

    #[error("preview size must be non-zero, got {width}x{height}")]
    EmptyPreview { width: usize, height: usize },
}
