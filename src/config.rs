use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::cli::Args;
use crate::error::{ConfigError, GeometryError};
use crate::field::DistanceField;
use crate::geometry::Ellipse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub outer: OuterConfig,
    pub inner: InnerConfig,
    pub sweep: SweepConfig,
    pub preview: PreviewConfig,
}

/// The un-rotated outside ellipse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OuterConfig {
    pub a: f64, // horizontal radius
    pub b: f64, // vertical radius
}

impl Default for OuterConfig {
    fn default() -> Self {
        Self { a: 6.5, b: 6.0 }
    }
}

/// The rotated inside ellipse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnerConfig {
    pub a: f64,
    pub b: f64,
    /// Rotation in degrees, counter-clockwise
    pub rotation: f64,
}

impl Default for InnerConfig {
    fn default() -> Self {
        Self {
            a: 6.0,
            b: 5.0,
            rotation: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Angle of the single highlighted ray, in degrees
    pub line_angle: f64,
    /// Ray angle increment of the distance sweep, in degrees
    pub angle_step: f64,
    /// Parametric angle increment for the boundary outlines, in degrees
    pub boundary_step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            line_angle: 20.0,
            angle_step: 0.1,
            boundary_step: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Panel width in character cells
    pub width: usize,
    /// Panel height in character cells
    pub height: usize,
    /// Also draw the inner ellipse before rotation
    pub show_unrotated: bool,
    /// Rational parameter range `[-limit, limit)` for the unrotated outline
    pub rational_limit: f64,
    pub rational_step: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            show_unrotated: true,
            rational_limit: 1000.0,
            rational_step: 0.1,
        }
    }
}

/// Non-fatal pre-flight findings about a configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A quarter-turn rotation with the inner horizontal radius equal to the outer
    /// vertical radius lines the two boundaries up on the vertical axis.
    AlignedRadii { inner_a: f64, outer_b: f64 },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::AlignedRadii { inner_a, outer_b } => write!(
                f,
                "inner ellipse rotated 90° with a={} equal to outer b={}: \
                 vertical crossings coincide and may yield undefined distances",
                inner_a, outer_b
            ),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/ellidist/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ellidist").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("{:#}; using defaults", e);
                    None
                }
            }
        } else {
            None
        }
    }

    /// Explicit path, then the default path, then built-in defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::load_from_default_path().unwrap_or_default()),
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_template(&path)?;
        Ok(path)
    }

    /// Write the commented template to `path`, creating parent directories
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::generate_config_template())
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# ellidist configuration
# Radii are in arbitrary length units, angles in degrees.

[outer]
# Horizontal radius of the outside (un-rotated) ellipse
a = 6.5
# Vertical radius
b = 6.0

[inner]
# Horizontal radius of the inside ellipse before rotation
a = 6.0
# Vertical radius before rotation
b = 5.0
# Counter-clockwise rotation of the inside ellipse
rotation = 20.0

[sweep]
# Ray whose two crossing points are reported on their own
line_angle = 20.0
# Increment of the distance sweep over [0, 360)
angle_step = 0.1
# Increment used to sample the ellipse outlines
boundary_step = 0.01

[preview]
# Size of each preview panel in character cells
width = 60
height = 20
# Draw the inside ellipse before rotation (rational parametrization)
show_unrotated = true
# Rational parameter range [-limit, limit) and step
rational_limit = 1000.0
rational_step = 0.1
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &Args) {
        if let Some(a) = args.outer_a {
            self.outer.a = a;
        }
        if let Some(b) = args.outer_b {
            self.outer.b = b;
        }
        if let Some(a) = args.inner_a {
            self.inner.a = a;
        }
        if let Some(b) = args.inner_b {
            self.inner.b = b;
        }
        if let Some(rotation) = args.rotation {
            self.inner.rotation = rotation;
        }
        if let Some(angle) = args.line_angle {
            self.sweep.line_angle = angle;
        }
        if let Some(step) = args.step {
            self.sweep.angle_step = step;
        }
    }

    /// Reject configurations no computation can run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |section, field, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::NonPositive {
                    section,
                    field,
                    value,
                })
            }
        };
        positive("outer", "a", self.outer.a)?;
        positive("outer", "b", self.outer.b)?;
        positive("inner", "a", self.inner.a)?;
        positive("inner", "b", self.inner.b)?;
        positive("preview", "rational_step", self.preview.rational_step)?;

        for (field, value) in [
            ("inner.rotation", self.inner.rotation),
            ("sweep.line_angle", self.sweep.line_angle),
            ("preview.rational_limit", self.preview.rational_limit),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        for (field, value) in [
            ("sweep.angle_step", self.sweep.angle_step),
            ("sweep.boundary_step", self.sweep.boundary_step),
        ] {
            if !(value > 0.0 && value <= 360.0) {
                return Err(ConfigError::StepOutOfRange { field, value });
            }
        }

        if self.preview.width == 0 || self.preview.height == 0 {
            return Err(ConfigError::EmptyPreview {
                width: self.preview.width,
                height: self.preview.height,
            });
        }
        Ok(())
    }

    /// Known-degenerate parameter combinations. Never blocks a run.
    pub fn preflight(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.inner.rotation == 90.0 && self.inner.a == self.outer.b {
            warnings.push(ConfigWarning::AlignedRadii {
                inner_a: self.inner.a,
                outer_b: self.outer.b,
            });
        }
        warnings
    }

    pub fn outer_ellipse(&self) -> Result<Ellipse, GeometryError> {
        Ellipse::axis_aligned(self.outer.a, self.outer.b)
    }

    pub fn inner_ellipse(&self) -> Result<Ellipse, GeometryError> {
        Ellipse::new(self.inner.a, self.inner.b, self.inner.rotation)
    }

    pub fn distance_field(&self) -> Result<DistanceField, GeometryError> {
        Ok(DistanceField::new(self.outer_ellipse()?, self.inner_ellipse()?))
    }
}
