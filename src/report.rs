//! Everything a renderer needs, computed in one pass from a [`Config`].

use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::GeometryError;
use crate::field::{DistanceField, Sweep};
use crate::geometry::{is_vertical, parametric, ray, Point2D};

/// Crossing points of the highlighted ray with both ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineCrossings {
    pub angle: f64,
    pub outer: Point2D,
    pub inner: Point2D,
}

/// Row of the serialized sweep; undefined samples carry the error text instead of a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub angle: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub config: Config,
    pub field: DistanceField,
    pub line: Vec<Point2D>,
    pub crossings: Result<LineCrossings, GeometryError>,
    pub outer_boundary: Vec<Point2D>,
    pub inner_boundary: Vec<Point2D>,
    pub unrotated_inner: Vec<Point2D>,
    pub sweep: Sweep,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    undefined_samples: usize,
    config: &'a Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    crossings: Option<LineCrossings>,
    line: &'a [Point2D],
    outer_boundary: &'a [Point2D],
    inner_boundary: &'a [Point2D],
    #[serde(skip_serializing_if = "no_points")]
    unrotated_inner: &'a [Point2D],
    samples: Vec<SampleRow>,
}

fn no_points(points: &&[Point2D]) -> bool {
    points.is_empty()
}

impl Report {
    /// Compute every data product. Geometry failures on single angles end up inside
    /// the report; only an unusable ellipse aborts.
    pub fn build(config: &Config) -> Result<Self, GeometryError> {
        let field = config.distance_field()?;
        let line_angle = config.sweep.line_angle;

        let crossings = field
            .crossings(line_angle)
            .map(|(outer, inner)| LineCrossings {
                angle: line_angle,
                outer,
                inner,
            });
        match &crossings {
            Ok(c) => info!(
                "Crossings at {}°: outer ({:.6}, {:.6}), inner ({:.6}, {:.6})",
                line_angle, c.outer.x, c.outer.y, c.inner.x, c.inner.y
            ),
            Err(e) => warn!("No crossings at {}°: {}", line_angle, e),
        }

        let step = config.sweep.boundary_step;
        let outer_boundary = parametric::boundary(field.outer(), step);
        let inner_boundary = parametric::boundary(field.inner(), step);
        let unrotated_inner = if config.preview.show_unrotated {
            parametric::rational_boundary(
                field.inner(),
                config.preview.rational_limit,
                config.preview.rational_step,
            )
        } else {
            Vec::new()
        };

        let sweep = field.sweep(config.sweep.angle_step);
        let undefined = sweep.undefined_count();
        if undefined > 0 {
            warn!(
                "{} of {} samples have no defined distance",
                undefined,
                sweep.len()
            );
        } else {
            info!("Swept {} samples", sweep.len());
        }

        Ok(Self {
            config: config.clone(),
            line: reference_line(config.outer.a, config.outer.b, line_angle),
            field,
            crossings,
            outer_boundary,
            inner_boundary,
            unrotated_inner,
            sweep,
        })
    }

    pub fn sample_rows(&self) -> Vec<SampleRow> {
        self.sweep
            .samples
            .iter()
            .map(|s| SampleRow {
                angle: s.angle,
                distance: s.value(),
                error: s.distance.err().map(|e| e.to_string()),
            })
            .collect()
    }

    /// Crossing points and sweep statistics, one item per line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        match &self.crossings {
            Ok(c) => {
                let _ = writeln!(out, "line angle: {}°", c.angle);
                let _ = writeln!(out, "outer: {:.6},{:.6}", c.outer.x, c.outer.y);
                let _ = writeln!(out, "inner: {:.6},{:.6}", c.inner.x, c.inner.y);
            }
            Err(e) => {
                let _ = writeln!(out, "line angle: {}", e);
            }
        }
        let _ = writeln!(out, "samples: {}", self.sweep.len());
        let _ = writeln!(out, "undefined: {}", self.sweep.undefined_count());
        if let Some((angle, d)) = self.sweep.min() {
            let _ = writeln!(out, "min: {:.6} at {:.1}°", d, angle);
        }
        if let Some((angle, d)) = self.sweep.max() {
            let _ = writeln!(out, "max: {:.6} at {:.1}°", d, angle);
        }
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("angle,distance,error\n");
        for row in self.sample_rows() {
            let distance = row.distance.map(|d| d.to_string()).unwrap_or_default();
            let error = row
                .error
                .map(|e| format!("\"{}\"", e.replace('"', "\"\"")))
                .unwrap_or_default();
            let _ = writeln!(out, "{},{},{}", tidy_angle(row.angle), distance, error);
        }
        out
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        let document = ReportDocument {
            undefined_samples: self.sweep.undefined_count(),
            config: &self.config,
            crossings: self.crossings.ok(),
            line: &self.line,
            outer_boundary: &self.outer_boundary,
            inner_boundary: &self.inner_boundary,
            unrotated_inner: &self.unrotated_inner,
            samples: self.sample_rows(),
        };
        toml::to_string(&document)
    }
}

/// Drop the `0.30000000000000004` noise of `i * step` angles.
fn tidy_angle(angle: f64) -> f64 {
    (angle * 1e9).round() / 1e9
}

/// Points of the line through the origin at `angle`, for `x` in unit steps over
/// `[-a, a]`. A vertical line is a single segment spanning the outer height.
pub fn reference_line(a: f64, b: f64, angle: f64) -> Vec<Point2D> {
    if is_vertical(angle) {
        return vec![Point2D::new(0.0, -(b + 1.0)), Point2D::new(0.0, b + 1.0)];
    }
    let count = (2.0 * a).floor() as usize + 1;
    (0..count)
        .map(|i| -a + i as f64)
        .map(|x| Point2D::new(x, ray::y_at(x, angle)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.sweep.angle_step = 10.0;
        config.sweep.boundary_step = 30.0;
        config.preview.rational_limit = 2.0;
        config.preview.rational_step = 1.0;
        config
    }

    #[test]
    fn test_build_products() {
        let report = Report::build(&small_config()).unwrap();
        assert_eq!(report.sweep.len(), 36);
        assert_eq!(report.outer_boundary.len(), 12);
        assert_eq!(report.inner_boundary.len(), 12);
        assert_eq!(report.unrotated_inner.len(), 4);
        assert_eq!(report.line.len(), 14);
        assert!(report.crossings.is_ok());
    }

    #[test]
    fn test_unrotated_outline_is_optional() {
        let mut config = small_config();
        config.preview.show_unrotated = false;
        let report = Report::build(&config).unwrap();
        assert!(report.unrotated_inner.is_empty());
    }

    #[test]
    fn test_build_rejects_invalid_ellipse() {
        let mut config = small_config();
        config.inner.b = -1.0;
        assert!(matches!(
            Report::build(&config),
            Err(GeometryError::InvalidEllipse { .. })
        ));
    }

    #[test]
    fn test_csv_rows() {
        let report = Report::build(&small_config()).unwrap();
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "angle,distance,error");
        assert_eq!(lines.len(), 37);
        assert!(lines[1].starts_with("0,"));
        assert!(lines[1].ends_with(','));
    }

    #[test]
    fn test_toml_document() {
        let report = Report::build(&small_config()).unwrap();
        let text = report.to_toml().unwrap();
        let value: toml::Value = toml::from_str(&text).unwrap();
        assert_eq!(value["samples"].as_array().unwrap().len(), 36);
        assert_eq!(value["undefined_samples"].as_integer(), Some(0));
        assert!(value["crossings"]["outer"]["x"].as_float().is_some());
        assert_eq!(value["config"]["inner"]["rotation"].as_float(), Some(20.0));
    }

    #[test]
    fn test_summary_mentions_crossings() {
        let report = Report::build(&small_config()).unwrap();
        let summary = report.summary();
        assert!(summary.contains("line angle: 20°"));
        assert!(summary.contains("outer: "));
        assert!(summary.contains("undefined: 0"));
    }

    #[test]
    fn test_reference_line() {
        let line = reference_line(6.5, 6.0, 45.0);
        assert_eq!(line.len(), 14);
        assert_eq!(line[0], Point2D::new(-6.5, ray::y_at(-6.5, 45.0)));
        let vertical = reference_line(6.5, 6.0, 90.0);
        assert_eq!(vertical, vec![Point2D::new(0.0, -7.0), Point2D::new(0.0, 7.0)]);
    }
}
