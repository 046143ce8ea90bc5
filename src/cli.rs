use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What gets written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Crossing points at the line angle and sweep statistics
    #[default]
    Summary,
    /// One `angle,distance,error` row per sweep sample
    Csv,
    /// The full report as TOML
    Toml,
    /// Braille drawing of the ellipses and the distance curve
    Preview,
}

#[derive(Parser, Debug, Default)]
#[command(name = "ellidist")]
#[command(
    author,
    version,
    about = "Signed distance between two concentric ellipses, one of them rotated"
)]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a commented config template to the default path and exit
    #[arg(long)]
    pub init_config: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Horizontal radius of the outer ellipse
    #[arg(long, allow_negative_numbers = true)]
    pub outer_a: Option<f64>,

    /// Vertical radius of the outer ellipse
    #[arg(long, allow_negative_numbers = true)]
    pub outer_b: Option<f64>,

    /// Horizontal radius of the inner ellipse
    #[arg(long, allow_negative_numbers = true)]
    pub inner_a: Option<f64>,

    /// Vertical radius of the inner ellipse
    #[arg(long, allow_negative_numbers = true)]
    pub inner_b: Option<f64>,

    /// Rotation of the inner ellipse in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub rotation: Option<f64>,

    /// Angle of the highlighted ray in degrees
    #[arg(short, long, allow_negative_numbers = true)]
    pub line_angle: Option<f64>,

    /// Sweep increment in degrees
    #[arg(short, long)]
    pub step: Option<f64>,
}
