use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use ellidist::cli::{Args, OutputFormat};
use ellidist::{preview, Config, Report};

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ellidist=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        println!("Wrote config template to {}", path.display());
        return Ok(());
    }

    // Load or create config
    let mut config = Config::resolve(args.config.as_deref())?;
    config.merge_args(&args);
    config.validate().context("Invalid configuration")?;

    for warning in config.preflight() {
        warn!("{}", warning);
    }

    info!(
        "Outer {}x{}, inner {}x{} rotated {}°, step {}°",
        config.outer.a,
        config.outer.b,
        config.inner.a,
        config.inner.b,
        config.inner.rotation,
        config.sweep.angle_step
    );

    let report = Report::build(&config)?;

    match args.format {
        OutputFormat::Summary => print!("{}", report.summary()),
        OutputFormat::Csv => print!("{}", report.to_csv()),
        OutputFormat::Toml => print!("{}", report.to_toml()?),
        OutputFormat::Preview => print!("{}", preview::render(&report)),
    }

    Ok(())
}
