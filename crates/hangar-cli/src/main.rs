use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hangar_core::grid::GridUnit;
use hangar_section::report::{profile_summaries, SectionReport};
use hangar_section::{svg, SectionCache, SectionConfig, SectionConstants};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hangar")]
#[command(about = "Hangar cross-section geometry: wall insets, floor strips and SVG previews.")]
struct Cli {
    /// JSON file with `section` and `grid` settings; defaults are used for missing fields.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List roof profiles and variants.
    Profiles,
    /// Build one cross-section and print its report.
    Section {
        #[arg(long, default_value = "A")]
        profile: String,
        #[arg(long, default_value_t = 0)]
        variant: usize,
        #[arg(long)]
        total_width_mm: Option<f64>,
        #[arg(long)]
        meters: bool,
        #[arg(long)]
        report: Option<PathBuf>,
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    section: Option<SectionConfig>,
    grid: GridUnit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file_config = load_config(cli.config.as_deref())?;
    file_config.grid.validate().context("grid settings")?;

    match cli.cmd {
        Command::Profiles => profiles(file_config.section.unwrap_or_default()),
        Command::Section {
            profile,
            variant,
            total_width_mm,
            meters,
            report,
            svg,
        } => {
            let section_config = match (file_config.section, total_width_mm) {
                (_, Some(width)) => {
                    if !(width.is_finite() && width > 0.0) {
                        bail!("--total-width-mm must be a positive length, got {width}");
                    }
                    SectionConfig::with_constants(SectionConstants {
                        total_width_mm: width,
                        ..SectionConstants::default()
                    })
                }
                (Some(cfg), None) => cfg,
                (None, None) => SectionConfig::with_constants(SectionConstants {
                    total_width_mm: file_config.grid.cell_width_mm,
                    ..SectionConstants::default()
                }),
            };
            section(
                section_config,
                &profile,
                variant,
                meters,
                report.as_deref(),
                svg.as_deref(),
            )
        }
    }
}

fn profiles(config: SectionConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(&profile_summaries(&config)).context("serialize profiles")?;
    println!("{json}");
    Ok(())
}

fn section(
    config: SectionConfig,
    profile: &str,
    variant: usize,
    meters: bool,
    report: Option<&Path>,
    svg_out: Option<&Path>,
) -> Result<()> {
    let mut cache = SectionCache::new(config);
    let built = cache
        .section(profile, variant)
        .with_context(|| format!("build cross-section {profile}/{variant}"))?;
    tracing::info!(
        profile,
        variant,
        holes = built.hole_count(),
        width_mm = built.width,
        height_mm = built.height,
        "cross-section ready"
    );

    if let Some(path) = svg_out {
        write_output(path, &svg::document(&built)).with_context(|| format!("write svg: {path:?}"))?;
    }

    let section = if meters { built.to_meters() } else { (*built).clone() };
    let json = serde_json::to_string_pretty(&SectionReport::from_section(&section))
        .context("serialize report")?;

    if let Some(path) = report {
        write_output(path, &json).with_context(|| format!("write report: {path:?}"))?;
    } else {
        println!("{json}");
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("read config: {path:?}"))?;
    let cfg = serde_json::from_str(&text).with_context(|| format!("parse config: {path:?}"))?;
    tracing::debug!(?path, "loaded config");
    Ok(cfg)
}

fn write_output(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(path, data)?;
    Ok(())
}
