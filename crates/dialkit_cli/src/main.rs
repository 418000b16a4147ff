//! dialkit CLI
//!
//! Generate the app's icon assets: the procedural launcher set, the
//! SVG-derived conversion set, or a custom TOML manifest.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dialkit_pipeline::{
    conversion_assets, launcher_assets, run_export, AssetEntry, ExportManifest, ExportSummary,
};

#[derive(Parser)]
#[command(name = "dialkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "App icon asset generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the procedural launcher icon set (mipmap sizes + store image)
    Clock {
        /// Root output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,
    },

    /// Rasterize a vector document into the conversion icon set
    Convert {
        /// Path to the SVG source document
        source: PathBuf,

        /// Root output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,
    },

    /// Run a TOML export manifest
    Run {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Root output directory
        #[arg(short, long, default_value = "./icons")]
        output: PathBuf,

        /// SVG source document for vector entries
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Clock { output } => cmd_export(&output, &launcher_assets(), None),

        Commands::Convert { source, output } => {
            cmd_export(&output, &conversion_assets(), Some(&source))
        }

        Commands::Run {
            manifest,
            output,
            svg,
        } => cmd_run_manifest(&manifest, &output, svg.as_deref()),
    }
}

fn cmd_export(output: &Path, entries: &[AssetEntry], svg: Option<&Path>) -> Result<()> {
    info!(
        "exporting {} assets to {}",
        entries.len(),
        output.display()
    );
    let summary = run_export(output, entries, svg)?;
    report(&summary)
}

fn cmd_run_manifest(manifest: &Path, output: &Path, svg: Option<&Path>) -> Result<()> {
    let manifest = ExportManifest::load(manifest)?;
    if manifest.is_empty() {
        anyhow::bail!("manifest declares no assets");
    }
    let entries = manifest.into_entries();
    cmd_export(output, &entries, svg)
}

fn report(summary: &ExportSummary) -> Result<()> {
    info!(
        "{} of {} assets written",
        summary.written(),
        summary.attempted()
    );
    if !summary.all_ok() {
        anyhow::bail!("{} of {} assets failed", summary.failed(), summary.attempted());
    }
    Ok(())
}
