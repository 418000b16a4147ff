//! Batch asset export
//!
//! The export run is a data-driven loop over `AssetEntry` records. Each
//! entry is generated and written independently (continue-on-error); the
//! one exception is a missing vector source document, which aborts the
//! run before anything is written, since every vector entry would fail
//! identically.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{error, info};

use dialkit_raster::Canvas;

use crate::composer::compose_dial_icon;
use crate::error::PipelineError;
use crate::foreground::{build_foreground, SafeZone};

/// Transparent border reserved in adaptive-icon foregrounds (at 1024 px)
pub const ADAPTIVE_PADDING: u32 = 172;

/// Which generator produces an entry's pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetSource {
    /// Procedurally composed dial icon
    Procedural,
    /// Rasterized from the vector source document; with
    /// `foreground_padding` set, the result is rebuilt as an
    /// adaptive-icon foreground with that safe-zone border
    Vector { foreground_padding: Option<u32> },
}

/// One row of the export table
#[derive(Clone, Debug)]
pub struct AssetEntry {
    /// Logical target name, e.g. `mipmap-hdpi`
    pub name: String,
    /// Square pixel size
    pub size: u32,
    /// Output path relative to the export root
    pub path: PathBuf,
    pub source: AssetSource,
}

impl AssetEntry {
    pub fn procedural(name: &str, size: u32, path: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            path: PathBuf::from(path),
            source: AssetSource::Procedural,
        }
    }

    pub fn vector(name: &str, size: u32, path: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            path: PathBuf::from(path),
            source: AssetSource::Vector {
                foreground_padding: None,
            },
        }
    }

    pub fn adaptive_foreground(name: &str, size: u32, path: &str, padding: u32) -> Self {
        Self {
            name: name.to_string(),
            size,
            path: PathBuf::from(path),
            source: AssetSource::Vector {
                foreground_padding: Some(padding),
            },
        }
    }
}

/// Outcome of a single table entry
#[derive(Debug)]
pub struct EntryReport {
    pub name: String,
    pub size: u32,
    /// Destination path (export root already joined)
    pub path: PathBuf,
    pub error: Option<PipelineError>,
}

impl EntryReport {
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-entry results of one export run
#[derive(Debug, Default)]
pub struct ExportSummary {
    pub entries: Vec<EntryReport>,
}

impl ExportSummary {
    pub fn attempted(&self) -> usize {
        self.entries.len()
    }

    pub fn written(&self) -> usize {
        self.entries.iter().filter(|e| e.ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.written()
    }

    pub fn all_ok(&self) -> bool {
        self.failed() == 0
    }
}

/// Built-in launcher table: the Android mipmap set plus the store image
pub fn launcher_assets() -> Vec<AssetEntry> {
    let mut entries: Vec<AssetEntry> = [
        ("mipmap-mdpi", 48),
        ("mipmap-hdpi", 72),
        ("mipmap-xhdpi", 96),
        ("mipmap-xxhdpi", 144),
        ("mipmap-xxxhdpi", 192),
    ]
    .iter()
    .map(|(name, size)| {
        AssetEntry::procedural(name, *size, &format!("res/{name}/ic_launcher.png"))
    })
    .collect();
    entries.push(AssetEntry::procedural(
        "playstore",
        512,
        "playstore/ic_launcher_playstore.png",
    ));
    entries
}

/// Built-in conversion table: the base icon, the adaptive foreground, and
/// the fixed size series
pub fn conversion_assets() -> Vec<AssetEntry> {
    let mut entries = vec![
        AssetEntry::vector("app_icon", 1024, "app_icon.png"),
        AssetEntry::adaptive_foreground(
            "adaptive-foreground",
            1024,
            "app_icon_foreground.png",
            ADAPTIVE_PADDING,
        ),
    ];
    for size in [16u32, 32, 48, 64, 128, 256, 512, 1024] {
        entries.push(AssetEntry::vector(
            &format!("png-{size}"),
            size,
            &format!("app_icon_{size}x{size}.png"),
        ));
    }
    entries
}

/// Run an export table against the given root directory.
///
/// `svg` is the vector source document; it is only required (and checked
/// up front) when the table contains vector entries. Individual entry
/// failures are logged and recorded in the summary; the batch continues.
pub fn run_export(
    root: &Path,
    entries: &[AssetEntry],
    svg: Option<&Path>,
) -> Result<ExportSummary, PipelineError> {
    // fatal precondition: nothing useful can be produced without the source
    let needs_svg = entries
        .iter()
        .any(|e| matches!(e.source, AssetSource::Vector { .. }));
    if needs_svg {
        match svg {
            None => return Err(PipelineError::NoVectorSource),
            Some(path) if !path.exists() => {
                return Err(dialkit_svg::SvgError::MissingSource(path.to_path_buf()).into())
            }
            Some(_) => {}
        }
    }

    let mut summary = ExportSummary::default();
    for entry in entries {
        let dest = root.join(&entry.path);
        let result = generate(entry, svg).and_then(|canvas| write_png(&dest, canvas));
        match result {
            Ok(()) => {
                info!("wrote {} ({} px): {}", entry.name, entry.size, dest.display());
                summary.entries.push(EntryReport {
                    name: entry.name.clone(),
                    size: entry.size,
                    path: dest,
                    error: None,
                });
            }
            Err(e) => {
                error!("{} ({} px) failed: {}", entry.name, entry.size, e);
                summary.entries.push(EntryReport {
                    name: entry.name.clone(),
                    size: entry.size,
                    path: dest,
                    error: Some(e),
                });
            }
        }
    }
    Ok(summary)
}

fn generate(entry: &AssetEntry, svg: Option<&Path>) -> Result<Canvas, PipelineError> {
    match &entry.source {
        AssetSource::Procedural => Ok(compose_dial_icon(entry.size)?),
        AssetSource::Vector { foreground_padding } => {
            let svg = svg.ok_or(PipelineError::NoVectorSource)?;
            let canvas = dialkit_svg::render_file(svg, entry.size)?;
            match foreground_padding {
                Some(padding) => build_foreground(canvas, SafeZone::new(entry.size, *padding)?),
                None => Ok(canvas),
            }
        }
    }
}

/// Write a canvas as lossless 8-bit RGBA PNG, creating parent directories
fn write_png(path: &Path, canvas: Canvas) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let side = canvas.side();
    let img = RgbaImage::from_raw(side, side, canvas.into_pixels())
        .ok_or(PipelineError::BufferMismatch)?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
