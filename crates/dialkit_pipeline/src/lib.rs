//! Icon composition and batch export
//!
//! Drives the raster and SVG crates across a table of asset entries:
//! composes the procedural dial icon or rasterizes the vector document,
//! builds adaptive-icon foregrounds, and writes each result as a lossless
//! RGBA PNG under an explicit export root. Entries are independent; one
//! failure never blocks the rest of the batch.

mod composer;
mod error;
mod export;
mod foreground;
mod manifest;

pub use composer::compose_dial_icon;
pub use error::PipelineError;
pub use export::{
    conversion_assets, launcher_assets, run_export, AssetEntry, AssetSource, EntryReport,
    ExportSummary, ADAPTIVE_PADDING,
};
pub use foreground::{build_foreground, SafeZone};
pub use manifest::ExportManifest;
