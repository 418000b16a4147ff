//! Pipeline error types

use std::io;
use thiserror::Error;

use dialkit_raster::RasterError;
use dialkit_svg::SvgError;

/// Errors that can occur while composing or exporting icon assets
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Svg(#[from] SvgError),

    /// Cannot create a directory or write an output file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding failed
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The export manifest could not be parsed
    #[error("manifest error: {0}")]
    Manifest(#[from] toml::de::Error),

    /// A canvas buffer did not round-trip through the image crate
    #[error("pixel buffer did not match its canvas dimensions")]
    BufferMismatch,

    /// Safe-zone padding would leave no interior
    #[error("safe-zone padding {padding} px too large for a {size} px canvas")]
    InvalidSafeZone { size: u32, padding: u32 },

    /// The export table has vector entries but no source document was given
    #[error("export table contains vector entries but no source document was configured")]
    NoVectorSource,
}

impl PipelineError {
    /// Whether this error must abort the whole run rather than one entry
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PipelineError::Svg(SvgError::MissingSource(_)) | PipelineError::NoVectorSource
        )
    }
}
