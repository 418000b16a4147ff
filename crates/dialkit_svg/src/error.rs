//! SVG error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or rasterizing the vector document
#[derive(Error, Debug)]
pub enum SvgError {
    /// The vector source document does not exist
    #[error("vector source document not found: {0}")]
    MissingSource(PathBuf),

    /// IO error when reading the document
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// The engine could not render the document at the requested size
    #[error("rasterization failed: {0}")]
    Rasterize(String),
}
