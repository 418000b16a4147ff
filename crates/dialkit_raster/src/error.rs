//! Raster error types

use thiserror::Error;

/// Errors that can occur when allocating or compositing pixel buffers
#[derive(Error, Debug)]
pub enum RasterError {
    /// Canvas or gradient requested with a zero side length
    #[error("invalid canvas size: {0} (must be > 0)")]
    InvalidSize(u32),

    /// A mask was applied to a canvas of a different size
    #[error("mask is {mask}x{mask} px but the gated canvas is {canvas}x{canvas} px")]
    DimensionMismatch { mask: u32, canvas: u32 },

    /// A raw pixel buffer did not match the declared dimensions
    #[error("pixel buffer holds {actual} bytes, expected {expected} for {side}x{side} RGBA")]
    BufferLength {
        side: u32,
        expected: usize,
        actual: usize,
    },
}
