//! SVG rasterization for dialkit
//!
//! Converts the app's vector icon document into square raster buffers at
//! requested pixel sizes. Parsing and path math are delegated to `usvg`
//! and `resvg`; this crate only manages the size request, the
//! stretch-to-fill transform, and the buffer hand-off.

mod error;
mod rasterize;

pub use error::SvgError;
pub use rasterize::{render_data, render_file};
