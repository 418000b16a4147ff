//! SVG rasterization using resvg for anti-aliased CPU output

use std::fs;
use std::path::Path;

use dialkit_raster::Canvas;
use tiny_skia::{Pixmap, Transform};
use usvg::{Options, Tree};

use crate::error::SvgError;

/// Rasterize a vector document file to an exactly `size` x `size` canvas.
///
/// A missing file is a distinct, fatal error (`MissingSource`); parse and
/// render failures are scoped to the single requested asset.
pub fn render_file(path: &Path, size: u32) -> Result<Canvas, SvgError> {
    if !path.exists() {
        return Err(SvgError::MissingSource(path.to_path_buf()));
    }
    let data = fs::read(path)?;
    render_data(&data, size)
}

/// Rasterize in-memory SVG data to an exactly `size` x `size` canvas.
///
/// The document's viewbox is mapped to fill the square exactly: a
/// non-square source is stretched, not letterboxed.
pub fn render_data(data: &[u8], size: u32) -> Result<Canvas, SvgError> {
    if size == 0 {
        return Err(SvgError::Rasterize("target size must be > 0".into()));
    }

    let options = Options::default();
    let tree = Tree::from_data(data, &options).map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| SvgError::Rasterize("failed to allocate pixmap".into()))?;

    // Independent x/y scale so the viewbox fills the square exactly
    let svg_size = tree.size();
    let scale_x = size as f32 / svg_size.width();
    let scale_y = size as f32 / svg_size.height();
    tracing::debug!(
        "rasterizing {}x{} viewbox at {} px (scale {:.3} x {:.3})",
        svg_size.width(),
        svg_size.height(),
        size,
        scale_x,
        scale_y
    );

    resvg::render(&tree, Transform::from_scale(scale_x, scale_y), &mut pixmap.as_mut());

    // tiny-skia produces premultiplied alpha; PNG output is straight alpha
    let pixels = unpremultiply_alpha(pixmap.data());
    Canvas::from_rgba(size, pixels).map_err(|e| SvgError::Rasterize(e.to_string()))
}

/// Convert premultiplied alpha to straight alpha
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = ((chunk[0] as f32 / a).min(255.0)) as u8;
            let g = ((chunk[1] as f32 / a).min(255.0)) as u8;
            let b = ((chunk[2] as f32 / a).min(255.0)) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
