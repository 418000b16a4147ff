//! Radial gradient synthesis
//!
//! The single O(N^2) per-pixel loop in the pipeline. It fills a dense
//! canvas sequentially, so output is pixel-exact reproducible: no
//! parallelism, no rounding-order dependence.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::RasterError;

/// Fill an N x N canvas with a two-color radial gradient.
///
/// Each pixel inside the inscribed circle is the per-channel rounded mix
/// `inner * (1 - t) + outer * t` where `t = distance / (N / 2)`, measured
/// from the canvas center. Pixels at or beyond the max radius stay fully
/// transparent; pixels inside it are fully opaque.
pub fn radial_gradient(side: u32, inner: Color, outer: Color) -> Result<Canvas, RasterError> {
    let mut canvas = Canvas::new(side)?;
    let center = (side / 2) as f32;
    let max_radius = center;

    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < max_radius {
                let t = (distance / max_radius).clamp(0.0, 1.0);
                let color = Color::lerp(inner, outer, t);
                canvas.put(x, y, Color::rgb(color.r, color.g, color.b));
            }
        }
    }
    Ok(canvas)
}
