//! Square RGBA canvas and single-channel masks
//!
//! A `Canvas` is one flat contiguous buffer indexed by `(y * N + x) * 4`,
//! owned exclusively by whichever component is currently drawing into it.
//! Layering happens through `composite_masked`, which applies a `Mask` as
//! an alpha stencil: where the mask is non-zero, the source pixel's RGB is
//! copied and the mask value becomes the destination pixel's alpha. This
//! is intentionally not alpha-over blending; it reproduces the
//! paste-under-mask layering the shipped icons were built with.

use crate::color::Color;
use crate::error::RasterError;

/// Square RGBA pixel buffer, origin top-left
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    side: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a fully transparent canvas
    pub fn new(side: u32) -> Result<Self, RasterError> {
        if side == 0 {
            return Err(RasterError::InvalidSize(0));
        }
        Ok(Self {
            side,
            pixels: vec![0; (side as usize) * (side as usize) * 4],
        })
    }

    /// Wrap an existing RGBA buffer, validating its length
    pub fn from_rgba(side: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if side == 0 {
            return Err(RasterError::InvalidSize(0));
        }
        let expected = (side as usize) * (side as usize) * 4;
        if pixels.len() != expected {
            return Err(RasterError::BufferLength {
                side,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { side, pixels })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the raw RGBA buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.side + x) * 4) as usize
    }

    /// Read the pixel at (x, y); out-of-bounds reads return transparent
    pub fn get(&self, x: u32, y: u32) -> Color {
        if x >= self.side || y >= self.side {
            return Color::TRANSPARENT;
        }
        let i = self.index(x, y);
        Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        )
    }

    /// Overwrite the pixel at (x, y), alpha included; out-of-bounds writes
    /// are discarded
    pub fn put(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.side || y >= self.side {
            return;
        }
        let i = self.index(x, y);
        self.pixels[i] = color.r;
        self.pixels[i + 1] = color.g;
        self.pixels[i + 2] = color.b;
        self.pixels[i + 3] = color.a;
    }

    /// Paste `source` through `mask` at `offset` (destination coordinates).
    ///
    /// The mask must match the source's dimensions. Wherever the mask is
    /// non-zero the source RGB is copied and the mask value is stored as
    /// the output alpha; wherever it is zero the destination keeps its
    /// existing content. Source pixels landing outside the destination are
    /// clipped.
    pub fn composite_masked(
        &mut self,
        source: &Canvas,
        mask: &Mask,
        offset: (u32, u32),
    ) -> Result<(), RasterError> {
        if mask.side() != source.side() {
            return Err(RasterError::DimensionMismatch {
                mask: mask.side(),
                canvas: source.side(),
            });
        }
        let (ox, oy) = offset;
        for y in 0..source.side() {
            let dy = oy + y;
            if dy >= self.side {
                break;
            }
            for x in 0..source.side() {
                let dx = ox + x;
                if dx >= self.side {
                    break;
                }
                let m = mask.get(x, y);
                if m > 0 {
                    let src = source.get(x, y);
                    self.put(dx, dy, Color::rgba(src.r, src.g, src.b, m));
                }
            }
        }
        Ok(())
    }
}

/// Single-channel (alpha) stencil, same square layout as `Canvas`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    side: u32,
    values: Vec<u8>,
}

impl Mask {
    /// Allocate an all-zero (fully masking) stencil
    pub fn new(side: u32) -> Result<Self, RasterError> {
        if side == 0 {
            return Err(RasterError::InvalidSize(0));
        }
        Ok(Self {
            side,
            values: vec![0; (side as usize) * (side as usize)],
        })
    }

    /// Stencil holding 255 inside the circle inscribed in the square inset
    /// by `inset` pixels on every edge, 0 elsewhere.
    ///
    /// Sampled on the integer pixel grid with a strict radius test, the
    /// same convention the gradient fill uses, so a zero-inset mask never
    /// admits rim pixels the gradient left transparent.
    pub fn filled_circle(side: u32, inset: u32) -> Result<Self, RasterError> {
        let mut mask = Self::new(side)?;
        let center = (side / 2) as f32;
        let radius = center - inset as f32;
        if radius <= 0.0 {
            return Ok(mask);
        }
        for y in 0..side {
            for x in 0..side {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                if (dx * dx + dy * dy).sqrt() < radius {
                    mask.set(x, y, 255);
                }
            }
        }
        Ok(mask)
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.side || y >= self.side {
            return 0;
        }
        self.values[(y * self.side + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x >= self.side || y >= self.side {
            return;
        }
        self.values[(y * self.side + x) as usize] = value;
    }
}
