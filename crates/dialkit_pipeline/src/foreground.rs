//! Adaptive-icon foreground construction
//!
//! Platform launchers mask and animate adaptive icons, so the foreground
//! layer keeps a transparent safe-zone border: the full-bleed source is
//! downscaled into the interior and centered on a transparent canvas.

use dialkit_raster::Canvas;
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::PipelineError;

/// Full canvas size plus the transparent border reserved on every side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SafeZone {
    size: u32,
    padding: u32,
}

impl SafeZone {
    /// Validated safe zone; the padding must leave a non-empty interior
    pub fn new(size: u32, padding: u32) -> Result<Self, PipelineError> {
        // widen before doubling: padding comes straight from manifests
        if size == 0 || u64::from(padding) * 2 >= u64::from(size) {
            return Err(PipelineError::InvalidSafeZone { size, padding });
        }
        Ok(Self { size, padding })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Side length of the interior the source is scaled into
    pub fn interior(&self) -> u32 {
        self.size - 2 * self.padding
    }
}

/// Shrink a full-bleed image into the safe zone's interior and center it
/// on a transparent canvas.
///
/// Downscaling uses Lanczos3 resampling (the output feeds OS-side icon
/// masking, so nearest-neighbor aliasing is not acceptable). The paste is
/// alpha-over with the resized image's own alpha, so transparent source
/// regions stay transparent.
pub fn build_foreground(source: Canvas, zone: SafeZone) -> Result<Canvas, PipelineError> {
    let side = source.side();
    let full = RgbaImage::from_raw(side, side, source.into_pixels())
        .ok_or(PipelineError::BufferMismatch)?;

    let interior = zone.interior();
    let resized = imageops::resize(&full, interior, interior, FilterType::Lanczos3);

    let mut out = RgbaImage::new(zone.size(), zone.size());
    imageops::overlay(&mut out, &resized, zone.padding() as i64, zone.padding() as i64);

    Ok(Canvas::from_rgba(zone.size(), out.into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_raster::Color;

    #[test]
    fn test_safe_zone_validation() {
        assert!(SafeZone::new(1024, 172).is_ok());
        assert!(SafeZone::new(100, 50).is_err());
        assert!(SafeZone::new(100, 51).is_err());
        assert!(SafeZone::new(0, 0).is_err());
    }

    #[test]
    fn test_huge_padding_rejected_without_overflow() {
        // doubling this padding wraps in u32 arithmetic
        let err = SafeZone::new(1024, u32::MAX / 2 + 1).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidSafeZone { size: 1024, .. }
        ));
        assert!(SafeZone::new(1024, u32::MAX).is_err());
    }

    #[test]
    fn test_output_size_and_padding_band() {
        let mut source = Canvas::new(64).unwrap();
        for y in 0..64 {
            for x in 0..64 {
                source.put(x, y, Color::rgb(200, 10, 10));
            }
        }
        let zone = SafeZone::new(128, 24).unwrap();
        let fg = build_foreground(source, zone).unwrap();

        assert_eq!(fg.side(), 128);
        // everything inside the padding band is transparent
        for i in 0..128 {
            assert_eq!(fg.get(i, 0).a, 0);
            assert_eq!(fg.get(0, i).a, 0);
            assert_eq!(fg.get(i, 23).a, 0);
            assert_eq!(fg.get(i, 127).a, 0);
        }
        // the interior carries the scaled content
        assert!(fg.get(64, 64).a > 0);
        assert!(fg.get(64, 64).r >= 198);
    }

    #[test]
    fn test_transparent_source_stays_transparent() {
        let source = Canvas::new(64).unwrap();
        let zone = SafeZone::new(96, 16).unwrap();
        let fg = build_foreground(source, zone).unwrap();
        assert!(fg.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_upscaling_small_source() {
        let mut source = Canvas::new(8).unwrap();
        source.put(4, 4, Color::WHITE);
        let zone = SafeZone::new(64, 8).unwrap();
        let fg = build_foreground(source, zone).unwrap();
        assert_eq!(fg.side(), 64);
    }
}
