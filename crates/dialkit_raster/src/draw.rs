//! Geometric drawing primitives
//!
//! Coverage-test rasterization: each primitive walks a clamped bounding
//! box and overwrites every pixel whose integer grid coordinate satisfies
//! the geometric predicate — the same sampling convention the gradient
//! fill and circle masks use. Writes are direct (alpha included, no
//! blending), matching the renderer the shipped icons came from. All
//! coordinates are in canvas pixels; angles are degrees, measured
//! clockwise from the 3-o'clock direction, so -90 degrees points at the
//! canvas top.

use crate::canvas::Canvas;
use crate::color::Color;

/// Point at `radius` from `center` in the direction `angle_deg`
///
/// Used for radial tick placement and hand endpoints.
pub fn radial_point(center: (f32, f32), radius: f32, angle_deg: f32) -> (f32, f32) {
    let radians = angle_deg.to_radians();
    (
        center.0 + radius * radians.cos(),
        center.1 + radius * radians.sin(),
    )
}

/// Clamped integer bounding box around a float rectangle
fn pixel_bounds(side: u32, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (u32, u32, u32, u32) {
    let limit = (side - 1) as f32;
    let x0 = min_x.floor().clamp(0.0, limit) as u32;
    let y0 = min_y.floor().clamp(0.0, limit) as u32;
    let x1 = max_x.ceil().clamp(0.0, limit) as u32;
    let y1 = max_y.ceil().clamp(0.0, limit) as u32;
    (x0, y0, x1, y1)
}

impl Canvas {
    /// Fill a disc
    pub fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let (cx, cy) = center;
        let (x0, y0, x1, y1) =
            pixel_bounds(self.side(), cx - radius, cy - radius, cx + radius, cy + radius);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if (dx * dx + dy * dy).sqrt() <= radius {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroke a circle outline with the given stroke width
    pub fn stroke_circle(&mut self, center: (f32, f32), radius: f32, color: Color, width: f32) {
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let (cx, cy) = center;
        let reach = radius + half;
        let (x0, y0, x1, y1) =
            pixel_bounds(self.side(), cx - reach, cy - reach, cx + reach, cy + reach);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if ((dx * dx + dy * dy).sqrt() - radius).abs() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw a line segment with the given stroke width
    ///
    /// A pixel is covered when it lies within `width / 2` of the segment,
    /// so even `width = 1` strokes stay visible at 16 px.
    pub fn draw_line(&mut self, p0: (f32, f32), p1: (f32, f32), color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let (x0, y0, x1, y1) = pixel_bounds(
            self.side(),
            p0.0.min(p1.0) - half,
            p0.1.min(p1.1) - half,
            p0.0.max(p1.0) + half,
            p0.1.max(p1.1) + half,
        );
        let (ax, ay) = p0;
        let (bx, by) = p1;
        let len2 = (bx - ax) * (bx - ax) + (by - ay) * (by - ay);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f32;
                let py = y as f32;
                // project the pixel center onto the segment
                let t = if len2 > 0.0 {
                    (((px - ax) * (bx - ax) + (py - ay) * (by - ay)) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let nx = ax + t * (bx - ax);
                let ny = ay + t * (by - ay);
                let dx = px - nx;
                let dy = py - ny;
                if (dx * dx + dy * dy).sqrt() <= half {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw a circular arc inside the square bounding box inset from the
    /// canvas edge by `inset` pixels
    ///
    /// The arc sweeps clockwise from `start_deg` to `end_deg`; sweeps that
    /// wrap past 180/-180 are handled.
    pub fn draw_arc(
        &mut self,
        inset: u32,
        start_deg: f32,
        end_deg: f32,
        color: Color,
        width: f32,
    ) {
        let center = self.side() as f32 / 2.0;
        let radius = center - inset as f32;
        if radius <= 0.0 || width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let sweep = {
            let mut s = end_deg - start_deg;
            while s < 0.0 {
                s += 360.0;
            }
            s
        };
        let reach = radius + half;
        let (x0, y0, x1, y1) = pixel_bounds(
            self.side(),
            center - reach,
            center - reach,
            center + reach,
            center + reach,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                if ((dx * dx + dy * dy).sqrt() - radius).abs() > half {
                    continue;
                }
                let mut angle = dy.atan2(dx).to_degrees() - start_deg;
                while angle < 0.0 {
                    angle += 360.0;
                }
                if angle <= sweep {
                    self.put(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = Color::rgb(255, 0, 0);

    fn painted(canvas: &Canvas) -> usize {
        canvas
            .pixels()
            .chunks_exact(4)
            .filter(|px| px[3] > 0)
            .count()
    }

    #[test]
    fn test_radial_point_cardinal_directions() {
        let c = (50.0, 50.0);
        let (x, y) = radial_point(c, 10.0, -90.0);
        assert!((x - 50.0).abs() < 1e-4);
        assert!((y - 40.0).abs() < 1e-4); // top of the canvas
        let (x, y) = radial_point(c, 10.0, 0.0);
        assert!((x - 60.0).abs() < 1e-4);
        assert!((y - 50.0).abs() < 1e-4); // 3 o'clock
    }

    #[test]
    fn test_fill_circle_covers_center_not_corners() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas.fill_circle((16.0, 16.0), 8.0, INK);
        assert_eq!(canvas.get(16, 16), INK);
        assert_eq!(canvas.get(0, 0), Color::TRANSPARENT);
        assert_eq!(canvas.get(16, 2), Color::TRANSPARENT);
    }

    #[test]
    fn test_stroke_circle_leaves_interior_empty() {
        let mut canvas = Canvas::new(64).unwrap();
        canvas.stroke_circle((32.0, 32.0), 20.0, INK, 2.0);
        assert_eq!(canvas.get(32, 32), Color::TRANSPARENT);
        // on the ring at 3 o'clock
        assert_eq!(canvas.get(51, 32), INK);
    }

    #[test]
    fn test_line_width_one_still_paints_at_small_sizes() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas.draw_line((8.0, 2.0), (8.0, 14.0), INK, 1.0);
        assert!(painted(&canvas) > 0);
        assert_eq!(canvas.get(8, 8).a, 255);
    }

    #[test]
    fn test_line_stays_inside_bounding_box() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas.draw_line((4.0, 16.0), (28.0, 16.0), INK, 4.0);
        for x in 0..32 {
            assert_eq!(canvas.get(x, 4), Color::TRANSPARENT);
            assert_eq!(canvas.get(x, 28), Color::TRANSPARENT);
        }
    }

    #[test]
    fn test_degenerate_line_is_a_dot() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas.draw_line((8.0, 8.0), (8.0, 8.0), INK, 3.0);
        assert!(painted(&canvas) > 0);
        assert!(painted(&canvas) < 16);
    }

    #[test]
    fn test_arc_covers_sweep_only() {
        let mut canvas = Canvas::new(100).unwrap();
        // top to 4 o'clock, the dial's progress arc
        canvas.draw_arc(10, -90.0, 30.0, INK, 3.0);
        // top of the ring (inside the sweep)
        assert_eq!(canvas.get(50, 10).a, 255);
        // 3 o'clock (inside)
        assert_eq!(canvas.get(89, 50).a, 255);
        // 9 o'clock (outside)
        assert_eq!(canvas.get(11, 50), Color::TRANSPARENT);
        // 6 o'clock (outside)
        assert_eq!(canvas.get(50, 88), Color::TRANSPARENT);
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas.draw_line((2.0, 2.0), (14.0, 14.0), INK, 0.0);
        canvas.stroke_circle((8.0, 8.0), 4.0, INK, 0.0);
        assert_eq!(painted(&canvas), 0);
    }
}
