//! Procedural dial-icon composition
//!
//! One linear sequence builds the launcher icon: masked radial-gradient
//! dial, masked inner ring, tick marks, the two decorative hands, center
//! dot, progress arc, highlight dots. The hands are fixed at the 2- and
//! 4-o'clock directions; nothing here reads the actual time.
//!
//! Every radius and stroke width derives from the canvas size with a
//! minimum pixel floor, so the geometry survives down to 16 px targets.

use dialkit_raster::{radial_gradient, radial_point, Canvas, Color, Mask, RasterError};

const DIAL_INNER: Color = Color::rgb(102, 126, 234);
const DIAL_OUTER: Color = Color::rgb(118, 75, 162);
const RING_INNER: Color = Color::rgb(240, 147, 251);
const RING_OUTER: Color = Color::rgb(245, 87, 108);

const TICK: Color = Color::rgba(255, 255, 255, 200);
const HOUR_HAND: Color = Color::rgb(79, 172, 254);
const MINUTE_HAND: Color = Color::rgb(0, 242, 254);
const ARC: Color = Color::rgba(255, 255, 255, 230);

/// (fractional position, fractional radius, alpha)
const HIGHLIGHTS: [((f32, f32), f32, u8); 3] = [
    ((0.30, 0.30), 0.020, 150),
    ((0.70, 0.30), 0.015, 100),
    ((0.75, 0.60), 0.010, 120),
];

/// Compose the finished dial icon at the requested pixel size.
///
/// Deterministic: identical sizes produce byte-identical canvases.
pub fn compose_dial_icon(size: u32) -> Result<Canvas, RasterError> {
    let mut canvas = Canvas::new(size)?;
    let margin = size / 20;
    let inner_margin = size / 8;
    let center = ((size / 2) as f32, (size / 2) as f32);

    // dial background, clipped to a circle inset by the outer margin
    let dial = radial_gradient(size, DIAL_INNER, DIAL_OUTER)?;
    let dial_mask = Mask::filled_circle(size, margin)?;
    canvas.composite_masked(&dial, &dial_mask, (0, 0))?;

    // inner ring, a smaller gradient centered on the dial
    let ring_side = size - 2 * inner_margin;
    let ring = radial_gradient(ring_side, RING_INNER, RING_OUTER)?;
    let ring_mask = Mask::filled_circle(ring_side, 0)?;
    canvas.composite_masked(&ring, &ring_mask, (inner_margin, inner_margin))?;

    // tick marks every 30 degrees; 12/3/6/9 get the thick stroke
    let clock_radius = center.0 - (margin + (size / 16).max(2)) as f32;
    let tick_outer = clock_radius - (size / 32).max(1) as f32;
    let tick_inner = clock_radius - (size / 10).max(3) as f32;
    let thick = (size / 48).max(2) as f32;
    let thin = (size / 96).max(1) as f32;
    for i in 0..12u32 {
        let angle = (i * 30) as f32 - 90.0;
        let outer = radial_point(center, tick_outer, angle);
        let inner = radial_point(center, tick_inner, angle);
        let width = if i % 3 == 0 { thick } else { thin };
        canvas.draw_line(outer, inner, TICK, width);
    }

    // hour hand toward 2 o'clock, minute hand toward 4 o'clock
    let hour_tip = radial_point(center, clock_radius * 0.5, -30.0);
    canvas.draw_line(center, hour_tip, HOUR_HAND, (size / 80).max(3) as f32);
    let minute_tip = radial_point(center, clock_radius * 0.7, 30.0);
    canvas.draw_line(center, minute_tip, MINUTE_HAND, (size / 100).max(2) as f32);

    canvas.fill_circle(center, (size / 60).max(2) as f32, Color::WHITE);

    // elapsed-time arc, 12 o'clock to 4 o'clock
    let arc_inset = margin + (size / 34).max(2);
    canvas.draw_arc(arc_inset, -90.0, 30.0, ARC, (size / 120).max(1) as f32);

    for ((fx, fy), fr, alpha) in HIGHLIGHTS {
        let pos = (fx * size as f32, fy * size as f32);
        let radius = (fr * size as f32).max(1.0);
        canvas.fill_circle(pos, radius, Color::WHITE.with_alpha(alpha));
    }

    Ok(canvas)
}
