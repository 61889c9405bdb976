//! Brush: soft-edged segment
//!
//! The stroke is drawn at 1.5x the nominal width and shaded with a radial
//! falloff whose radius is the nominal width, so the band's edges fade out
//! while the core stays dense.

use glam::Vec2;
use tracing::trace;

use crate::constants::{BRUSH_GRADIENT_STOPS, BRUSH_WIDTH_SCALE};
use crate::paint::EffectivePaint;
use crate::tiles::TiledSurface;
use crate::types::{BlendMode, PixelRegion};

/// Opacity of the falloff at `t` = distance / radius (0 at center, 1 at edge).
/// Piecewise linear between the gradient stops; zero past the last stop.
#[inline]
pub fn gradient_opacity(t: f32) -> f32 {
    if t.is_nan() {
        return 0.0;
    }
    let t = t.max(0.0);
    let mut prev = BRUSH_GRADIENT_STOPS[0];
    if t <= prev.0 {
        return prev.1;
    }
    for stop in &BRUSH_GRADIENT_STOPS[1..] {
        if t <= stop.0 {
            let span = stop.0 - prev.0;
            let k = if span > 0.0 { (t - prev.0) / span } else { 1.0 };
            return prev.1 + (stop.1 - prev.1) * k;
        }
        prev = *stop;
    }
    prev.1
}

/// Falloff is measured from the whole segment rather than centred on `to`,
/// so the stroke keeps a dense core along its full length.
pub fn paint(
    surface: &mut TiledSurface,
    from: Vec2,
    to: Vec2,
    paint: &EffectivePaint,
) -> Option<PixelRegion> {
    let radius = paint.width;
    let half_width = paint.width * BRUSH_WIDTH_SCALE / 2.0;
    trace!(
        "brush: ({:.1}, {:.1}) -> ({:.1}, {:.1}), radius={:.1}",
        from.x,
        from.y,
        to.x,
        to.y,
        radius
    );

    surface.stroke_segment(from, to, half_width, paint.color, BlendMode::Normal, |distance| {
        gradient_opacity(distance / radius)
    })
}
