//! Marker: flat, semi-transparent segment. Overlapping passes darken.

use glam::Vec2;

use crate::constants::MARKER_OPACITY;
use crate::paint::EffectivePaint;
use crate::tiles::TiledSurface;
use crate::types::{BlendMode, PixelRegion};

pub fn paint(
    surface: &mut TiledSurface,
    from: Vec2,
    to: Vec2,
    paint: &EffectivePaint,
) -> Option<PixelRegion> {
    surface.stroke_segment(
        from,
        to,
        paint.width / 2.0,
        paint.color,
        BlendMode::Normal,
        |_| MARKER_OPACITY,
    )
}
