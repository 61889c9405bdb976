//! Eraser: wide flat segment that writes the background color back

use glam::Vec2;

use crate::constants::ERASER_WIDTH_SCALE;
use crate::paint::EffectivePaint;
use crate::tiles::TiledSurface;
use crate::types::{BlendMode, PixelRegion};

pub fn paint(
    surface: &mut TiledSurface,
    from: Vec2,
    to: Vec2,
    paint: &EffectivePaint,
) -> Option<PixelRegion> {
    let half_width = paint.width * ERASER_WIDTH_SCALE / 2.0;
    surface.stroke_segment(from, to, half_width, paint.background, BlendMode::Replace, |_| 1.0)
}
