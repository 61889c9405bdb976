//! Tool renderers
//!
//! Each renderer paints from the current path position to a new point using
//! an [`EffectivePaint`] snapshot. Nothing here mutates shared paint state:
//! per-tool width, opacity and gradient are local to the call.

pub mod brush;
pub mod eraser;
pub mod marker;
pub mod spray;

use glam::Vec2;
use rand::Rng;

use crate::paint::{EffectivePaint, Tool};
use crate::tiles::TiledSurface;
use crate::types::PixelRegion;

/// Paint one pointer-move sample with the tool in `paint`.
///
/// Returns the touched pixel region, or None if nothing landed on the surface.
pub fn render<R: Rng + ?Sized>(
    surface: &mut TiledSurface,
    from: Vec2,
    to: Vec2,
    paint: &EffectivePaint,
    rng: &mut R,
) -> Option<PixelRegion> {
    match paint.tool {
        Tool::Brush => brush::paint(surface, from, to, paint),
        Tool::Marker => marker::paint(surface, from, to, paint),
        Tool::Spray => spray::paint(surface, to, paint, rng).region,
        Tool::Eraser => eraser::paint(surface, from, to, paint),
    }
}
