//! Pointer-to-canvas coordinate mapping
//!
//! The canvas element is laid out responsively, so its on-screen box rarely
//! matches the logical bitmap. Every sample is scaled by the ratio of the
//! logical size to the box size at the time of the sample.

use glam::{UVec2, Vec2};

/// A raw pointer sample in client coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum PointerSample {
    Mouse(Vec2),
    /// Active touch points, in platform order
    Touch(Vec<Vec2>),
}

impl PointerSample {
    /// The point that drives drawing: the mouse position or the first touch
    pub fn primary(&self) -> Option<Vec2> {
        match self {
            PointerSample::Mouse(point) => Some(*point),
            PointerSample::Touch(touches) => touches.first().copied(),
        }
    }
}

/// On-screen bounding box of the canvas element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A box at the origin drawn at exactly the logical size
    pub fn unscaled(logical: UVec2) -> Self {
        Self::new(0.0, 0.0, logical.x as f32, logical.y as f32)
    }

    fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Map a pointer sample into canvas pixel coordinates.
///
/// Returns None for a touch sample without touches or a collapsed display
/// box; callers treat that as a stray event.
pub fn map_pointer(sample: &PointerSample, logical: UVec2, rect: &DisplayRect) -> Option<Vec2> {
    if !rect.is_usable() {
        return None;
    }
    let raw = sample.primary()?;
    if !raw.is_finite() {
        return None;
    }

    let scale = logical.as_vec2() / Vec2::new(rect.width, rect.height);
    Some((raw - Vec2::new(rect.left, rect.top)) * scale)
}
