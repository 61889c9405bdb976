//! Pointer input and layout types reported by the canvas element.

use serde::{Deserialize, Serialize};

/// Where a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A raw pointer sample in client coordinates.
///
/// Mouse samples carry a single point. Touch samples carry every active
/// touch point in the order the platform reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub source: PointerSource,
    pub points: Vec<[f32; 2]>,
}

impl PointerInput {
    /// Mouse sample at client coordinates
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            source: PointerSource::Mouse,
            points: vec![[x, y]],
        }
    }

    /// Touch sample with the given active touch points
    pub fn touch(points: Vec<[f32; 2]>) -> Self {
        Self {
            source: PointerSource::Touch,
            points,
        }
    }
}

/// On-screen bounding box of the canvas element, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}
