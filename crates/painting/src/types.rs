use serde::{Deserialize, Serialize};

/// How a covered pixel is combined with what is already on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BlendMode {
    /// Source-over alpha compositing
    #[default]
    Normal = 0,
    /// Overwrite the pixel with the source color
    Replace = 1,
}

/// Pixel bounding box of a paint operation: (x, y, width, height)
pub type PixelRegion = (u32, u32, u32, u32);

/// Smallest region containing both inputs
pub fn union_regions(a: Option<PixelRegion>, b: Option<PixelRegion>) -> Option<PixelRegion> {
    match (a, b) {
        (None, r) | (r, None) => r,
        (Some((ax, ay, aw, ah)), Some((bx, by, bw, bh))) => {
            let x = ax.min(bx);
            let y = ay.min(by);
            let x_end = (ax + aw).max(bx + bw);
            let y_end = (ay + ah).max(by + bh);
            Some((x, y, x_end - x, y_end - y))
        }
    }
}
