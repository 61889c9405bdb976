//! Dirty tile tracking so hosts only re-upload what strokes touched

use tracing::trace;

use super::{TileCoord, TiledSurface};
use crate::types::PixelRegion;

impl TiledSurface {
    /// Mark the tile containing a pixel as modified
    #[inline]
    pub fn mark_dirty(&mut self, x: u32, y: u32) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        self.dirty_tiles.insert(TileCoord {
            x: x / self.tile_size,
            y: y / self.tile_size,
        });
    }

    /// Mark every tile overlapping a pixel rectangle as modified
    pub fn mark_region_dirty(&mut self, x: u32, y: u32, w: u32, h: u32) {
        if w == 0 || h == 0 || x >= self.width() || y >= self.height() {
            return;
        }

        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());

        let first = TileCoord {
            x: x / self.tile_size,
            y: y / self.tile_size,
        };
        let last = TileCoord {
            x: (x_end - 1) / self.tile_size,
            y: (y_end - 1) / self.tile_size,
        };

        for ty in first.y..=last.y {
            for tx in first.x..=last.x {
                self.dirty_tiles.insert(TileCoord { x: tx, y: ty });
            }
        }

        trace!(
            "mark_region_dirty: ({}, {}) {}x{} -> {} dirty tiles",
            x,
            y,
            w,
            h,
            self.dirty_tiles.len()
        );
    }

    /// Convenience for renderer results
    pub(crate) fn mark_painted(&mut self, region: Option<PixelRegion>) {
        if let Some((x, y, w, h)) = region {
            self.mark_region_dirty(x, y, w, h);
        }
    }

    /// Get all dirty tiles and clear the dirty set
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.dirty_tiles.drain().collect()
    }

    #[inline]
    pub fn has_dirty_tiles(&self) -> bool {
        !self.dirty_tiles.is_empty()
    }

    #[inline]
    pub fn dirty_tile_count(&self) -> usize {
        self.dirty_tiles.len()
    }
}
