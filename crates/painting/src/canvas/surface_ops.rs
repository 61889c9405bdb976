//! Surface operations for the canvas: clear, pixel reads, dirty tiles, export

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::export::{ExportError, ExportedImage, export_filename, export_png};
use crate::scroll_lock::DocumentHost;
use crate::tiles::TileCoord;
use crate::types::PixelRegion;

use super::PaintingCanvas;

impl<H: DocumentHost> PaintingCanvas<H> {
    /// Refill the surface with the background color.
    /// The active tool keeps its appearance.
    pub fn clear(&mut self) {
        let background = self.background().to_rgba();
        let Some(surface) = self.surface.as_mut() else {
            debug!("clear: canvas not initialized, ignoring");
            return;
        };
        surface.fill(background);
        self.refresh_paint();
        info!("Canvas cleared");
    }

    /// Get a single pixel's color.
    ///
    /// Returns None if uninitialized or out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.surface.as_ref()?.surface().get_pixel(x, y)
    }

    /// Take the tiles modified since the last call
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.surface
            .as_mut()
            .map(|surface| surface.take_dirty_tiles())
            .unwrap_or_default()
    }

    /// Pixel bounds of one tile, clipped to the surface
    pub fn tile_bounds(&self, coord: TileCoord) -> Option<PixelRegion> {
        let surface = self.surface.as_ref()?;
        if coord.x >= surface.tiles_x() || coord.y >= surface.tiles_y() {
            return None;
        }
        Some(surface.get_tile_bounds(coord))
    }

    /// Bounds and pixels of one tile, for re-uploading a dirty tile
    pub fn tile_data(&self, coord: TileCoord) -> Option<(PixelRegion, Vec<[f32; 4]>)> {
        let bounds = self.tile_bounds(coord)?;
        let surface = self.surface.as_ref()?;
        Some((bounds, surface.get_tile_data(coord)))
    }

    pub fn has_dirty_tiles(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|surface| surface.has_dirty_tiles())
    }

    /// Encode the current surface as a PNG named for `now`.
    ///
    /// Returns Ok(None) if the canvas has no surface. An in-progress stroke
    /// is neither required nor interrupted.
    pub fn export(&self, now: DateTime<Utc>) -> Result<Option<ExportedImage>, ExportError> {
        let Some(surface) = self.surface.as_ref() else {
            debug!("export: canvas not initialized");
            return Ok(None);
        };

        let bytes = export_png(surface.surface())?;
        let filename = export_filename(now);
        info!("Exported {} ({} bytes)", filename, bytes.len());
        Ok(Some(ExportedImage { filename, bytes }))
    }

    pub fn export_now(&self) -> Result<Option<ExportedImage>, ExportError> {
        self.export(Utc::now())
    }
}
