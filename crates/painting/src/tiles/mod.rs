//! Tile management and dirty tracking for the canvas surface

mod data_access;
mod dirty_tracking;
mod raster;

use crate::constants::DEFAULT_TILE_SIZE;
use crate::surface::CpuSurface;
use std::collections::HashSet;

pub use raster::distance_to_segment;

/// Tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// Manages tiled access to a surface with dirty tracking
pub struct TiledSurface {
    pub(crate) surface: CpuSurface,
    pub(crate) tile_size: u32,
    tiles_x: u32,
    tiles_y: u32,
    pub(crate) dirty_tiles: HashSet<TileCoord>,
}

impl TiledSurface {
    /// Create a new tiled surface with the given dimensions and tile size
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        let tile_size = tile_size.max(1);
        let tiles_x = width.div_ceil(tile_size);
        let tiles_y = height.div_ceil(tile_size);

        Self {
            surface: CpuSurface::new(width, height),
            tile_size,
            tiles_x,
            tiles_y,
            dirty_tiles: HashSet::new(),
        }
    }

    /// Create a new tiled surface with the default tile size
    pub fn with_default_tile_size(width: u32, height: u32) -> Self {
        Self::new(width, height, DEFAULT_TILE_SIZE)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Get the underlying surface for direct pixel access
    #[inline]
    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    /// Fill the whole surface and mark every tile dirty
    pub fn fill(&mut self, color: [f32; 4]) {
        self.surface.fill(color);
        let (width, height) = (self.width(), self.height());
        self.mark_region_dirty(0, 0, width, height);
    }
}
