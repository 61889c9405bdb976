//! Reading back tiles and regions for host uploads

use super::{TileCoord, TiledSurface};
use crate::types::PixelRegion;

impl TiledSurface {
    /// Pixel bounds of a tile; edge tiles are clipped to the surface
    pub fn get_tile_bounds(&self, coord: TileCoord) -> PixelRegion {
        let x = coord.x * self.tile_size;
        let y = coord.y * self.tile_size;
        let w = self.tile_size.min(self.width().saturating_sub(x));
        let h = self.tile_size.min(self.height().saturating_sub(y));
        (x, y, w, h)
    }

    /// Copy a rectangle of pixels in row-major order, clamped to the surface
    pub fn get_region_data(&self, (x, y, width, height): PixelRegion) -> Vec<[f32; 4]> {
        let x_end = x.saturating_add(width).min(self.width());
        let y_end = y.saturating_add(height).min(self.height());
        if x >= x_end || y >= y_end {
            return Vec::new();
        }

        let mut data = Vec::with_capacity(((x_end - x) * (y_end - y)) as usize);
        for row in y..y_end {
            data.extend((x..x_end).filter_map(|col| self.surface.get_pixel(col, row)));
        }
        data
    }

    /// Pixel data of one tile, for incremental uploads
    pub fn get_tile_data(&self, coord: TileCoord) -> Vec<[f32; 4]> {
        self.get_region_data(self.get_tile_bounds(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tile_bounds() {
        let surface = TiledSurface::new(150, 150, 128);

        assert_eq!(surface.get_tile_bounds(TileCoord { x: 0, y: 0 }), (0, 0, 128, 128));
        assert_eq!(surface.get_tile_bounds(TileCoord { x: 1, y: 1 }), (128, 128, 22, 22));
    }

    #[test]
    fn test_edge_tile_data() {
        let surface = TiledSurface::new(150, 150, 128);

        let tile_data = surface.get_tile_data(TileCoord { x: 1, y: 1 });
        assert_eq!(tile_data.len(), 22 * 22);
    }

    #[test]
    fn test_region_data_clamped() {
        let mut surface = TiledSurface::new(10, 10, 4);
        surface.fill([1.0, 1.0, 1.0, 1.0]);

        assert_eq!(surface.get_region_data((8, 8, 5, 5)).len(), 4);
        assert!(surface.get_region_data((10, 0, 3, 3)).is_empty());
    }
}
