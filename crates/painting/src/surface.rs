//! CPU raster surface the tools paint into

/// An RGBA CPU surface with fixed logical dimensions
/// Stores pixels as [f32; 4] in 0.0-1.0 range
pub struct CpuSurface {
    /// Surface dimensions, fixed at creation
    width: u32,
    height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as f32
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 0.0]; pixel_count],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole surface with a solid color
    pub fn fill(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blend a color onto an existing pixel using alpha compositing
    /// Formula: out = src * alpha + dst * (1 - alpha)
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], opacity: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[index];

        let src_alpha = (color[3] * opacity).clamp(0.0, 1.0);
        let inv_src_alpha = 1.0 - src_alpha;

        self.pixels[index] = [
            color[0] * src_alpha + dst[0] * inv_src_alpha,
            color[1] * src_alpha + dst[1] * inv_src_alpha,
            color[2] * src_alpha + dst[2] * inv_src_alpha,
            src_alpha + dst[3] * inv_src_alpha,
        ];
    }

    /// Quantize to 8-bit RGBA for encoding
    pub fn to_rgba8(&self) -> Vec<[u8; 4]> {
        self.pixels
            .iter()
            .map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}
