//! PNG export of the canvas surface

use chrono::{DateTime, Utc};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;
use tracing::debug;

use crate::surface::CpuSurface;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Cannot export a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },
}

/// An encoded snapshot ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Encode the surface as an 8-bit RGBA PNG
pub fn export_png(surface: &CpuSurface) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySurface { width, height });
    }

    let pixels = surface.to_rgba8();
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        bytemuck::cast_slice(&pixels),
        width,
        height,
        ExtendedColorType::Rgba8,
    )?;

    debug!("export_png: {}x{} -> {} bytes", width, height, buf.len());
    Ok(buf)
}

/// `paint-<UTC timestamp>.png` with `:` replaced so the name is valid everywhere
pub fn export_filename(at: DateTime<Utc>) -> String {
    let stamp = at.format("%Y-%m-%dT%H:%M:%S").to_string().replace(':', "-");
    format!("paint-{}.png", stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_filename() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();
        assert_eq!(export_filename(at), "paint-2024-03-09T07-05-02.png");
    }

    #[test]
    fn test_export_png_decodes_to_same_pixels() {
        let mut surface = CpuSurface::new(4, 3);
        surface.fill([1.0, 1.0, 1.0, 1.0]);
        surface.set_pixel(2, 1, [1.0, 0.0, 0.0, 1.0]);

        let bytes = export_png(&surface).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(2, 1).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_export_empty_surface_fails() {
        let surface = CpuSurface::new(0, 10);
        assert!(matches!(
            export_png(&surface),
            Err(ExportError::EmptySurface { width: 0, height: 10 })
        ));
    }
}
