//! Coverage rasterization for segments and discs
//!
//! Segments are covered by their distance field, so every stroke gets round
//! caps and round joins without separate cap geometry: a pixel is inside when
//! the distance from its center to the segment is at most half the width.

use glam::{DVec2, Vec2};
use tracing::trace;

use super::TiledSurface;
use crate::types::{BlendMode, PixelRegion};

/// Distance from `point` to the closed segment `a`-`b`
#[inline]
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Clip the segment `a`-`b` to the rectangle `min`..`max` (Liang-Barsky).
///
/// Runs in f64 so endpoints far outside the rectangle keep the clipped part
/// on the input line. Returns None if the segment misses the rectangle.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let (a, b, min, max) = (a.as_dvec2(), b.as_dvec2(), min.as_dvec2(), max.as_dvec2());
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| -> Vec2 {
        let point: DVec2 = a + d * t;
        point.as_vec2()
    };
    Some((at(t0), at(t1)))
}

impl TiledSurface {
    /// Clip a float bounding box to pixel rows/columns on the surface.
    /// Returns (x_min, y_min, x_max, y_max) with exclusive max, or None if empty.
    fn clip_bounds(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        let x_min = (min.x.floor().max(0.0) as u32).min(self.width());
        let y_min = (min.y.floor().max(0.0) as u32).min(self.height());
        let x_max = (max.x.ceil().max(0.0) as u32).min(self.width());
        let y_max = (max.y.ceil().max(0.0) as u32).min(self.height());

        (x_min < x_max && y_min < y_max).then_some((x_min, y_min, x_max, y_max))
    }

    #[inline]
    fn write_pixel(&mut self, x: u32, y: u32, color: [f32; 4], opacity: f32, blend_mode: BlendMode) {
        match blend_mode {
            BlendMode::Normal => self.surface.blend_pixel(x, y, color, opacity),
            BlendMode::Replace => self.surface.set_pixel(x, y, color),
        }
    }

    /// Stroke the segment `from`-`to` with the given half width.
    ///
    /// `opacity_at` receives each covered pixel's distance to the segment and
    /// returns the opacity to apply there; zero skips the pixel. Returns the
    /// touched pixel region, or None if nothing landed on the surface.
    pub fn stroke_segment(
        &mut self,
        from: Vec2,
        to: Vec2,
        half_width: f32,
        color: [f32; 4],
        blend_mode: BlendMode,
        opacity_at: impl Fn(f32) -> f32,
    ) -> Option<PixelRegion> {
        if !from.is_finite() || !to.is_finite() || half_width.is_nan() || half_width <= 0.0 {
            trace!("stroke_segment: skipped degenerate segment");
            return None;
        }

        // Only the part within reach of a pixel center can cover anything
        let reach = Vec2::splat(half_width);
        let extent = Vec2::new(self.width() as f32, self.height() as f32);
        let (from, to) = clip_segment(from, to, -reach, extent + reach)?;

        let (x_min, y_min, x_max, y_max) =
            self.clip_bounds(from.min(to) - half_width, from.max(to) + half_width)?;

        let mut painted: Option<(u32, u32, u32, u32)> = None;
        for py in y_min..y_max {
            for px in x_min..x_max {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let distance = distance_to_segment(center, from, to);
                // Also rejects NaN
                if !(distance <= half_width) {
                    continue;
                }
                let opacity = opacity_at(distance);
                if opacity <= 0.0 {
                    continue;
                }
                self.write_pixel(px, py, color, opacity, blend_mode);
                painted = Some(match painted {
                    None => (px, py, px, py),
                    Some((x0, y0, x1, y1)) => (x0.min(px), y0.min(py), x1.max(px), y1.max(py)),
                });
            }
        }

        let region = painted.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1));
        self.mark_painted(region);
        region
    }

    /// Fill a disc. The pixel containing the center is always covered so
    /// sub-pixel discs still leave a mark.
    pub fn fill_disc(
        &mut self,
        center: Vec2,
        radius: f32,
        color: [f32; 4],
        blend_mode: BlendMode,
    ) -> Option<PixelRegion> {
        if !center.is_finite() || radius.is_nan() || radius < 0.0 {
            return None;
        }

        let reach = radius.max(1.0);
        let (x_min, y_min, x_max, y_max) = self.clip_bounds(center - reach, center + reach)?;
        let home = center.floor();

        let mut painted: Option<(u32, u32, u32, u32)> = None;
        for py in y_min..y_max {
            for px in x_min..x_max {
                let pixel_center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let contains_center = px as f32 == home.x && py as f32 == home.y;
                if !contains_center && pixel_center.distance(center) > radius {
                    continue;
                }
                self.write_pixel(px, py, color, 1.0, blend_mode);
                painted = Some(match painted {
                    None => (px, py, px, py),
                    Some((x0, y0, x1, y1)) => (x0.min(px), y0.min(py), x1.max(px), y1.max(py)),
                });
            }
        }

        let region = painted.map(|(x0, y0, x1, y1)| (x0, y0, x1 - x0 + 1, y1 - y0 + 1));
        self.mark_painted(region);
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn white_surface(size: u32) -> TiledSurface {
        let mut surface = TiledSurface::new(size, size, 64);
        surface.fill(WHITE);
        surface.take_dirty_tiles();
        surface
    }

    #[test]
    fn test_distance_to_segment() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!((distance_to_segment(Vec2::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-6);
        assert!((distance_to_segment(Vec2::new(-4.0, 3.0), a, b) - 5.0).abs() < 1e-6);
        // Degenerate segment is a point
        assert!((distance_to_segment(Vec2::new(3.0, 4.0), a, a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_stroke_segment_covers_span() {
        let mut surface = white_surface(100);
        let region = surface.stroke_segment(
            Vec2::new(10.0, 50.0),
            Vec2::new(90.0, 50.0),
            2.0,
            RED,
            BlendMode::Normal,
            |_| 1.0,
        );

        let (x, y, w, h) = region.unwrap();
        assert!(x >= 8 && x + w <= 92);
        assert!(y >= 48 && y + h <= 52);
        assert_eq!(surface.surface().get_pixel(50, 50), Some(RED));
        assert_eq!(surface.surface().get_pixel(50, 45), Some(WHITE));
        assert!(surface.has_dirty_tiles());
    }

    #[test]
    fn test_zero_length_segment_paints_round_dot() {
        let mut surface = white_surface(64);
        let center = Vec2::new(32.0, 32.0);
        surface.stroke_segment(center, center, 4.0, RED, BlendMode::Normal, |_| 1.0);

        assert_eq!(surface.surface().get_pixel(32, 32), Some(RED));
        // Corner of the bounding square is outside the circle
        assert_eq!(surface.surface().get_pixel(28, 28), Some(WHITE));
    }

    #[test]
    fn test_stroke_segment_off_surface() {
        let mut surface = white_surface(32);
        let region = surface.stroke_segment(
            Vec2::new(-50.0, -50.0),
            Vec2::new(-40.0, -50.0),
            3.0,
            RED,
            BlendMode::Normal,
            |_| 1.0,
        );
        assert!(region.is_none());
        assert!(!surface.has_dirty_tiles());
    }

    #[test]
    fn test_stroke_segment_rejects_nan() {
        let mut surface = white_surface(32);
        let region = surface.stroke_segment(
            Vec2::new(f32::NAN, 1.0),
            Vec2::new(10.0, 10.0),
            3.0,
            RED,
            BlendMode::Normal,
            |_| 1.0,
        );
        assert!(region.is_none());
    }

    #[test]
    fn test_far_endpoints_stay_thin() {
        let mut surface = white_surface(100);
        let region = surface.stroke_segment(
            Vec2::new(-1e20, -1e20),
            Vec2::new(1e20, 1e20),
            2.5,
            RED,
            BlendMode::Normal,
            |_| 0.6,
        );

        assert!(region.is_some());
        assert_eq!(surface.surface().get_pixel(90, 5), Some(WHITE));
        assert_eq!(surface.surface().get_pixel(5, 90), Some(WHITE));
    }

    #[test]
    fn test_long_horizontal_segment_is_clipped_to_surface() {
        let mut surface = white_surface(100);
        let region = surface.stroke_segment(
            Vec2::new(-1e12, 50.0),
            Vec2::new(1e12, 50.0),
            3.0,
            RED,
            BlendMode::Normal,
            |_| 1.0,
        );

        assert_eq!(region, Some((0, 47, 100, 6)));
        assert_eq!(surface.surface().get_pixel(50, 50), Some(RED));
        assert_eq!(surface.surface().get_pixel(50, 40), Some(WHITE));
    }

    #[test]
    fn test_clip_segment() {
        let min = Vec2::ZERO;
        let max = Vec2::new(10.0, 10.0);
        let (a, b) =
            clip_segment(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0), min, max).unwrap();
        assert_eq!((a, b), (Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0)));
        assert!(clip_segment(Vec2::new(-5.0, -1.0), Vec2::new(15.0, -1.0), min, max).is_none());
        // Degenerate segment inside the rectangle survives
        let inside = Vec2::new(3.0, 4.0);
        assert_eq!(clip_segment(inside, inside, min, max), Some((inside, inside)));
    }

    #[test]
    fn test_replace_ignores_existing_color() {
        let mut surface = white_surface(32);
        surface.stroke_segment(
            Vec2::new(4.0, 16.0),
            Vec2::new(28.0, 16.0),
            3.0,
            RED,
            BlendMode::Normal,
            |_| 0.5,
        );
        surface.stroke_segment(
            Vec2::new(4.0, 16.0),
            Vec2::new(28.0, 16.0),
            3.0,
            WHITE,
            BlendMode::Replace,
            |_| 1.0,
        );
        assert!(surface.surface().pixels().iter().all(|p| *p == WHITE));
    }

    #[test]
    fn test_fill_disc_subpixel_radius() {
        let mut surface = white_surface(16);
        let region = surface.fill_disc(Vec2::new(8.9, 3.1), 0.3, RED, BlendMode::Normal);

        assert_eq!(region, Some((8, 3, 1, 1)));
        assert_eq!(surface.surface().get_pixel(8, 3), Some(RED));
    }

    #[test]
    fn test_fill_disc_radius() {
        let mut surface = white_surface(32);
        surface.fill_disc(Vec2::new(16.0, 16.0), 3.0, RED, BlendMode::Normal);

        assert_eq!(surface.surface().get_pixel(16, 16), Some(RED));
        assert_eq!(surface.surface().get_pixel(18, 16), Some(RED));
        assert_eq!(surface.surface().get_pixel(20, 16), Some(WHITE));
    }
}
