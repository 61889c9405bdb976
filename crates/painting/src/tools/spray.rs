//! Spray: random scatter of small filled dots around the sample point
//!
//! Output is randomized per call. The random source is passed in so tests
//! and replays can seed it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use tracing::trace;

use crate::constants::{SPRAY_DENSITY_PER_WIDTH, SPRAY_DOT_DIVISOR, SPRAY_RADIUS_PER_WIDTH};
use crate::paint::EffectivePaint;
use crate::tiles::TiledSurface;
use crate::types::{union_regions, BlendMode, PixelRegion};

/// Dots placed by one spray sample
#[derive(Debug, Clone, Default)]
pub struct SprayOutput {
    /// Dot centers, including any that fell off the surface
    pub dots: Vec<Vec2>,
    pub region: Option<PixelRegion>,
}

pub fn paint<R: Rng + ?Sized>(
    surface: &mut TiledSurface,
    at: Vec2,
    paint: &EffectivePaint,
    rng: &mut R,
) -> SprayOutput {
    if !at.is_finite() {
        return SprayOutput::default();
    }

    let density = paint.width.max(0.0) as u32 * SPRAY_DENSITY_PER_WIDTH;
    let scatter = paint.width * SPRAY_RADIUS_PER_WIDTH;
    let dot_radius = paint.width / SPRAY_DOT_DIVISOR;

    let mut output = SprayOutput {
        dots: Vec::with_capacity(density as usize),
        region: None,
    };
    for _ in 0..density {
        let angle = rng.gen_range(0.0..TAU);
        let distance = rng.gen_range(0.0..=scatter);
        let center = at + Vec2::from_angle(angle) * distance;

        let region = surface.fill_disc(center, dot_radius, paint.color, BlendMode::Normal);
        output.region = union_regions(output.region, region);
        output.dots.push(center);
    }

    trace!(
        "spray: {} dots around ({:.1}, {:.1}), scatter={:.1}",
        output.dots.len(),
        at.x,
        at.y,
        scatter
    );
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Tool;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn spray(width: f32) -> EffectivePaint {
        EffectivePaint {
            tool: Tool::Spray,
            color: [0.0, 0.0, 1.0, 1.0],
            width,
            background: WHITE,
        }
    }

    #[test]
    fn test_dot_count_and_scatter() {
        let mut rng = StdRng::seed_from_u64(7);
        for width in [1.0_f32, 5.0, 20.0] {
            let mut surface = TiledSurface::new(400, 400, 128);
            surface.fill(WHITE);
            let at = Vec2::new(200.0, 200.0);

            let output = paint(&mut surface, at, &spray(width), &mut rng);

            assert!(output.dots.len() <= (width as usize) * 2);
            for dot in &output.dots {
                assert!(dot.distance(at) <= width * 5.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_painted_pixels_stay_in_reach() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut surface = TiledSurface::new(200, 200, 64);
        surface.fill(WHITE);
        let at = Vec2::new(100.0, 100.0);
        let width = 6.0;

        let output = paint(&mut surface, at, &spray(width), &mut rng);
        assert!(output.region.is_some());

        // Dot reach plus one pixel diagonal for the always-covered center pixel
        let reach = width * 5.0 + width / 3.0 + 1.5;
        let mut painted = 0;
        for y in 0..200 {
            for x in 0..200 {
                if surface.surface().get_pixel(x, y) != Some(WHITE) {
                    painted += 1;
                    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                    assert!(center.distance(at) <= reach);
                }
            }
        }
        assert!(painted > 0);
    }

    #[test]
    fn test_seeded_spray_is_reproducible() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut surface = TiledSurface::new(100, 100, 64);
            surface.fill(WHITE);
            paint(&mut surface, Vec2::new(50.0, 50.0), &spray(4.0), &mut rng).dots
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn test_spray_near_edge_is_clipped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut surface = TiledSurface::new(32, 32, 32);
        surface.fill(WHITE);

        let output = paint(&mut surface, Vec2::new(0.0, 0.0), &spray(10.0), &mut rng);

        assert_eq!(output.dots.len(), 20);
        if let Some((x, y, w, h)) = output.region {
            assert!(x + w <= 32 && y + h <= 32);
        }
    }
}
