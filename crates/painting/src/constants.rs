/// Default tile size for dirty tracking.
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Brush stroke is drawn wider than the nominal size so the falloff reads as soft.
pub const BRUSH_WIDTH_SCALE: f32 = 1.5;

/// Brush falloff stops as (offset, opacity), offsets relative to the stroke width.
pub const BRUSH_GRADIENT_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.5, 0.6), (1.0, 0.0)];

/// Flat opacity of the marker.
pub const MARKER_OPACITY: f32 = 0.6;

/// Spray dots per sample, per pixel of stroke width.
pub const SPRAY_DENSITY_PER_WIDTH: u32 = 2;

/// Spray scatter radius, per pixel of stroke width.
pub const SPRAY_RADIUS_PER_WIDTH: f32 = 5.0;

/// Spray dot radius is the stroke width divided by this.
pub const SPRAY_DOT_DIVISOR: f32 = 3.0;

/// Eraser is three times the nominal width.
pub const ERASER_WIDTH_SCALE: f32 = 3.0;
