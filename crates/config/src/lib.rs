//! Shared configuration for Sketchpad
//!
//! This crate provides the single source of truth for the canvas logical
//! resolution, background color and painter defaults shared by the
//! painting engine and the host application.

use serde::{Deserialize, Serialize};

/// Default canvas width in logical pixels
pub const DEFAULT_WIDTH: u32 = 854;

/// Default canvas height in logical pixels
pub const DEFAULT_HEIGHT: u32 = 480;

/// Background color the canvas is filled with on creation and clear
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Initial paint color
pub const DEFAULT_COLOR: &str = "#000000";

/// Initial tool tag
pub const DEFAULT_TOOL: &str = "brush";

/// Initial stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Smallest stroke width the size slider produces
pub const MIN_STROKE_WIDTH: u32 = 1;

/// Largest stroke width the size slider produces
pub const MAX_STROKE_WIDTH: u32 = 20;

/// Canvas configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Logical bitmap width, fixed for the lifetime of a canvas
    pub width: u32,
    /// Logical bitmap height, fixed for the lifetime of a canvas
    pub height: u32,
    /// Background color as `#rrggbb`
    pub background: String,
    /// Initial paint color as `#rrggbb`
    pub color: String,
    /// Initial tool tag
    pub tool: String,
    /// Initial stroke width
    pub stroke_width: u32,
    /// Fixed seed for the spray scatter; `None` seeds from OS entropy
    pub spray_seed: Option<u64>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
            color: DEFAULT_COLOR.to_string(),
            tool: DEFAULT_TOOL.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            spray_seed: None,
        }
    }
}

impl CanvasConfig {
    /// Create a config with the given logical dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Builder-style spray seed override
    pub fn with_spray_seed(mut self, seed: u64) -> Self {
        self.spray_seed = Some(seed);
        self
    }

    /// Width as f32 for scaling calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Height as f32 for scaling calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Aspect ratio the canvas element is laid out with
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width_f32() / self.height_f32()
    }

    /// Clamp a requested stroke width into the supported range
    pub fn clamp_stroke_width(width: u32) -> u32 {
        width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CanvasConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.background, "#ffffff");
        assert_eq!(config.stroke_width, DEFAULT_STROKE_WIDTH);
        assert!(config.spray_seed.is_none());
    }

    #[test]
    fn test_aspect_ratio() {
        let config = CanvasConfig::default();
        assert!((config.aspect_ratio() - 854.0 / 480.0).abs() < 1e-6);
        assert_eq!(CanvasConfig::new(10, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_clamp_stroke_width() {
        assert_eq!(CanvasConfig::clamp_stroke_width(0), 1);
        assert_eq!(CanvasConfig::clamp_stroke_width(7), 7);
        assert_eq!(CanvasConfig::clamp_stroke_width(99), 20);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{"width": 320, "spray_seed": 7}"#).unwrap();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.spray_seed, Some(7));
        assert_eq!(config.tool, "brush");
    }
}
