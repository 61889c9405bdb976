//! Painter state: tool, color and width chosen by the user, and the
//! effective paint snapshot renderers read from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sketchpad_config::CanvasConfig;
use thiserror::Error;
use tracing::warn;

/// Drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Brush,
    Marker,
    Spray,
    Eraser,
}

impl Tool {
    /// Tool bar order
    pub const ALL: [Tool; 4] = [Tool::Brush, Tool::Marker, Tool::Spray, Tool::Eraser];

    /// Resolve a UI tag. Unknown tags fall back to the brush.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "brush" => Tool::Brush,
            "marker" => Tool::Marker,
            "spray" => Tool::Spray,
            "eraser" => Tool::Eraser,
            other => {
                warn!("Unrecognized tool tag {:?}, using brush", other);
                Tool::Brush
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Marker => "marker",
            Tool::Spray => "spray",
            Tool::Eraser => "eraser",
        }
    }

    /// Tool bar tooltip
    pub fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Marker => "Marker",
            Tool::Spray => "Spray",
            Tool::Eraser => "Eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Expected 6 hex digits, got {0:?}")]
    InvalidLength(String),
    #[error("Invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

/// An opaque sRGB color as entered in the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Surface pixel value, 0.0-1.0 per channel with full alpha
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` or `rrggbb`, either case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// What the user has selected in the tool bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PainterState {
    pub active_color: Rgb,
    pub active_tool: Tool,
    /// Always within [MIN_STROKE_WIDTH, MAX_STROKE_WIDTH]
    pub stroke_width: u32,
}

impl Default for PainterState {
    fn default() -> Self {
        Self {
            active_color: Rgb::BLACK,
            active_tool: Tool::Brush,
            stroke_width: sketchpad_config::DEFAULT_STROKE_WIDTH,
        }
    }
}

impl PainterState {
    /// Initial state from config. An unparsable color keeps the default black.
    pub fn from_config(config: &CanvasConfig) -> Self {
        let active_color = config.color.parse::<Rgb>().unwrap_or_else(|err| {
            warn!("Ignoring configured color: {}", err);
            Rgb::BLACK
        });
        Self {
            active_color,
            active_tool: Tool::from_tag(&config.tool),
            stroke_width: CanvasConfig::clamp_stroke_width(config.stroke_width),
        }
    }

    /// The color input is greyed out while erasing
    pub fn color_editable(&self) -> bool {
        self.active_tool != Tool::Eraser
    }

    /// Resolve the snapshot renderers paint with
    pub fn effective(&self, background: Rgb) -> EffectivePaint {
        let color = match self.active_tool {
            Tool::Eraser => background,
            _ => self.active_color,
        };
        EffectivePaint {
            tool: self.active_tool,
            color: color.to_rgba(),
            width: self.stroke_width as f32,
            background: background.to_rgba(),
        }
    }
}

/// Read-only paint configuration for one render call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivePaint {
    pub tool: Tool,
    /// Background color when erasing, otherwise the active color
    pub color: [f32; 4],
    /// Nominal stroke width in pixels
    pub width: f32,
    pub background: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_from_tag() {
        assert_eq!(Tool::from_tag("marker"), Tool::Marker);
        assert_eq!(Tool::from_tag(" Spray "), Tool::Spray);
        assert_eq!(Tool::from_tag("eraser"), Tool::Eraser);
        assert_eq!(Tool::from_tag("pencil"), Tool::Brush);
        assert_eq!(Tool::from_tag(""), Tool::Brush);
    }

    #[test]
    fn test_tool_tags_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_tag(tool.tag()), tool);
        }
        assert_eq!(serde_json::to_string(&Tool::Spray).unwrap(), "\"spray\"");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("#ff8000".parse::<Rgb>(), Ok(Rgb { r: 255, g: 128, b: 0 }));
        assert_eq!("00FF00".parse::<Rgb>(), Ok(Rgb { r: 0, g: 255, b: 0 }));
        assert!(matches!("#fff".parse::<Rgb>(), Err(ColorParseError::InvalidLength(_))));
        assert!(matches!("#gg0000".parse::<Rgb>(), Err(ColorParseError::InvalidDigit(_))));
        assert_eq!(Rgb { r: 1, g: 2, b: 255 }.to_string(), "#0102ff");
    }

    #[test]
    fn test_eraser_forces_background() {
        let state = PainterState {
            active_color: Rgb { r: 255, g: 0, b: 0 },
            active_tool: Tool::Eraser,
            stroke_width: 4,
        };
        let paint = state.effective(Rgb::WHITE);
        assert_eq!(paint.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(paint.width, 4.0);
        assert!(!state.color_editable());
    }

    #[test]
    fn test_non_eraser_uses_active_color() {
        let state = PainterState {
            active_color: Rgb { r: 255, g: 0, b: 0 },
            active_tool: Tool::Marker,
            stroke_width: 4,
        };
        assert_eq!(state.effective(Rgb::WHITE).color, [1.0, 0.0, 0.0, 1.0]);
        assert!(state.color_editable());
    }

    #[test]
    fn test_from_config_clamps_and_falls_back() {
        let config = CanvasConfig {
            color: "nope".to_string(),
            tool: "lasso".to_string(),
            stroke_width: 50,
            ..Default::default()
        };
        let state = PainterState::from_config(&config);
        assert_eq!(state.active_color, Rgb::BLACK);
        assert_eq!(state.active_tool, Tool::Brush);
        assert_eq!(state.stroke_width, 20);
    }
}
