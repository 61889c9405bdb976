//! Top-level message enums for both directions.

use serde::{Deserialize, Serialize};

use crate::commands::PaintCommand;
use crate::error::IpcError;
use crate::input::{DisplayRect, PointerInput};

/// Messages from the host UI to the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCanvas {
    /// Mouse button pressed or touch started on the canvas element
    PointerDown(PointerInput),

    /// Pointer moved over the canvas element
    PointerMove(PointerInput),

    /// Mouse button released or touch ended
    PointerUp,

    /// Pointer left the canvas element
    PointerLeave,

    /// The canvas element's on-screen bounding box changed
    Layout(DisplayRect),

    /// Tool bar and clear/download buttons
    PaintCommand(PaintCommand),
}

/// Messages from the canvas back to the host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CanvasToUi {
    /// Canvas surface has been created and filled with the background
    Initialized { width: u32, height: u32 },

    /// Current tool indicator changed
    ToolChanged {
        tool: String,
        label: String,
        color_editable: bool,
    },

    /// Surface tiles repainted since the last report, as `[x, y, width, height]`
    TilesChanged { tiles: Vec<[u32; 4]> },

    /// An export finished
    Exported { filename: String, size_bytes: usize },

    /// Error notification
    Error { code: String, message: String },
}

impl UiToCanvas {
    /// Parse a single message from JSON
    pub fn from_json(json: &str) -> Result<Self, IpcError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CanvasToUi {
    /// Serialize a message to JSON
    pub fn to_json(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}
