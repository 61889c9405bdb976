//! Tool bar commands.

use serde::{Deserialize, Serialize};

/// Commands from the tool bar and the clear/download buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    /// Select a tool by tag (`brush`, `marker`, `spray`, `eraser`)
    SetTool { tool: String },
    /// Set the paint color as `#rrggbb`
    SetColor { color: String },
    /// Set the stroke width in pixels (1-20)
    SetStrokeWidth { width: u32 },
    /// Refill the canvas with the background color
    Clear,
    /// Encode the canvas as PNG for download
    Export,
}
