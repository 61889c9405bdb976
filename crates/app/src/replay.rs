//! Replays host UI messages into a headless canvas

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use glam::Vec2;
use painting::{
    DisplayRect, ExportedImage, MemoryDocument, PaintingCanvas, PointerSample, Tool,
};
use sketchpad_config::CanvasConfig;
use sketchpad_ipc::{CanvasToUi, PaintCommand, PointerInput, PointerSource, UiToCanvas};
use tracing::{debug, warn};

/// Viewport used for the in-memory document: a 15px scrollbar, like a
/// typical desktop browser
const VIEWPORT_WIDTH: f32 = 1280.0;
const CLIENT_WIDTH: f32 = 1265.0;

pub type HeadlessCanvas = PaintingCanvas<Rc<RefCell<MemoryDocument>>>;

/// Drives a canvas from a sequence of [`UiToCanvas`] messages
pub struct Replayer {
    canvas: HeadlessCanvas,
    document: Rc<RefCell<MemoryDocument>>,
    exports: Vec<ExportedImage>,
}

impl Replayer {
    /// Create and initialize the canvas. `display_scale` is the ratio of the
    /// on-screen box to the logical size until a `Layout` message arrives.
    pub fn new(config: CanvasConfig, display_scale: f32) -> Result<Self> {
        let document = Rc::new(RefCell::new(MemoryDocument::new(VIEWPORT_WIDTH, CLIENT_WIDTH)));
        let mut canvas = PaintingCanvas::new(config, document.clone())
            .context("Failed to create canvas")?;

        let logical = canvas.logical_size().as_vec2();
        canvas.set_display_rect(DisplayRect::new(
            0.0,
            0.0,
            logical.x * display_scale,
            logical.y * display_scale,
        ));
        canvas.initialize();
        // Covered by the Initialized message
        canvas.take_dirty_tiles();

        Ok(Self {
            canvas,
            document,
            exports: Vec::new(),
        })
    }

    /// Message announcing the freshly initialized canvas
    pub fn initialized(&self) -> CanvasToUi {
        let size = self.canvas.logical_size();
        CanvasToUi::Initialized {
            width: size.x,
            height: size.y,
        }
    }

    pub fn canvas(&self) -> &HeadlessCanvas {
        &self.canvas
    }

    #[cfg(test)]
    pub fn document(&self) -> &Rc<RefCell<MemoryDocument>> {
        &self.document
    }

    /// Exports produced since the last call
    pub fn take_exports(&mut self) -> Vec<ExportedImage> {
        std::mem::take(&mut self.exports)
    }

    /// Apply one message, returning any replies for the host
    pub fn handle(&mut self, message: UiToCanvas) -> Result<Vec<CanvasToUi>> {
        debug!("Replaying {:?}", message);
        match message {
            UiToCanvas::PointerDown(input) => {
                self.canvas.pointer_down(&to_sample(&input));
            }
            UiToCanvas::PointerMove(input) => {
                self.canvas.pointer_move(&to_sample(&input));
            }
            UiToCanvas::PointerUp => {
                self.canvas.pointer_up();
                return Ok(self.flush_tiles().into_iter().collect());
            }
            UiToCanvas::PointerLeave => {
                self.canvas.pointer_leave();
                return Ok(self.flush_tiles().into_iter().collect());
            }
            UiToCanvas::Layout(rect) => {
                self.canvas.set_display_rect(DisplayRect::new(
                    rect.left,
                    rect.top,
                    rect.width,
                    rect.height,
                ));
            }
            UiToCanvas::PaintCommand(command) => return self.handle_command(command),
        }
        Ok(Vec::new())
    }

    fn handle_command(&mut self, command: PaintCommand) -> Result<Vec<CanvasToUi>> {
        let reply = match command {
            PaintCommand::SetTool { tool } => {
                let tool = Tool::from_tag(&tool);
                self.canvas.set_tool(tool);
                Some(CanvasToUi::ToolChanged {
                    tool: tool.tag().to_string(),
                    label: tool.label().to_string(),
                    color_editable: self.canvas.painter().color_editable(),
                })
            }
            PaintCommand::SetColor { color } => match self.canvas.set_color(&color) {
                Ok(()) => None,
                Err(err) => Some(CanvasToUi::Error {
                    code: "invalid_color".to_string(),
                    message: err.to_string(),
                }),
            },
            PaintCommand::SetStrokeWidth { width } => {
                self.canvas.set_stroke_width(width);
                None
            }
            PaintCommand::Clear => {
                self.canvas.clear();
                self.flush_tiles()
            }
            PaintCommand::Export => {
                let exported = self.canvas.export_now().context("Failed to export canvas")?;
                match exported {
                    Some(image) => {
                        let reply = CanvasToUi::Exported {
                            filename: image.filename.clone(),
                            size_bytes: image.bytes.len(),
                        };
                        self.exports.push(image);
                        Some(reply)
                    }
                    None => {
                        warn!("Export requested before the canvas was initialized");
                        None
                    }
                }
            }
        };
        Ok(reply.into_iter().collect())
    }

    /// Report the tiles repainted since the last report, if any
    fn flush_tiles(&mut self) -> Option<CanvasToUi> {
        let mut tiles: Vec<[u32; 4]> = self
            .canvas
            .take_dirty_tiles()
            .into_iter()
            .filter_map(|coord| self.canvas.tile_bounds(coord))
            .map(|(x, y, width, height)| [x, y, width, height])
            .collect();
        // Row-major, so replays produce stable output
        tiles.sort_unstable_by_key(|&[x, y, _, _]| (y, x));
        (!tiles.is_empty()).then_some(CanvasToUi::TilesChanged { tiles })
    }

    /// End any open stroke and release the page
    pub fn finish(&mut self) {
        self.canvas.teardown();
        let document = self.document.borrow();
        if document.styles.overflow == "hidden" {
            warn!("Page still scroll-locked after teardown: {:?}", document.styles);
        } else {
            debug!("Page styles after teardown: {:?}", document.styles);
        }
    }
}

fn to_sample(input: &PointerInput) -> PointerSample {
    match input.source {
        PointerSource::Mouse => match input.points.first() {
            Some(&[x, y]) => PointerSample::Mouse(Vec2::new(x, y)),
            // A mouse sample without a point maps to nothing, like an empty touch
            None => PointerSample::Touch(Vec::new()),
        },
        PointerSource::Touch => PointerSample::Touch(
            input.points.iter().map(|&[x, y]| Vec2::new(x, y)).collect(),
        ),
    }
}
