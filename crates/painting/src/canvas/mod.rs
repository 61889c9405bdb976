//! Canvas lifecycle manager
//!
//! `PaintingCanvas` owns everything one drawing surface needs:
//! - the raster surface (created by `initialize`, dropped by `teardown`)
//! - painter state and the effective paint derived from it
//! - the stroke session driven by pointer events
//! - the scroll lock held for the duration of a stroke
//!
//! It is host-agnostic: the page shell, the headless replay binary and the
//! tests all drive it through the same calls.

mod stroke;
mod surface_ops;

use glam::UVec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sketchpad_config::CanvasConfig;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::mapper::DisplayRect;
use crate::paint::{ColorParseError, EffectivePaint, PainterState, Rgb, Tool};
use crate::scroll_lock::{DocumentHost, ScrollLock};
use crate::session::StrokeState;
use crate::tiles::TiledSurface;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid background color: {0}")]
    InvalidBackground(#[from] ColorParseError),
    #[error("Canvas size must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// One freehand drawing surface and its interaction state
pub struct PaintingCanvas<H: DocumentHost> {
    config: CanvasConfig,
    background: Rgb,
    /// None until `initialize`, and again after `teardown`
    pub(crate) surface: Option<TiledSurface>,
    painter: PainterState,
    pub(crate) paint: EffectivePaint,
    pub(crate) stroke: StrokeState,
    pub(crate) scroll_lock: ScrollLock<H>,
    pub(crate) display: DisplayRect,
    pub(crate) rng: StdRng,
}

impl<H: DocumentHost> PaintingCanvas<H> {
    /// Create an uninitialized canvas. Nothing is allocated until `initialize`.
    pub fn new(config: CanvasConfig, host: H) -> Result<Self, CanvasError> {
        Self::with_scroll_lock(config, ScrollLock::new(host))
    }

    /// Create a canvas on a page that already has a scroll lock, e.g. one
    /// obtained from another canvas via `scroll_lock().share()`
    pub fn with_scroll_lock(
        config: CanvasConfig,
        scroll_lock: ScrollLock<H>,
    ) -> Result<Self, CanvasError> {
        if config.width == 0 || config.height == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        let background = config.background.parse::<Rgb>()?;
        let painter = PainterState::from_config(&config);
        let rng = match config.spray_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let logical = UVec2::new(config.width, config.height);

        Ok(Self {
            paint: painter.effective(background),
            display: DisplayRect::unscaled(logical),
            config,
            background,
            surface: None,
            painter,
            stroke: StrokeState::new(),
            scroll_lock,
            rng,
        })
    }

    /// Allocate the surface and fill it with the background. Idempotent.
    pub fn initialize(&mut self) {
        if self.surface.is_some() {
            debug!("PaintingCanvas::initialize: already initialized");
            return;
        }

        let mut surface =
            TiledSurface::with_default_tile_size(self.config.width, self.config.height);
        surface.fill(self.background.to_rgba());
        self.surface = Some(surface);
        self.refresh_paint();

        info!(
            "Canvas initialized: {}x{}, background {}, tool {}",
            self.config.width, self.config.height, self.background, self.painter.active_tool
        );
    }

    /// End any stroke, release the scroll lock and drop the surface
    pub fn teardown(&mut self) {
        self.end_stroke();
        self.scroll_lock.release();
        if self.surface.take().is_some() {
            info!("Canvas torn down");
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.painter.active_tool != tool {
            debug!("Tool: {} -> {}", self.painter.active_tool, tool);
        }
        self.painter.active_tool = tool;
        self.refresh_paint();
    }

    /// Set the active color from `#rrggbb`. An invalid value keeps the
    /// previous color.
    pub fn set_color(&mut self, color: &str) -> Result<(), ColorParseError> {
        match color.parse::<Rgb>() {
            Ok(rgb) => {
                self.painter.active_color = rgb;
                self.refresh_paint();
                debug!("Color: {}", rgb);
                Ok(())
            }
            Err(err) => {
                warn!("Rejected color {:?}: {}", color, err);
                Err(err)
            }
        }
    }

    /// Set the stroke width, clamped to the allowed range
    pub fn set_stroke_width(&mut self, width: u32) {
        let clamped = CanvasConfig::clamp_stroke_width(width);
        if clamped != width {
            debug!("Stroke width {} clamped to {}", width, clamped);
        }
        self.painter.stroke_width = clamped;
        self.refresh_paint();
    }

    /// Record where the canvas element currently sits on screen
    pub fn set_display_rect(&mut self, rect: DisplayRect) {
        self.display = rect;
    }

    pub(crate) fn refresh_paint(&mut self) {
        self.paint = self.painter.effective(self.background);
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    #[inline]
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_active()
    }

    /// Logical surface resolution
    pub fn logical_size(&self) -> UVec2 {
        UVec2::new(self.config.width, self.config.height)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn painter(&self) -> &PainterState {
        &self.painter
    }

    pub fn effective_paint(&self) -> &EffectivePaint {
        &self.paint
    }

    pub fn display_rect(&self) -> &DisplayRect {
        &self.display
    }

    pub fn scroll_lock(&self) -> &ScrollLock<H> {
        &self.scroll_lock
    }

    pub fn surface(&self) -> Option<&TiledSurface> {
        self.surface.as_ref()
    }
}

impl<H: DocumentHost> Drop for PaintingCanvas<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
