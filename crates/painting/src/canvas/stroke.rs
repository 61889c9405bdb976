//! Pointer event handling for the canvas

use glam::Vec2;
use tracing::{debug, info};

use crate::mapper::{PointerSample, map_pointer};
use crate::scroll_lock::DocumentHost;
use crate::tools;
use crate::types::PixelRegion;

use super::PaintingCanvas;

impl<H: DocumentHost> PaintingCanvas<H> {
    fn map_sample(&self, sample: &PointerSample) -> Option<Vec2> {
        let mapped = map_pointer(sample, self.logical_size(), &self.display);
        if mapped.is_none() {
            debug!("Dropping unmappable pointer sample {:?}", sample);
        }
        mapped
    }

    /// Start a stroke at the sample position.
    ///
    /// A pointer-down during an active stroke moves the path start without
    /// painting.
    pub fn pointer_down(&mut self, sample: &PointerSample) {
        if self.surface.is_none() {
            debug!("pointer_down: canvas not initialized, ignoring");
            return;
        }
        let Some(at) = self.map_sample(sample) else {
            return;
        };

        self.scroll_lock.acquire();
        if self.stroke.begin(at) {
            info!(
                "Stroke started at ({:.1}, {:.1}) with {}",
                at.x, at.y, self.paint.tool
            );
        } else {
            debug!("Stroke re-anchored at ({:.1}, {:.1})", at.x, at.y);
        }
    }

    /// Paint from the path position to the sample with the active tool.
    ///
    /// Returns the touched pixel region. Moves while idle are ignored.
    pub fn pointer_move(&mut self, sample: &PointerSample) -> Option<PixelRegion> {
        if !self.stroke.is_active() {
            return None;
        }
        let to = self.map_sample(sample)?;
        let surface = self.surface.as_mut()?;
        let (from, to) = self.stroke.advance(to)?;

        let region = tools::render(surface, from, to, &self.paint, &mut self.rng);
        debug!(
            "{} segment ({:.1}, {:.1}) -> ({:.1}, {:.1}): {:?}",
            self.paint.tool, from.x, from.y, to.x, to.y, region
        );
        region
    }

    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    /// Leaving the canvas ends the stroke the same way lifting does
    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    pub(crate) fn end_stroke(&mut self) {
        let Some(session) = self.stroke.end() else {
            return;
        };
        self.scroll_lock.release();
        info!("Stroke ended after {} segments", session.segments);
    }
}
