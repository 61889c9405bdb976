//! Stroke session state machine
//!
//! Idle -> (pointer down) -> Active -> (pointer up / leave) -> Idle.
//! While active the session holds the path position the next segment
//! starts from.

use glam::Vec2;

/// One continuous pointer-down to pointer-up interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSession {
    /// Where the next segment starts
    pub anchor: Vec2,
    /// Samples painted so far
    pub segments: u32,
}

/// Stroke state: `None` while idle
#[derive(Debug, Default)]
pub struct StrokeState {
    session: Option<StrokeSession>,
}

impl StrokeState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&StrokeSession> {
        self.session.as_ref()
    }

    /// Begin a path at `at`. Returns true if this started a new stroke,
    /// false if an active stroke was re-anchored.
    pub fn begin(&mut self, at: Vec2) -> bool {
        let started = self.session.is_none();
        self.session = Some(StrokeSession {
            anchor: at,
            segments: 0,
        });
        started
    }

    /// Extend the path to `to`, returning the segment to paint.
    /// Idle sessions return None.
    pub fn advance(&mut self, to: Vec2) -> Option<(Vec2, Vec2)> {
        let session = self.session.as_mut()?;
        let from = session.anchor;
        session.anchor = to;
        session.segments += 1;
        Some((from, to))
    }

    /// Close the path. Returns the finished session, or None if already idle.
    pub fn end(&mut self) -> Option<StrokeSession> {
        self.session.take()
    }
}
