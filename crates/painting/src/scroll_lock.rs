//! Scroll lock held while a stroke is in progress
//!
//! On touch devices a drag over the canvas would otherwise scroll the page.
//! The lock overrides the document body's overflow, right padding and
//! position, and puts the exact previous values back on release. Release is
//! idempotent and also runs on drop, so a stroke that never ends cleanly
//! cannot leave the page locked.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

/// The body style properties the lock touches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyStyles {
    pub overflow: String,
    pub padding_right: String,
    pub position: String,
}

/// The host document the lock is applied to
pub trait DocumentHost {
    /// Current inline body styles
    fn body_styles(&self) -> BodyStyles;

    /// Overwrite the inline body styles
    fn set_body_styles(&mut self, styles: &BodyStyles);

    /// Window inner width, including the vertical scrollbar
    fn viewport_width(&self) -> f32;

    /// Document element client width, excluding the scrollbar
    fn document_client_width(&self) -> f32;
}

impl<T: DocumentHost> DocumentHost for Rc<RefCell<T>> {
    fn body_styles(&self) -> BodyStyles {
        self.borrow().body_styles()
    }

    fn set_body_styles(&mut self, styles: &BodyStyles) {
        self.borrow_mut().set_body_styles(styles);
    }

    fn viewport_width(&self) -> f32 {
        self.borrow().viewport_width()
    }

    fn document_client_width(&self) -> f32 {
        self.borrow().document_client_width()
    }
}

/// In-process document for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pub styles: BodyStyles,
    pub viewport_width: f32,
    pub client_width: f32,
    /// Number of style writes, for observing no-op releases
    pub style_writes: usize,
}

impl MemoryDocument {
    pub fn new(viewport_width: f32, client_width: f32) -> Self {
        Self {
            viewport_width,
            client_width,
            ..Default::default()
        }
    }
}

impl DocumentHost for MemoryDocument {
    fn body_styles(&self) -> BodyStyles {
        self.styles.clone()
    }

    fn set_body_styles(&mut self, styles: &BodyStyles) {
        self.styles = styles.clone();
        self.style_writes += 1;
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn document_client_width(&self) -> f32 {
        self.client_width
    }
}

/// Page-wide lock state, shared by every handle onto one document
struct LockState<H> {
    host: H,
    /// Styles captured by the first holder; `Some` while engaged
    saved: Option<BodyStyles>,
    holders: usize,
}

/// Scoped scroll suppression over a [`DocumentHost`]
///
/// The page has a single lock. Every canvas on the page holds a handle made
/// with [`ScrollLock::share`]: the first handle to acquire snapshots the body
/// styles and the last one to release restores them.
pub struct ScrollLock<H: DocumentHost> {
    shared: Rc<RefCell<LockState<H>>>,
    held: bool,
}

impl<H: DocumentHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            shared: Rc::new(RefCell::new(LockState {
                host,
                saved: None,
                holders: 0,
            })),
            held: false,
        }
    }

    /// Another handle onto the same page lock, initially not holding it
    pub fn share(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            held: false,
        }
    }

    /// Whether this handle holds the lock
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Whether any handle holds the lock, i.e. the page is locked
    pub fn is_engaged(&self) -> bool {
        self.shared.borrow().saved.is_some()
    }

    /// Number of handles currently holding the lock
    pub fn holders(&self) -> usize {
        self.shared.borrow().holders
    }

    /// Lock page scrolling. No-op if this handle already holds it.
    pub fn acquire(&mut self) {
        if self.held {
            trace!("ScrollLock::acquire: already held");
            return;
        }
        self.held = true;

        let mut state = self.shared.borrow_mut();
        state.holders += 1;
        if state.saved.is_some() {
            debug!("ScrollLock joined ({} holders)", state.holders);
            return;
        }

        let previous = state.host.body_styles();
        let scrollbar_width =
            (state.host.viewport_width() - state.host.document_client_width()).max(0.0);

        state.host.set_body_styles(&BodyStyles {
            overflow: "hidden".to_string(),
            // Keeps the layout from shifting when the scrollbar disappears
            padding_right: format!("{}px", scrollbar_width),
            position: "relative".to_string(),
        });
        debug!("ScrollLock acquired (scrollbar {}px)", scrollbar_width);
        state.saved = Some(previous);
    }

    /// Give up this handle's hold. The captured styles are restored once no
    /// handle holds the lock. No-op if not held.
    pub fn release(&mut self) {
        if !self.held {
            trace!("ScrollLock::release: not held");
            return;
        }
        self.held = false;

        let mut state = self.shared.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders > 0 {
            debug!("ScrollLock left ({} holders remain)", state.holders);
            return;
        }
        if let Some(previous) = state.saved.take() {
            state.host.set_body_styles(&previous);
            debug!("ScrollLock released");
        }
    }
}

impl<H: DocumentHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.release();
    }
}
