//! Sketchpad painting engine - freehand strokes on a fixed-size raster
//!
//! This crate provides the drawing core used by the sketchpad hosts:
//! - [`surface`] - CPU RGBA surface with source-over blending
//! - [`tiles`] - Tile management with dirty tracking and segment/disc coverage
//! - [`mapper`] - Pointer to canvas coordinate mapping
//! - [`paint`] - Tools, colors and the effective paint snapshot
//! - [`tools`] - Brush, marker, spray and eraser renderers
//! - [`session`] - Stroke session state machine
//! - [`scroll_lock`] - Page scroll suppression held during a stroke
//! - [`canvas`] - Canvas lifecycle manager tying it all together
//! - [`export`] - PNG export

pub mod canvas;
pub mod constants;
pub mod export;
pub mod mapper;
pub mod paint;
pub mod scroll_lock;
pub mod session;
pub mod surface;
pub mod tiles;
pub mod tools;
pub mod types;

pub use canvas::*;
pub use constants::*;
pub use export::*;
pub use mapper::*;
pub use paint::*;
pub use scroll_lock::*;
pub use session::*;
pub use surface::*;
pub use tiles::*;
pub use types::*;
