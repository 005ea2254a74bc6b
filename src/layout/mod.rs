//! Diagram geometry.
//!
//! Pure pixel arithmetic shared by every renderer (terminal widget, ASCII plot,
//! SVG export), so they all draw the same proportions.

pub mod diagram;

pub use diagram::*;
