//! Input/output helpers.
//!
//! - result JSON export (`export`)
//! - diagram SVG export (`svg`)

pub mod export;
pub mod svg;

pub use export::*;
pub use svg::*;
