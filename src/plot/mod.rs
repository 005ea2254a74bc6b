//! Plain-text rendering of the diagram.

pub mod ascii;

pub use ascii::*;
