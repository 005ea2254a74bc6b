//! Reporting: explanation text, terminal summary, JSON summary.

pub mod format;

pub use format::*;
