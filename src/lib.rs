//! `bayes-viz` library crate.
//!
//! The binary (`bayes`) is a thin wrapper around this library so that:
//!
//! - the calculator and layout are testable without spawning processes
//! - the terminal UI and the one-shot CLI share the same presenter
//! - renderers (TUI widget, ASCII, SVG) all draw from one geometry

pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod layout;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
