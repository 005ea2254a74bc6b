//! Bayes' theorem calculator.
//!
//! Pure functions only: validation, the posterior computation, and parsing of
//! the UI's text fields.

pub mod bayes;

pub use bayes::*;
