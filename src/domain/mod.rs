//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the three probability inputs (`ProbabilityField`, `BayesInput`)
//! - computation outputs (`BayesResult`)
//! - diagram geometry (`DiagramLayout`, `DiagramPatch`, `PatchKind`)

pub mod types;

pub use types::*;
