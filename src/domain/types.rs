//! Shared domain types.
//!
//! These types are intentionally small, `Copy` and serializable so they can be:
//!
//! - passed between the calculator, the layout code and the renderers
//! - printed as JSON by `bayes calc --json`
//! - exported alongside the diagram

use serde::Serialize;

/// Default text for the P(H) field.
pub const DEFAULT_PRIOR: &str = "0.1";
/// Default text for the P(e | H) field.
pub const DEFAULT_LIKELIHOOD: &str = "0.9";
/// Default text for the P(e | ¬H) field.
pub const DEFAULT_FALSE_POSITIVE: &str = "0.2";

/// Default diagram canvas (pixels), square like the original figure.
pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// One of the three probability inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityField {
    /// P(H)
    Prior,
    /// P(e | H)
    Likelihood,
    /// P(e | ¬H)
    FalsePositive,
}

impl ProbabilityField {
    pub const ALL: [ProbabilityField; 3] = [
        ProbabilityField::Prior,
        ProbabilityField::Likelihood,
        ProbabilityField::FalsePositive,
    ];

    /// Label shown next to the input field.
    pub fn label(self) -> &'static str {
        match self {
            ProbabilityField::Prior => "P(H)",
            ProbabilityField::Likelihood => "P(e | H)",
            ProbabilityField::FalsePositive => "P(e | ¬H)",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            ProbabilityField::Prior => DEFAULT_PRIOR,
            ProbabilityField::Likelihood => DEFAULT_LIKELIHOOD,
            ProbabilityField::FalsePositive => DEFAULT_FALSE_POSITIVE,
        }
    }

    /// Position in `ALL` (and in the presenter's field array).
    pub fn index(self) -> usize {
        match self {
            ProbabilityField::Prior => 0,
            ProbabilityField::Likelihood => 1,
            ProbabilityField::FalsePositive => 2,
        }
    }
}

impl std::fmt::Display for ProbabilityField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated calculator input. Every field is finite and within `[0, 1]`.
///
/// Construct via [`BayesInput::new`] (or `calc::parse_input` for text fields).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BayesInput {
    pub(crate) prior: f64,
    pub(crate) likelihood_given_h: f64,
    pub(crate) likelihood_given_not_h: f64,
}

impl BayesInput {
    pub fn prior(&self) -> f64 {
        self.prior
    }

    pub fn likelihood_given_h(&self) -> f64 {
        self.likelihood_given_h
    }

    pub fn likelihood_given_not_h(&self) -> f64 {
        self.likelihood_given_not_h
    }
}

/// Derived quantities of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BayesResult {
    pub input: BayesInput,
    /// P(¬H) = 1 - P(H)
    pub not_prior: f64,
    /// P(e ∩ H) = P(H) · P(e | H)
    pub joint_h: f64,
    /// P(e ∩ ¬H) = P(¬H) · P(e | ¬H)
    pub joint_not_h: f64,
    /// P(e) = P(e ∩ H) + P(e ∩ ¬H)
    pub evidence: f64,
    /// P(H | e)
    pub posterior: f64,
}

/// Pixel geometry of the proportional-area diagram.
///
/// The canvas is split into an H column (`column_h_split` wide) and a ¬H column
/// (the remainder). Each column is filled from the bottom to its fill height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagramLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub column_h_split: u32,
    pub fill_height_h: u32,
    pub fill_height_not_h: u32,
}

impl DiagramLayout {
    /// Width of the ¬H column. Both columns always sum to the canvas width.
    pub fn column_not_h_width(&self) -> u32 {
        self.canvas_width - self.column_h_split
    }
}

/// Which area of the diagram a patch represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchKind {
    Hypothesis,
    NotHypothesis,
    EvidenceGivenH,
    EvidenceGivenNotH,
}

impl PatchKind {
    /// Legend label.
    pub fn label(self) -> &'static str {
        match self {
            PatchKind::Hypothesis => "P(H)",
            PatchKind::NotHypothesis => "P(¬H)",
            PatchKind::EvidenceGivenH => "P(e | H)",
            PatchKind::EvidenceGivenNotH => "P(e | ¬H)",
        }
    }

    /// High-contrast fill color (RGB).
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            PatchKind::Hypothesis => (0xFF, 0x7F, 0x0E),
            PatchKind::NotHypothesis => (0x2C, 0xA0, 0x2C),
            PatchKind::EvidenceGivenH => (0x1F, 0x77, 0xB4),
            PatchKind::EvidenceGivenNotH => (0xD6, 0x27, 0x28),
        }
    }
}

/// A filled rectangle of the diagram, bottom-left origin, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagramPatch {
    pub kind: PatchKind,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
