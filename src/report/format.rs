//! Reporting utilities: the numeric breakdown and the machine-readable summary.
//!
//! We keep formatting code in one place so:
//! - the calculator stays free of presentation concerns
//! - output changes are localized (the golden tests below pin them)

use serde::Serialize;

use crate::domain::{BayesInput, BayesResult, DiagramLayout};

/// Name written into JSON outputs.
pub const TOOL_NAME: &str = "bayes-viz";

/// Machine-readable summary of one computation (`--json`, JSON export).
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub tool: String,
    pub input: BayesInput,
    pub result: SummaryValues,
    pub layout: DiagramLayout,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryValues {
    pub not_prior: f64,
    pub joint_h: f64,
    pub joint_not_h: f64,
    pub evidence: f64,
    pub posterior: f64,
}

pub fn summary(result: &BayesResult, layout: &DiagramLayout) -> ResultSummary {
    ResultSummary {
        tool: TOOL_NAME.to_string(),
        input: result.input,
        result: SummaryValues {
            not_prior: result.not_prior,
            joint_h: result.joint_h,
            joint_not_h: result.joint_not_h,
            evidence: result.evidence,
            posterior: result.posterior,
        },
        layout: *layout,
    }
}

/// Step-by-step breakdown shown in the results panel.
pub fn format_explanation(result: &BayesResult) -> String {
    let input = &result.input;
    let mut out = String::new();

    out.push_str(&format!("P(H) = {:.2}\n", input.prior()));
    out.push_str(&format!("P(¬H) = {:.2}\n", result.not_prior));
    out.push_str(&format!("P(e | H) = {:.2}\n", input.likelihood_given_h()));
    out.push_str(&format!("P(e | ¬H) = {:.2}\n", input.likelihood_given_not_h()));
    out.push('\n');
    out.push_str(&format!("P(e ∩ H) = {:.3}\n", result.joint_h));
    out.push_str(&format!("P(e ∩ ¬H) = {:.3}\n", result.joint_not_h));
    out.push_str(&format!("P(e) = {:.3}\n", result.evidence));
    out.push('\n');
    out.push_str(&format!("P(H | e) = {:.3}\n", result.posterior));

    out
}

/// Title line of the diagram.
pub fn format_title(result: &BayesResult) -> String {
    format!("P(H|e) = {:.3}", result.posterior)
}

/// Full terminal report for `bayes calc`.
pub fn format_run_summary(result: &BayesResult, layout: &DiagramLayout) -> String {
    let mut out = String::new();
    out.push_str("=== bayes - Bayes' Theorem Visualizer ===\n");
    out.push_str(&format_explanation(result));
    out.push_str(&format!(
        "\nCanvas: {}x{} | H column={} | ¬H column={} | fill H={} | fill ¬H={}\n",
        layout.canvas_width,
        layout.canvas_height,
        layout.column_h_split,
        layout.column_not_h_width(),
        layout.fill_height_h,
        layout.fill_height_not_h,
    ));
    out
}
