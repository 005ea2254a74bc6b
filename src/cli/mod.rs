//! Command-line parsing for the Bayes' theorem visualizer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the calculator and rendering code.
//!
//! Probabilities are taken as text and validated by the calculator, so a bad
//! value produces the same `Invalid input` error as in the TUI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_FALSE_POSITIVE, DEFAULT_LIKELIHOOD, DEFAULT_PRIOR};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bayes", version, about = "Bayes' theorem visualizer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (the default when no subcommand is given).
    Tui(TuiArgs),
    /// Compute once and print the breakdown (and an ASCII diagram) to stdout.
    Calc(CalcArgs),
}

/// Probability inputs shared by both subcommands.
#[derive(Debug, Args, Clone)]
pub struct ProbabilityArgs {
    /// Prior P(H).
    #[arg(short = 'p', long, default_value = DEFAULT_PRIOR, allow_hyphen_values = true)]
    pub prior: String,

    /// Likelihood P(e | H).
    #[arg(short = 'l', long, default_value = DEFAULT_LIKELIHOOD, allow_hyphen_values = true)]
    pub likelihood: String,

    /// False-positive rate P(e | ¬H).
    #[arg(short = 'f', long = "false-positive", default_value = DEFAULT_FALSE_POSITIVE, allow_hyphen_values = true)]
    pub false_positive: String,
}

/// Options for the TUI. The probabilities pre-fill the input fields.
#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    #[command(flatten)]
    pub probabilities: ProbabilityArgs,
}

/// Options for one-shot computation.
#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub probabilities: ProbabilityArgs,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Disable the ASCII diagram.
    #[arg(long)]
    pub no_plot: bool,

    /// Diagram width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Diagram height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Write the result (inputs, derived values, layout) to a JSON file.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Write the diagram to an SVG file.
    #[arg(long = "export-svg", value_name = "SVG")]
    pub export_svg: Option<PathBuf>,

    /// Log progress to stderr (overrides `BAYES_LOG` with `info`).
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
