//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads configuration and installs logging
//! - parses CLI arguments
//! - runs a one-shot computation (`calc`) or the interactive TUI (`tui`)

use clap::Parser;

use crate::cli::{CalcArgs, Command, TuiArgs};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::logging::{self, LogTarget};

pub mod presenter;

pub use presenter::{Presenter, Render};

/// Entry point for the `bayes` binary.
pub fn run() -> Result<(), AppError> {
    // We want `bayes` and `bayes -p 0.3` to behave like `bayes tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let mut config = AppConfig::from_env()?;

    match cli.command {
        Command::Calc(args) => {
            if args.verbose {
                config.log_filter = "info".to_string();
            }
            logging::init(&config, LogTarget::Stderr)?;
            handle_calc(args, &config)
        }
        Command::Tui(args) => {
            logging::init(&config, LogTarget::FileOnly)?;
            handle_tui(args, &config)
        }
    }
}

fn handle_calc(args: CalcArgs, config: &AppConfig) -> Result<(), AppError> {
    let p = &args.probabilities;
    let mut presenter = Presenter::new(config.canvas_width, config.canvas_height).with_fields(
        &p.prior,
        &p.likelihood,
        &p.false_positive,
    );
    let render = presenter.visualize()?;

    if args.json {
        println!("{}", crate::io::result_json_string(&render.result, &render.layout)?);
    } else {
        println!("{}", crate::report::format_run_summary(&render.result, &render.layout));
        if !args.no_plot {
            println!(
                "{}",
                crate::plot::render_ascii_diagram(&render.result, args.width, args.height)
            );
        }
    }

    if let Some(path) = &args.export_json {
        crate::io::write_result_json(path, &render.result, &render.layout)?;
    }
    if let Some(path) = &args.export_svg {
        crate::io::write_diagram_svg(path, &render.result, &render.layout)?;
    }

    Ok(())
}

fn handle_tui(args: TuiArgs, config: &AppConfig) -> Result<(), AppError> {
    crate::tui::run(&args, config)
}

/// Rewrite argv so the TUI is the default command.
///
/// Rules:
/// - `bayes`                    -> `bayes tui`
/// - `bayes -p 0.3 ...`         -> `bayes tui -p 0.3 ...`
/// - `bayes --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "calc");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
