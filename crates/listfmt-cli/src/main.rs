//! listfmt CLI entry point.
//!
//! Provides command-line tools for working with exported list pattern data:
//! - `listfmt format` - Format items for a locale
//! - `listfmt chain` - Show a locale's inheritance chain
//! - `listfmt check` - Validate every pattern set of every locale

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_chain, run_check, run_format, ChainArgs, CheckArgs, FormatArgs};
use tracing_subscriber::EnvFilter;

/// List pattern data tools.
#[derive(Debug, Parser)]
#[command(name = "listfmt")]
#[command(about = "Locale-aware list formatting tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing localeInformation.json and <locale>.json files
    #[arg(long, env = "LISTFMT_DATA", default_value = ".", global = true)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a list of items
    Format(FormatArgs),
    /// Show the inheritance chain of a locale
    Chain(ChainArgs),
    /// Validate all pattern sets in the data directory
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .try_init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Format(args) => run_format(&cli.data, args),
        Commands::Chain(args) => run_chain(&cli.data, args),
        Commands::Check(args) => run_check(&cli.data, args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
