//! Canon CLI — naming analysis for exported symbol models.
//!
//! Provides `canon lint` to run the rule set and render diagnostics,
//! `canon fix` to apply safe renames for naming findings, and
//! `canon rules` to list the registered rules.

#![warn(missing_docs)]

mod fix;
mod lint;
mod pipeline;
mod rules;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Canon — naming-convention analysis and safe renames.
#[derive(Parser, Debug)]
#[command(name = "canon", version, about = "Canon naming analyzer")]
pub struct Cli {
    /// Suppress all output except findings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Project directory (defaults to walking up from the current
    /// directory looking for `canon.toml`).
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run lint rules over the exported symbol model.
    Lint(LintArgs),
    /// Apply safe renames for naming findings and rewrite the sources.
    Fix(FixArgs),
    /// List the registered rules.
    Rules,
}

/// Arguments for the `canon lint` subcommand.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Rule names to suppress (e.g. `--allow missing-visibility`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g. `--deny private-field-naming`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `canon fix` subcommand.
#[derive(Parser, Debug)]
pub struct FixArgs {
    /// Plan and report the renames without writing any file.
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Global flags resolved into plain values for the subcommands.
pub struct GlobalArgs {
    /// Suppress progress output.
    pub quiet: bool,
    /// Whether to emit ANSI colors.
    pub color: bool,
    /// Explicit project directory, if given.
    pub project: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    };
    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        project: cli.project,
    };

    let result = match cli.command {
        Command::Lint(args) => lint::run(&args, &global),
        Command::Fix(args) => fix::run(&args, &global),
        Command::Rules => rules::run(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}
