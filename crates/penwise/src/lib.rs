//! The `penwise` command line.
//!
//! Argument parsing lives here so integration tests and doc tooling can reach
//! it; `main.rs` only loads config, sets up logging, and dispatches.
//!
//! Every analysis command reads one file, takes an optional `--type`, and
//! prints either colored text or, with `--json`, the serialized report from
//! `penwise-core`. [`command()`] returns the clap `Command` for man pages and
//! shell completions.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Set the process-wide owo-colors override.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, penwise=trace)
    PENWISE_LOG_PATH       Explicit log file path
    PENWISE_LOG_DIR        Log directory
    PENWISE_TEXT_TYPE      Default text type (narrative, persuasive, ...)
    PENWISE_TARGET_WORDS   Exam word target for coaching
";
/// Command-line interface definition for penwise.
#[derive(Parser)]
#[command(name = "penwise")]
#[command(about = "Writing analysis and coaching for timed exam practice", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run full writing analysis
    Analyze(commands::analyze::AnalyzeArgs),

    /// Find literary devices
    Devices(commands::devices::DevicesArgs),

    /// Suggest stronger words or list a word bank
    Vocab(commands::vocab::VocabArgs),

    /// Coach a timed practice session
    Coach(commands::coach::CoachArgs),

    /// Show sentence length and structure variety
    Variety(commands::variety::VarietyArgs),

    /// Measure "show, don't tell"
    ShowTell(commands::show_tell::ShowTellArgs),

    /// Save, show, list, or delete drafts
    Draft(commands::draft::DraftArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        command().debug_assert();
    }

    #[test]
    fn show_tell_uses_kebab_case() {
        let cli = Cli::try_parse_from(["penwise", "show-tell", "essay.txt"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ShowTell(_))));
    }

    #[test]
    fn checks_and_exclude_conflict() {
        let result = Cli::try_parse_from([
            "penwise", "analyze", "a.txt", "--checks", "metrics", "--exclude", "grammar",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn vocab_needs_word_or_list_flag() {
        assert!(Cli::try_parse_from(["penwise", "vocab"]).is_err());
        assert!(Cli::try_parse_from(["penwise", "vocab", "said"]).is_ok());
        assert!(Cli::try_parse_from(["penwise", "vocab", "--power"]).is_ok());
        assert!(Cli::try_parse_from(["penwise", "vocab", "--power", "--starters"]).is_err());
    }

    #[test]
    fn coach_requires_elapsed() {
        assert!(Cli::try_parse_from(["penwise", "coach", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["penwise", "coach", "a.txt", "--elapsed", "600"]).is_ok());
    }
}
