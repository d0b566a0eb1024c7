//! Variety command: sentence length and structure mix.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use penwise_core::analysis::sentence_variety;

/// Arguments for the `variety` subcommand.
#[derive(Args, Debug)]
pub struct VarietyArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

#[instrument(name = "cmd_variety", skip_all, fields(file = %args.file))]
pub fn cmd_variety(
    args: VarietyArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let report = sentence_variety::analyze_sentence_variety(&content);
    debug!(sentences = report.total_sentences, "variety analyzed");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        super::analyze::print_variety(&report);
    }
    Ok(())
}
