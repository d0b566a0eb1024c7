//! Show-tell command: telling-language meter.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use penwise_core::analysis::show_tell;

/// Arguments for the `show-tell` subcommand.
#[derive(Args, Debug)]
pub struct ShowTellArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

#[instrument(name = "cmd_show_tell", skip_all, fields(file = %args.file))]
pub fn cmd_show_tell(
    args: ShowTellArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let report = show_tell::analyze_show_dont_tell(&content);
    debug!(score = report.score, "show/tell measured");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        super::analyze::print_show_tell(&report);
    }
    Ok(())
}
