//! Devices command: literary device detection.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use penwise_core::analysis::devices;

/// Arguments for the `devices` subcommand.
#[derive(Args, Debug)]
pub struct DevicesArgs {
    /// File to scan.
    pub file: Utf8PathBuf,
}

/// List literary devices in left-to-right order.
#[instrument(name = "cmd_devices", skip_all, fields(file = %args.file))]
pub fn cmd_devices(
    args: DevicesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let found = devices::detect_literary_devices(&content);
    debug!(count = found.len(), "devices detected");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        super::analyze::print_devices(&found);
    }
    Ok(())
}
