//! penwise CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use penwise::{Cli, Commands, commands};
use penwise_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command.take() else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(&cli)?;

    let log_dir = config.log_dir.as_ref().map(|dir| dir.as_std_path().to_path_buf());
    let _guard = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(log_dir),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;

    debug!(
        json = cli.json,
        text_type = %config.text_type(),
        input_limit = ?config.input_limit(),
        "penwise starting"
    );

    let result = run(command, cli.json, config, &sources);
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

fn utf8(path: PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path).map_err(|e| {
        anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display())
    })
}

/// Project config is searched from the working directory; `--config` wins.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "current directory")?);
    if let Some(ref path) = cli.config {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let max_input = config.input_limit();
    let text_type = config.text_type();

    match command {
        Commands::Analyze(args) => commands::analyze::cmd_analyze(args, json, text_type, max_input),
        Commands::Devices(args) => commands::devices::cmd_devices(args, json, max_input),
        Commands::Vocab(args) => commands::vocab::cmd_vocab(args, json, text_type),
        Commands::Coach(args) => commands::coach::cmd_coach(
            args,
            json,
            text_type,
            config.target_words(),
            max_input,
        ),
        Commands::Variety(args) => commands::variety::cmd_variety(args, json, max_input),
        Commands::ShowTell(args) => commands::show_tell::cmd_show_tell(args, json, max_input),
        Commands::Draft(args) => {
            let drafts_dir = config
                .drafts_dir()
                .context("no drafts directory: set drafts_dir in config")?;
            commands::draft::cmd_draft(args, json, &drafts_dir, text_type, max_input)
        }
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start async runtime for the MCP server")?
            .block_on(commands::serve::cmd_serve(args, max_input, config)),
    }
}
