//! Info command: version, loaded config, and writing defaults.

use clap::Args;
use owo_colors::OwoColorize;
use penwise_core::analysis::ALL_CHECKS;
use penwise_core::config::{Config, ConfigSources};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct Info<'a> {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    config: ConfigInfo<'a>,
}

/// Effective settings after every layer merged.
#[derive(Serialize)]
struct ConfigInfo<'a> {
    config_file: Option<String>,
    sources: &'a ConfigSources,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    text_type: String,
    target_words: usize,
    max_input_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drafts_dir: Option<String>,
    checks: &'static [&'static str],
}

impl<'a> ConfigInfo<'a> {
    fn new(config: &Config, sources: &'a ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            sources,
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            text_type: config.text_type().to_string(),
            target_words: config.target_words(),
            max_input_bytes: config.input_limit(),
            drafts_dir: config.drafts_dir().map(|dir| dir.to_string()),
            checks: ALL_CHECKS,
        }
    }
}

/// Print package and configuration details.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");

    let info = Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        repository: env!("CARGO_PKG_REPOSITORY"),
        config: ConfigInfo::new(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.name.bold(), info.version.green());
    if !info.description.is_empty() {
        println!("{}", info.description);
    }
    if !info.repository.is_empty() {
        row("Repository", info.repository.cyan());
    }

    let c = &info.config;
    section("Configuration");
    match c.config_file {
        Some(ref path) => row("Config file", path.cyan()),
        None => row("Config file", "none loaded".yellow()),
    }
    for file in &c.sources.project_files {
        row("  project", file);
    }
    row("Log level", c.log_level);
    row("Log directory", opt(&c.log_dir));

    section("Writing");
    row("Text type", &c.text_type);
    row("Target words", c.target_words);
    row(
        "Input limit",
        c.max_input_bytes
            .map_or_else(|| "disabled".to_string(), |n| format!("{n} bytes")),
    );
    row("Drafts", opt(&c.drafts_dir));
    row("Checks", c.checks.join(", "));

    Ok(())
}

fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("{}: {value}", label.dimmed());
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(not set)")
}
