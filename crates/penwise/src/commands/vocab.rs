//! Vocab command: word banks and replacement suggestions.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use penwise_core::TextType;
use penwise_core::vocabulary;

/// Arguments for the `vocab` subcommand.
#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("list")
        .args(["power", "transitions", "starters"])
        .multiple(false)
))]
pub struct VocabArgs {
    /// Word to find stronger alternatives for.
    #[arg(required_unless_present = "list", conflicts_with = "list")]
    pub word: Option<String>,

    /// Text type (narrative, persuasive, descriptive, expository, creative).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub text_type: Option<String>,

    /// List power words.
    #[arg(long)]
    pub power: bool,

    /// List transition words.
    #[arg(long)]
    pub transitions: bool,

    /// List sentence starters.
    #[arg(long)]
    pub starters: bool,
}

#[derive(Serialize)]
struct VocabOutput<'a> {
    text_type: TextType,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<&'a str>,
    kind: &'static str,
    entries: Vec<&'static str>,
}

#[instrument(name = "cmd_vocab", skip_all)]
pub fn cmd_vocab(args: VocabArgs, global_json: bool, default_type: TextType) -> anyhow::Result<()> {
    let text_type = super::resolve_text_type(args.text_type.as_deref(), default_type);
    debug!(%text_type, word = ?args.word, "executing vocab command");

    let (kind, entries) = if args.power {
        ("power words", vocabulary::get_power_words(text_type).to_vec())
    } else if args.transitions {
        ("transition words", vocabulary::get_transition_words(text_type).to_vec())
    } else if args.starters {
        ("sentence starters", vocabulary::get_sentence_starters(text_type).to_vec())
    } else {
        let word = args.word.as_deref().unwrap_or_default();
        ("replacements", vocabulary::get_replacement_suggestions(word, text_type))
    };

    let output = VocabOutput {
        text_type,
        word: args.word.as_deref(),
        kind,
        entries,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let heading = match output.word {
        Some(word) => format!("Instead of \"{word}\" ({text_type}):"),
        None => format!("{} ({text_type}):", capitalize(kind)),
    };
    println!("{}", heading.bold());
    if output.entries.is_empty() {
        println!("  {}", "no suggestions".dimmed());
    }
    for entry in &output.entries {
        println!("  {}", entry.green());
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
