//! Draft command: save, show, list, and delete drafts.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use penwise_core::TextType;
use penwise_core::drafts::{Draft, DraftStore, FileDraftStore};

/// Arguments for the `draft` subcommand.
#[derive(Args, Debug)]
pub struct DraftArgs {
    #[command(subcommand)]
    pub action: DraftAction,
}

/// Draft operations.
#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Save a file as a draft (replaces any draft with the same id).
    Save {
        /// Draft id (letters, digits, '-' or '_').
        id: String,
        /// File to save.
        file: Utf8PathBuf,
        /// Text type (narrative, persuasive, descriptive, expository, creative).
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        text_type: Option<String>,
    },
    /// Print a draft.
    Show {
        /// Draft id.
        id: String,
    },
    /// List saved drafts.
    List,
    /// Delete a draft.
    Delete {
        /// Draft id.
        id: String,
    },
}

#[instrument(name = "cmd_draft", skip_all, fields(dir = %drafts_dir))]
pub fn cmd_draft(
    args: DraftArgs,
    global_json: bool,
    drafts_dir: &Utf8Path,
    default_type: TextType,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let store = FileDraftStore::new(drafts_dir);
    debug!(action = ?args.action, "executing draft command");

    match args.action {
        DraftAction::Save {
            id,
            file,
            text_type,
        } => {
            let content = super::read_input_file(&file, max_input_bytes)?;
            let text_type = super::resolve_text_type(text_type.as_deref(), default_type);
            let draft = Draft::new(id, text_type, content);
            store
                .put(&draft)
                .with_context(|| format!("failed to save draft {}", draft.id))?;
            info!(id = %draft.id, "draft saved");

            if global_json {
                println!("{}", serde_json::to_string_pretty(&draft)?);
            } else {
                println!("{} {}", "Saved".green(), draft.id.bold());
            }
        }
        DraftAction::Show { id } => {
            let draft = store.get(&id)?;
            if global_json {
                println!("{}", serde_json::to_string_pretty(&draft)?);
            } else {
                println!("{} ({})", draft.id.bold(), draft.text_type);
                println!();
                println!("{}", draft.content);
            }
        }
        DraftAction::List => {
            let ids = store.list()?;
            if global_json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else if ids.is_empty() {
                println!("{}", "no drafts".dimmed());
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }
        DraftAction::Delete { id } => {
            store.delete(&id)?;
            info!(%id, "draft deleted");
            if global_json {
                println!("{}", serde_json::json!({ "deleted": id }));
            } else {
                println!("{} {}", "Deleted".yellow(), id.bold());
            }
        }
    }
    Ok(())
}
