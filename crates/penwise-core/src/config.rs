//! Layered configuration.
//!
//! Sources merge in this order, later winning:
//!
//! 1. built-in defaults
//! 2. the user file, `config.{toml,yaml,yml,json}` in the platform config dir
//! 3. project files in the nearest directory (walking up from the search root)
//!    that holds `.penwise.<ext>` or `penwise.<ext>`; the walk stops at a
//!    directory containing `.git`
//! 4. files passed with `--config`
//! 5. `PENWISE_*` environment variables
//!
//! Within one directory every matching file is merged: dotfiles before plain
//! names, and `toml < yaml < yml < json`.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use penwise_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("{} practice, {} words", config.text_type(), config.target_words());
//! if let Some(file) = sources.primary_file() {
//!     println!("from {file}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::coaching::DEFAULT_TARGET_WORDS;
use crate::error::{ConfigError, ConfigResult};
use crate::vocabulary::TextType;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

const APP_NAME: &str = "penwise";
const ENV_PREFIX: &str = "PENWISE_";
const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];
const BOUNDARY: &str = ".git";

/// Settings shared by every penwise command.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Minimum level written to logs.
    pub log_level: LogLevel,
    /// Directory for the JSONL log file. No file log when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Default text type label. Unknown labels resolve to narrative.
    pub text_type: Option<String>,
    /// Exam word target used by coaching.
    pub target_words: Option<usize>,
    /// Largest input file accepted, in bytes.
    pub max_input_bytes: Option<usize>,
    /// Skip the input size check altogether.
    pub disable_input_limit: bool,
    /// Where saved drafts live.
    pub drafts_dir: Option<Utf8PathBuf>,
}

impl Config {
    /// The configured text type, resolved against the known types.
    pub fn text_type(&self) -> TextType {
        self.text_type
            .as_deref()
            .map_or_else(TextType::default, TextType::resolve)
    }

    /// The exam word target (250 unless configured).
    pub fn target_words(&self) -> usize {
        self.target_words.unwrap_or(DEFAULT_TARGET_WORDS)
    }

    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        (!self.disable_input_limit)
            .then(|| self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
    }

    /// Where drafts are stored: `drafts_dir`, else `<user data dir>/drafts`.
    pub fn drafts_dir(&self) -> Option<Utf8PathBuf> {
        self.drafts_dir
            .clone()
            .or_else(|| user_data_dir().map(|dir| dir.join("drafts")))
    }

    fn validate(self) -> ConfigResult<Self> {
        if self.target_words == Some(0) {
            return Err(ConfigError::Invalid {
                field: "target_words",
                reason: "must be at least 1",
            });
        }
        if self.max_input_bytes == Some(0) && !self.disable_input_limit {
            return Err(ConfigError::Invalid {
                field: "max_input_bytes",
                reason: "must be at least 1; set disable_input_limit to remove the limit",
            });
        }
        Ok(self)
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-check timings.
    Debug,
    /// Normal operation (default).
    #[default]
    Info,
    /// Fallbacks and recoverable problems.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// The level as used in filter directives.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Which files went into a loaded [`Config`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// The user config file, if one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project files from the nearest matching directory, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files passed explicitly, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file that won: last explicit, else last project, else user.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or_else(|| self.project_files.last())
            .or(self.user_file.as_ref())
            .map(Utf8PathBuf::as_path)
    }
}

/// Builder that discovers and merges configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    stop_at_boundary: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file and stops the project walk at `.git`.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            stop_at_boundary: true,
            explicit_files: Vec::new(),
        }
    }

    /// Look for project files starting at `dir` and walking up.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Walk all the way to the filesystem root.
    pub const fn without_boundary_marker(mut self) -> Self {
        self.stop_at_boundary = false;
        self
    }

    /// Merge `path` after every discovered file.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and validate the result.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.user_config.then(user_config_file).flatten(),
            project_files: self
                .search_root
                .as_deref()
                .map(|root| self.project_files(root))
                .unwrap_or_default(),
            explicit_files: self.explicit_files,
        };

        let figment = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files)
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                merge_file,
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config = figment
            .extract::<Config>()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?
            .validate()?;

        tracing::info!(
            file = ?sources.primary_file(),
            text_type = %config.text_type(),
            target_words = config.target_words(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Files in the nearest ancestor of `start` that has any. A config next
    /// to the boundary marker still counts.
    fn project_files(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found = project_candidates(dir)
                .filter(|path| path.is_file())
                .collect::<Vec<_>>();
            if !found.is_empty() {
                tracing::debug!(%dir, count = found.len(), "project config found");
                return found;
            }
            if self.stop_at_boundary && dir != start && dir.join(BOUNDARY).exists() {
                break;
            }
        }
        Vec::new()
    }
}

/// `.penwise.<ext>` then `penwise.<ext>` in `dir`, in merge order.
fn project_candidates(dir: &Utf8Path) -> impl Iterator<Item = Utf8PathBuf> + '_ {
    [".", ""].into_iter().flat_map(move |dot| {
        EXTENSIONS
            .iter()
            .map(move |ext| dir.join(format!("{dot}{APP_NAME}.{ext}")))
    })
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8PathBuf) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

fn project_dir(pick: fn(&directories::ProjectDirs) -> &std::path::Path) -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(pick(&dirs).to_path_buf()).ok()
}

/// Platform config directory, e.g. `~/.config/penwise/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    project_dir(directories::ProjectDirs::config_dir)
}

/// Platform data directory, e.g. `~/.local/share/penwise/` on Linux.
pub fn user_data_dir() -> Option<Utf8PathBuf> {
    project_dir(directories::ProjectDirs::data_dir)
}
