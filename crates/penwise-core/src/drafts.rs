//! Draft storage.
//!
//! Drafts live behind the [`DraftStore`] trait so the analysis core never
//! holds them. [`MemoryDraftStore`] suits tests and embedding;
//! [`FileDraftStore`] keeps one JSON file per draft.

use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{DraftError, DraftResult};
use crate::vocabulary::TextType;

static DRAFT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"));

/// A saved piece of writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Draft {
    /// Identifier: 1 to 64 letters, digits, `_` or `-`.
    pub id: String,
    /// Text type the piece was written for.
    pub text_type: TextType,
    /// The student's text.
    pub content: String,
    /// Seconds since the Unix epoch.
    pub updated_at: u64,
}

impl Draft {
    /// Create a draft stamped with the current time.
    pub fn new(id: impl Into<String>, text_type: TextType, content: impl Into<String>) -> Self {
        let updated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Self {
            id: id.into(),
            text_type,
            content: content.into(),
            updated_at,
        }
    }
}

/// Check that `id` is safe to use as a key and a file stem.
pub fn validate_id(id: &str) -> DraftResult<()> {
    if DRAFT_ID.is_match(id) {
        Ok(())
    } else {
        Err(DraftError::InvalidId(id.to_string()))
    }
}

/// Key-value storage for drafts, keyed by id.
pub trait DraftStore {
    /// Fetch a draft. Missing ids are [`DraftError::NotFound`].
    fn get(&self, id: &str) -> DraftResult<Draft>;
    /// Insert or replace a draft.
    fn put(&self, draft: &Draft) -> DraftResult<()>;
    /// Remove a draft. Missing ids are [`DraftError::NotFound`].
    fn delete(&self, id: &str) -> DraftResult<()>;
    /// All stored ids, sorted.
    fn list(&self) -> DraftResult<Vec<String>>;
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    drafts: RwLock<BTreeMap<String, Draft>>,
}

impl MemoryDraftStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, id: &str) -> DraftResult<Draft> {
        validate_id(id)?;
        let drafts = self.drafts.read().unwrap_or_else(|e| e.into_inner());
        drafts
            .get(id)
            .cloned()
            .ok_or_else(|| DraftError::NotFound(id.to_string()))
    }

    fn put(&self, draft: &Draft) -> DraftResult<()> {
        validate_id(&draft.id)?;
        let mut drafts = self.drafts.write().unwrap_or_else(|e| e.into_inner());
        drafts.insert(draft.id.clone(), draft.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> DraftResult<()> {
        validate_id(id)?;
        let mut drafts = self.drafts.write().unwrap_or_else(|e| e.into_inner());
        drafts
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DraftError::NotFound(id.to_string()))
    }

    fn list(&self) -> DraftResult<Vec<String>> {
        let drafts = self.drafts.read().unwrap_or_else(|e| e.into_inner());
        Ok(drafts.keys().cloned().collect())
    }
}

/// One `<id>.json` file per draft in a directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    dir: Utf8PathBuf,
}

impl FileDraftStore {
    /// A store rooted at `dir`.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the draft files.
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Utf8PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

fn io_error(path: &Utf8Path) -> impl FnOnce(std::io::Error) -> DraftError + '_ {
    move |source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl DraftStore for FileDraftStore {
    #[tracing::instrument(skip(self))]
    fn get(&self, id: &str) -> DraftResult<Draft> {
        validate_id(id)?;
        let path = self.path_for(id);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DraftError::NotFound(id.to_string()));
            }
            Err(e) => return Err(io_error(&path)(e)),
        };
        serde_json::from_str(&raw).map_err(|source| DraftError::Json { path, source })
    }

    #[tracing::instrument(skip(self, draft), fields(id = %draft.id))]
    fn put(&self, draft: &Draft) -> DraftResult<()> {
        validate_id(&draft.id)?;
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let path = self.path_for(&draft.id);
        let json = serde_json::to_string_pretty(draft).map_err(|source| DraftError::Json {
            path: path.clone(),
            source,
        })?;
        std::fs::write(&path, json).map_err(io_error(&path))?;
        tracing::debug!(%path, "draft saved");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn delete(&self, id: &str) -> DraftResult<()> {
        validate_id(id)?;
        let path = self.path_for(id);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DraftError::NotFound(id.to_string()))
            }
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    fn list(&self) -> DraftResult<Vec<String>> {
        let entries = match self.dir.read_dir_utf8() {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.dir)(e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_error(&self.dir))?;
            let path = entry.path();
            if path.extension() == Some("json")
                && let Some(stem) = path.file_stem()
                && DRAFT_ID.is_match(stem)
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}
