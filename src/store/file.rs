//! File-backed store: load/save with atomic writes

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{ConversationStore, StoreError};
use crate::models::Conversation;

/// Well-known storage key: the file name of the persisted collection
pub const STORE_FILENAME: &str = "conversations.json";

/// What is currently on disk, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// Nothing imported yet
    Missing,
    /// A document exists but does not decode; views treat it as empty
    Corrupt,
    Loaded { conversations: usize },
}

/// Conversation store persisted as one JSON document in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the persisted document
    pub fn path(&self) -> PathBuf {
        self.dir.join(STORE_FILENAME)
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!("{}.tmp", STORE_FILENAME))
    }

    /// Inspect the persisted document without the empty-on-error fallback
    pub fn status(&self) -> StoreStatus {
        match self.read_document() {
            Ok(None) => StoreStatus::Missing,
            Ok(Some(conversations)) => StoreStatus::Loaded { conversations: conversations.len() },
            Err(_) => StoreStatus::Corrupt,
        }
    }

    /// Read and decode the document. `Ok(None)` when it does not exist.
    fn read_document(&self) -> anyhow::Result<Option<Vec<Conversation>>> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let conversations = serde_json::from_slice::<Vec<Conversation>>(&bytes)?;
        Ok(Some(conversations))
    }

    fn persist_error(&self, source: io::Error) -> StoreError {
        StoreError::Persist { path: self.path(), source }
    }
}

impl ConversationStore for FileStore {
    fn replace_all(&self, conversations: &[Conversation]) -> Result<(), StoreError> {
        let json = serde_json::to_vec(conversations)
            .map_err(|e| self.persist_error(io::Error::other(e)))?;

        fs::create_dir_all(&self.dir).map_err(|e| self.persist_error(e))?;

        // Write atomically (temp file + rename)
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, json) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persist_error(e));
        }
        if let Err(e) = fs::rename(&temp_path, self.path()) {
            let _ = fs::remove_file(&temp_path);
            return Err(self.persist_error(e));
        }

        debug!(count = conversations.len(), path = %self.path().display(), "store replaced");
        Ok(())
    }

    fn load_all(&self) -> Vec<Conversation> {
        match self.read_document() {
            Ok(conversations) => conversations.unwrap_or_default(),
            Err(e) => {
                warn!(
                    path = %self.path().display(),
                    error = %e,
                    "stored conversations could not be read, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.persist_error(e)),
        }
    }
}
