//! Persisted conversation store
//!
//! The store holds the most recent successful import and nothing else. It is
//! replaced wholesale on every import, read by the list and detail views, and
//! never modified by them.
//!
//! Storage location: a single JSON document, `conversations.json`, inside the
//! data directory (see [`resolve_data_dir`](crate::utils::resolve_data_dir)).
//! - macOS: `~/Library/Application Support/chat-export-explorer/`
//! - Linux: `~/.local/share/chat-export-explorer/`
//! - Windows: `%LOCALAPPDATA%\chat-export-explorer\`

pub mod file;
pub mod memory;

use std::io;
use std::path::PathBuf;

pub use file::{FileStore, STORE_FILENAME, StoreStatus};
pub use memory::MemoryStore;
use thiserror::Error;

use crate::models::Conversation;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the collection failed; the previous contents are still in place
    #[error("failed to persist conversations to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Capability for reading and replacing the persisted conversation collection
pub trait ConversationStore {
    /// Atomically replace everything stored with `conversations`.
    ///
    /// Readers never observe a partial write. On failure the previous
    /// collection is left intact and [`StoreError::Persist`] is returned.
    fn replace_all(&self, conversations: &[Conversation]) -> Result<(), StoreError>;

    /// Current collection, or empty if nothing was stored yet.
    ///
    /// Contents that cannot be decoded also read as empty.
    fn load_all(&self) -> Vec<Conversation>;

    /// Remove the stored collection entirely
    fn clear(&self) -> Result<(), StoreError>;

    /// Look up a conversation by id; `None` means not found
    fn find_by_id(&self, id: &str) -> Option<Conversation> {
        self.load_all().into_iter().find(|conversation| conversation.id == id)
    }
}
