use std::sync::RwLock;

use super::{ConversationStore, StoreError};
use crate::models::Conversation;

/// In-process store, for tests and for callers that do not want disk state
#[derive(Debug, Default)]
pub struct MemoryStore {
    conversations: RwLock<Option<Vec<Conversation>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the first successful `replace_all`
    pub fn is_empty(&self) -> bool {
        self.read(|stored| stored.is_none_or(|c| c.is_empty()))
    }

    fn read<T>(&self, f: impl FnOnce(Option<&Vec<Conversation>>) -> T) -> T {
        // A poisoned lock still holds a fully written value: writes are a single assignment
        let guard = self.conversations.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(guard.as_ref())
    }
}

impl ConversationStore for MemoryStore {
    fn replace_all(&self, conversations: &[Conversation]) -> Result<(), StoreError> {
        let mut guard =
            self.conversations.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(conversations.to_vec());
        Ok(())
    }

    fn load_all(&self) -> Vec<Conversation> {
        self.read(|stored| stored.cloned().unwrap_or_default())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard =
            self.conversations.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = None;
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Option<Conversation> {
        self.read(|stored| stored?.iter().find(|c| c.id == id).cloned())
    }
}
