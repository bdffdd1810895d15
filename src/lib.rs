//! Chat Export Explorer - Import and browse exported chat conversations
//!
//! This library turns a chat service's conversation export (a JSON array of
//! conversation objects) into a clean, locally persisted collection. It
//! provides:
//!
//! - Permissive parsing that skips malformed elements instead of failing
//! - Filtering of conversations with no meaningful content
//! - Deterministic message ordering (timestamp, then human before assistant)
//! - A replace-on-import store with atomic writes
//! - Name and full-text search for the list view
//!
//! # Example
//!
//! ```
//! use chat_export_explorer::{ConversationStore, MemoryStore, import_bytes};
//!
//! let export = br#"[{
//!     "uuid": "c1",
//!     "name": "Hello",
//!     "chat_messages": [
//!         {"uuid": "m1", "text": "hi", "sender": "human", "created_at": "2024-01-01T00:00:00Z"}
//!     ]
//! }]"#;
//!
//! let store = MemoryStore::new();
//! let summary = import_bytes(export, &store)?;
//! assert_eq!(summary.imported, 1);
//! assert_eq!(store.find_by_id("c1").unwrap().name, "Hello");
//! # Ok::<(), chat_export_explorer::ImportError>(())
//! ```

pub mod cli;
pub mod filters;
pub mod import;
pub mod models;
pub mod ordering;
pub mod parsers;
pub mod store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use filters::{SearchQuery, SearchScope, apply_search};
pub use import::{ImportError, ImportSummary, import_bytes, import_file};
pub use models::{Attachment, Conversation, Message, Sender};
pub use ordering::sort_messages;
pub use parsers::{IngestError, IngestReport, ParseError, ingest, ingest_with_report};
pub use store::{ConversationStore, FileStore, MemoryStore, StoreError};
pub use utils::paths::format_path_with_tilde;
