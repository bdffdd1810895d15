use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::parsers::{IngestError, IngestReport, ingest_with_report};
use crate::store::{ConversationStore, StoreError};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Persist(#[from] StoreError),
}

impl ImportError {
    /// The single message shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            ImportError::Read { .. } | ImportError::Ingest(IngestError::Parse(_)) => {
                "Error reading file. Please make sure it's a valid JSON file.".to_string()
            }
            ImportError::Ingest(IngestError::EmptyResult) => {
                "No valid conversations found in the file".to_string()
            }
            ImportError::Persist(e) => format!("Failed to save conversations: {}", e),
        }
    }
}

/// Outcome of a successful import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub messages: usize,
    pub report: IngestReport,
}

impl ImportSummary {
    /// One-line description for status bars and CLI output
    pub fn describe(&self) -> String {
        let mut text = format!(
            "Imported {} conversation{} ({} messages)",
            self.imported,
            if self.imported == 1 { "" } else { "s" },
            self.messages
        );
        if self.report.dropped_empty > 0 {
            text.push_str(&format!(", {} empty skipped", self.report.dropped_empty));
        }
        let unreadable = self.report.skipped_elements;
        if unreadable > 0 {
            text.push_str(&format!(", {} unreadable skipped", unreadable));
        }
        text
    }
}

/// Read `path` and import its contents into `store`
pub fn import_file(
    path: &Path,
    store: &dyn ConversationStore,
) -> Result<ImportSummary, ImportError> {
    let bytes =
        fs::read(path).map_err(|source| ImportError::Read { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), bytes = bytes.len(), "importing conversation export");
    import_bytes(&bytes, store)
}

/// Ingest raw upload bytes and replace the store's contents on success.
///
/// The store is untouched when ingestion fails.
pub fn import_bytes(
    bytes: &[u8],
    store: &dyn ConversationStore,
) -> Result<ImportSummary, ImportError> {
    let ingested = ingest_with_report(bytes)?;
    store.replace_all(&ingested.conversations)?;

    let messages = ingested.conversations.iter().map(|c| c.message_count()).sum();
    let summary =
        ImportSummary { imported: ingested.conversations.len(), messages, report: ingested.report };
    info!(
        imported = summary.imported,
        dropped = summary.report.dropped_empty,
        skipped = summary.report.skipped_elements,
        "import complete"
    );
    Ok(summary)
}
