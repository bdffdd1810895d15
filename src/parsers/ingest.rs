use std::str::Utf8Error;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::export::{RawConversation, SkipCounts};
use crate::models::Conversation;
use crate::ordering::sort_messages;

/// Why an upload could not be read as a conversation export
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON array of conversations, found {found}")]
    NotAnArray { found: &'static str },
}

#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed input: not UTF-8, not JSON, or not a top-level array
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Well-formed input where no conversation has any content
    #[error("no valid conversations found in the file")]
    EmptyResult,
}

/// What happened to each element of the uploaded array
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    /// Elements in the top-level array
    pub total: usize,
    pub retained: usize,
    /// Conversations dropped for having no contentful message
    pub dropped_empty: usize,
    /// Elements that were not readable as a conversation at all
    pub skipped_elements: usize,
    pub skipped_messages: usize,
    pub skipped_attachments: usize,
}

#[derive(Debug, Clone)]
pub struct Ingested {
    pub conversations: Vec<Conversation>,
    pub report: IngestReport,
}

/// Parse, filter and order an uploaded conversation export.
///
/// The steps run in a fixed order:
/// 1. Decode UTF-8 and parse JSON; the top-level value must be an array
/// 2. Read each element permissively (missing fields default, no `messages`
///    means empty)
/// 3. Keep only conversations with at least one contentful message
/// 4. Sort each kept conversation's messages for display
///
/// # Errors
///
/// - [`IngestError::Parse`] if the input is not a UTF-8 JSON array
/// - [`IngestError::EmptyResult`] if nothing survives filtering, including `[]`
///
/// # Examples
///
/// ```
/// use chat_export_explorer::{IngestError, ingest};
///
/// let raw = br#"[{"uuid":"a","name":"T","chat_messages":[
///     {"uuid":"m1","text":"hi","sender":"human","created_at":"2024-01-01T00:00:00Z"}
/// ]}]"#;
/// let conversations = ingest(raw)?;
/// assert_eq!(conversations.len(), 1);
///
/// assert!(matches!(ingest(b"[]"), Err(IngestError::EmptyResult)));
/// # Ok::<(), IngestError>(())
/// ```
pub fn ingest(raw: &[u8]) -> Result<Vec<Conversation>, IngestError> {
    ingest_with_report(raw).map(|ingested| ingested.conversations)
}

/// Same as [`ingest`], also reporting what was dropped or skipped
pub fn ingest_with_report(raw: &[u8]) -> Result<Ingested, IngestError> {
    let elements = parse_top_level(raw)?;

    let mut report = IngestReport { total: elements.len(), ..IngestReport::default() };
    let mut skipped = SkipCounts::default();
    let mut conversations = Vec::new();

    for (idx, element) in elements.into_iter().enumerate() {
        let raw_conversation = match RawConversation::from_value(element) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(index = idx, error = %e, "skipping unreadable conversation");
                report.skipped_elements += 1;
                continue;
            }
        };

        let conversation = raw_conversation.into_conversation(&mut skipped);

        // Retention is decided before sorting and per conversation
        if !conversation.is_retained() {
            debug!(id = %conversation.id, "dropping conversation without content");
            report.dropped_empty += 1;
            continue;
        }

        let messages = sort_messages(&conversation.messages);
        conversations.push(Conversation { messages, ..conversation });
    }

    report.retained = conversations.len();
    report.skipped_messages = skipped.messages;
    report.skipped_attachments = skipped.attachments;

    if conversations.is_empty() {
        return Err(IngestError::EmptyResult);
    }

    Ok(Ingested { conversations, report })
}

fn parse_top_level(raw: &[u8]) -> Result<Vec<Value>, ParseError> {
    let text = std::str::from_utf8(raw)?;
    // Tolerate a UTF-8 byte order mark from editors that add one
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    match serde_json::from_str::<Value>(text)? {
        Value::Array(elements) => Ok(elements),
        other => Err(ParseError::NotAnArray { found: json_kind(&other) }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
