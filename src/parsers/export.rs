//! Permissive input shapes for conversation exports.
//!
//! Exports use snake_case keys (`uuid`, `created_at`, `chat_messages`); the
//! store persists `id` / `messages`; hand-written files sometimes use
//! camelCase. Some files carry several spellings of the same field at once.
//! Each object is first reduced to one key per field, picking the first
//! present spelling in a fixed preference order, and then normalized into
//! [`models`].
//!
//! [`models`]: crate::models

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{Attachment, Conversation, Message, Sender};

#[derive(Debug, Deserialize)]
pub struct RawConversation {
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_array"
    )]
    pub messages: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawMessage {
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub id: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub text: String,
    pub sender: Sender,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_array"
    )]
    pub attachments: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawAttachment {
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient_string"
    )]
    pub file_name: String,
    #[serde(default)]
    pub file_size: Option<Value>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_string"
    )]
    pub file_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_string"
    )]
    pub extracted_content: Option<String>,
}

/// Accepted spellings per field, in preference order
type KeySpellings = &'static [(&'static str, &'static [&'static str])];

const CONVERSATION_KEYS: KeySpellings = &[
    ("id", &["uuid", "id"]),
    ("created_at", &["created_at", "createdAt"]),
    ("updated_at", &["updated_at", "updatedAt"]),
    ("messages", &["chat_messages", "chatMessages", "messages"]),
];

const MESSAGE_KEYS: KeySpellings = &[
    ("id", &["uuid", "id"]),
    ("created_at", &["created_at", "createdAt"]),
    ("updated_at", &["updated_at", "updatedAt"]),
];

const ATTACHMENT_KEYS: KeySpellings = &[
    ("file_name", &["file_name", "fileName"]),
    ("file_size", &["file_size", "fileSize"]),
    ("file_type", &["file_type", "fileType"]),
    ("extracted_content", &["extracted_content", "extractedContent"]),
];

/// Collapse every accepted spelling of a field onto its canonical key.
///
/// The first non-null spelling wins; if all present spellings are null the
/// field stays null. Non-objects pass through and fail in deserialization.
fn read_with_keys<T: DeserializeOwned>(value: Value, keys: KeySpellings) -> serde_json::Result<T> {
    match value {
        Value::Object(map) => serde_json::from_value(Value::Object(canonicalize(map, keys))),
        other => serde_json::from_value(other),
    }
}

fn canonicalize(mut map: Map<String, Value>, keys: KeySpellings) -> Map<String, Value> {
    for (canonical, spellings) in keys {
        let mut picked: Option<Value> = None;
        for spelling in *spellings {
            if let Some(value) = map.remove(*spelling)
                && picked.as_ref().is_none_or(Value::is_null)
            {
                picked = Some(value);
            }
        }
        if let Some(value) = picked {
            map.insert((*canonical).to_string(), value);
        }
    }
    map
}

/// Counters for everything the permissive reader had to skip
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
    pub messages: usize,
    pub attachments: usize,
}

impl RawConversation {
    /// Read one export element, accepting every known key spelling
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        read_with_keys(value, CONVERSATION_KEYS)
    }

    /// Normalize into a [`Conversation`], skipping unreadable messages.
    ///
    /// Messages keep their input order; sorting happens later in the pipeline.
    pub fn into_conversation(self, skipped: &mut SkipCounts) -> Conversation {
        let conversation_id = self.id;
        let messages = self
            .messages
            .into_iter()
            .enumerate()
            .filter_map(|(idx, value)| match RawMessage::from_value(value) {
                Ok(raw) => Some(raw.into_message(skipped)),
                Err(e) => {
                    warn!(
                        conversation = %conversation_id,
                        index = idx,
                        error = %e,
                        "skipping unreadable message"
                    );
                    skipped.messages += 1;
                    None
                }
            })
            .collect();

        Conversation {
            id: conversation_id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            messages,
        }
    }
}

impl RawMessage {
    fn from_value(value: Value) -> serde_json::Result<Self> {
        read_with_keys(value, MESSAGE_KEYS)
    }

    fn into_message(self, skipped: &mut SkipCounts) -> Message {
        let attachments = self
            .attachments
            .into_iter()
            .filter_map(|value| match RawAttachment::from_value(value) {
                Ok(raw) => Some(raw.into_attachment()),
                Err(e) => {
                    warn!(message = %self.id, error = %e, "skipping unreadable attachment");
                    skipped.attachments += 1;
                    None
                }
            })
            .collect();

        Message {
            id: self.id,
            text: self.text,
            sender: self.sender,
            created_at: self.created_at,
            updated_at: self.updated_at,
            attachments,
        }
    }
}

impl RawAttachment {
    fn from_value(value: Value) -> serde_json::Result<Self> {
        read_with_keys(value, ATTACHMENT_KEYS)
    }

    fn into_attachment(self) -> Attachment {
        Attachment {
            file_name: self.file_name,
            file_size: self.file_size.as_ref().and_then(Value::as_u64),
            file_type: self.file_type,
            extracted_content: self.extracted_content,
        }
    }
}
