use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::strip_ansi_codes;

/// Who authored a message
///
/// Variant order matters: `Human` sorts before `Assistant`, which is the
/// tie-break used when two messages share a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Human,
    Assistant,
}

impl Sender {
    /// Label shown next to a message in the thread view
    pub fn display_label(self) -> &'static str {
        match self {
            Sender::Human => "User",
            Sender::Assistant => "Claude",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default)]
    pub extracted_content: Option<String>,
}

impl Attachment {
    /// True when the extracted content has at least one non-whitespace character
    pub fn has_content(&self) -> bool {
        self.extracted_content.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub sender: Sender,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// A message is contentful when its text is non-blank or any attachment
    /// carries non-blank extracted content.
    pub fn is_contentful(&self) -> bool {
        !self.text.trim().is_empty() || self.attachments.iter().any(Attachment::has_content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Conversations survive ingestion only with at least one contentful message
    pub fn is_retained(&self) -> bool {
        self.messages.iter().any(Message::is_contentful)
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn attachment_count(&self) -> usize {
        self.messages.iter().map(|m| m.attachments.len()).sum()
    }

    /// Name safe for terminal display, with a placeholder for blank names
    pub fn display_name(&self) -> String {
        let name = strip_ansi_codes(self.name.trim());
        if name.is_empty() { "(untitled)".to_string() } else { name }
    }
}
