//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for an export file plus a data directory, both inside one temp dir
pub struct ExportBuilder {
    temp_dir: TempDir,
    conversations: Vec<Value>,
}

impl ExportBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, conversations: Vec::new() }
    }

    pub fn conversation(mut self, conversation: ConversationBuilder) -> Self {
        self.conversations.push(conversation.to_json());
        self
    }

    /// Add an arbitrary element, for malformed-input tests
    pub fn raw_element(mut self, element: Value) -> Self {
        self.conversations.push(element);
        self
    }

    /// Serialized export document
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.conversations).expect("Failed to serialize export")
    }

    /// Write the export to `<temp>/export.json` and return the temp dir
    pub fn build(self) -> BuiltExport {
        let export_path = self.temp_dir.path().join("export.json");
        fs::write(&export_path, self.to_bytes()).expect("Failed to write export.json");
        BuiltExport { temp_dir: self.temp_dir, export_path }
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BuiltExport {
    temp_dir: TempDir,
    pub export_path: PathBuf,
}

impl BuiltExport {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Data directory for the store, separate from the export file
    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }
}

/// Builder for one exported conversation object
pub struct ConversationBuilder {
    uuid: String,
    name: String,
    created_at: Option<Value>,
    messages: Vec<Value>,
}

impl ConversationBuilder {
    pub fn new(uuid: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            name: format!("Conversation {}", uuid),
            created_at: Some(json!("2024-01-15T10:30:00Z")),
            messages: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn created_at(mut self, created_at: Value) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message.to_json());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "uuid": self.uuid,
            "name": self.name,
            "chat_messages": self.messages,
        });
        if let Some(created_at) = &self.created_at {
            value["created_at"] = created_at.clone();
        }
        value
    }
}

/// Builder for one exported message object
pub struct MessageBuilder {
    uuid: String,
    text: String,
    sender: Value,
    created_at: Option<Value>,
    attachments: Vec<Value>,
}

impl MessageBuilder {
    pub fn human(uuid: &str, text: &str) -> Self {
        Self::new(uuid, text, "human")
    }

    pub fn assistant(uuid: &str, text: &str) -> Self {
        Self::new(uuid, text, "assistant")
    }

    fn new(uuid: &str, text: &str, sender: &str) -> Self {
        Self {
            uuid: uuid.to_string(),
            text: text.to_string(),
            sender: json!(sender),
            created_at: None,
            attachments: Vec::new(),
        }
    }

    pub fn at(mut self, created_at: &str) -> Self {
        self.created_at = Some(json!(created_at));
        self
    }

    pub fn sender(mut self, sender: Value) -> Self {
        self.sender = sender;
        self
    }

    pub fn attachment(mut self, file_name: &str, extracted_content: Option<&str>) -> Self {
        self.attachments.push(json!({
            "file_name": file_name,
            "file_size": 128,
            "file_type": "txt",
            "extracted_content": extracted_content,
        }));
        self
    }

    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "uuid": self.uuid,
            "text": self.text,
            "sender": self.sender,
            "attachments": self.attachments,
        });
        if let Some(created_at) = &self.created_at {
            value["created_at"] = created_at.clone();
        }
        value
    }
}
