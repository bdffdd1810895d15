//! Plain-text renderings of the list and detail views

use std::fmt::Write;

use crate::models::{Conversation, Message};
use crate::utils::{format_date, strip_ansi_codes};

pub const NOTHING_IMPORTED: &str =
    "No conversations imported yet. Run `chat-export-explorer import <FILE>` first.";
pub const NO_MATCHES: &str = "No conversations match your search.";
pub const NOT_FOUND: &str = "Conversation not found";

/// One line per conversation: name, creation date, message count and id
pub fn render_list(conversations: &[&Conversation]) -> String {
    let mut out = String::new();
    for conversation in conversations {
        let _ = writeln!(
            out,
            "{}  |  {}  |  {} messages  |  {}",
            conversation.display_name(),
            format_date(conversation.created_at.as_ref()),
            conversation.message_count(),
            strip_ansi_codes(&conversation.id)
        );
    }
    out
}

/// Full thread: header, then every message in stored order with attachments
pub fn render_thread(conversation: &Conversation) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", conversation.display_name());
    let _ = writeln!(out, "{}", format_date(conversation.created_at.as_ref()));

    for message in &conversation.messages {
        out.push('\n');
        render_message(&mut out, message);
    }
    out
}

fn render_message(out: &mut String, message: &Message) {
    let _ = writeln!(
        out,
        "── {} · {} ──",
        message.sender.display_label(),
        format_date(message.created_at.as_ref())
    );

    if !message.text.is_empty() {
        let _ = writeln!(out, "{}", strip_ansi_codes(&message.text));
    }

    for attachment in &message.attachments {
        let _ = writeln!(out, "  [attachment] {}", strip_ansi_codes(&attachment.file_name));
        if let Some(content) = attachment.extracted_content.as_deref().filter(|c| !c.is_empty()) {
            for line in strip_ansi_codes(content).lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }
}
