//! Data models for imported chat conversations.
//!
//! - [`Conversation`] - A named, timestamped thread of messages
//! - [`Message`] - A single turn authored by a [`Sender`]
//! - [`Attachment`] - A file attached to a message, with optional extracted text
//!
//! These are the normalized shapes produced by the ingestion pipeline and
//! persisted by the store. The permissive input shapes live in
//! `parsers::export`.

pub mod conversation;

pub use conversation::{Attachment, Conversation, Message, Sender};
