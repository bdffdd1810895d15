//! Deterministic message ordering for thread display

pub mod messages;

pub use messages::{compare_messages, sort_messages};
