use std::cmp::Ordering;

use crate::models::Message;

/// Compare two messages for thread display.
///
/// Earlier `created_at` first; at the same instant the human message comes
/// first. Same sender at the same instant compares `Equal`, so a stable sort
/// keeps their input order. Messages without a timestamp sort before all
/// timestamped ones.
pub fn compare_messages(a: &Message, b: &Message) -> Ordering {
    a.created_at.cmp(&b.created_at).then_with(|| a.sender.cmp(&b.sender))
}

/// Return the messages in display order without touching the input.
///
/// # Examples
///
/// ```
/// use chat_export_explorer::models::{Message, Sender};
/// use chat_export_explorer::sort_messages;
///
/// let at = "2024-01-01T00:00:00Z".parse().ok();
/// let msg = |id: &str, sender| Message {
///     id: id.to_string(),
///     text: "hi".to_string(),
///     sender,
///     created_at: at,
///     updated_at: None,
///     attachments: vec![],
/// };
///
/// let input = vec![msg("reply", Sender::Assistant), msg("prompt", Sender::Human)];
/// let sorted = sort_messages(&input);
/// assert_eq!(sorted[0].id, "prompt");
/// assert_eq!(input[0].id, "reply");
/// ```
pub fn sort_messages(messages: &[Message]) -> Vec<Message> {
    let mut sorted = messages.to_vec();
    // slice::sort_by is stable
    sorted.sort_by(compare_messages);
    sorted
}
