//! Client-side search over the conversation list

pub mod search;

pub use search::{SearchQuery, SearchScope, apply_search};
