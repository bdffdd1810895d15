use crate::models::Conversation;

/// What a search query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Conversation names only
    #[default]
    Name,
    /// Names, message bodies and extracted attachment content
    FullText,
}

impl SearchScope {
    pub fn toggle(self) -> Self {
        match self {
            SearchScope::Name => SearchScope::FullText,
            SearchScope::FullText => SearchScope::Name,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchScope::Name => "name",
            SearchScope::FullText => "full text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub scope: SearchScope,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, scope: SearchScope) -> Self {
        Self { text: text.into(), scope }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Case-insensitive substring match against the query's scope
    pub fn matches(&self, conversation: &Conversation) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();

        if contains_ignore_case(&conversation.name, &needle) {
            return true;
        }

        match self.scope {
            SearchScope::Name => false,
            SearchScope::FullText => conversation.messages.iter().any(|message| {
                contains_ignore_case(&message.text, &needle)
                    || message.attachments.iter().any(|attachment| {
                        attachment
                            .extracted_content
                            .as_deref()
                            .is_some_and(|content| contains_ignore_case(content, &needle))
                    })
            }),
        }
    }
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter conversations by `query`, preserving their order
pub fn apply_search<'a>(
    conversations: &'a [Conversation],
    query: &SearchQuery,
) -> Vec<&'a Conversation> {
    conversations.iter().filter(|conversation| query.matches(conversation)).collect()
}
