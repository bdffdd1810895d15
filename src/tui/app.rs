//! TUI application state and event handling.
//!
//! The `App` struct owns all state for the interactive browser and runs the
//! main event loop via `run()`. It manages:
//!
//! - **List screen**: search box (name or full text) over the stored conversations
//! - **Detail screen**: the selected conversation, looked up by id in the store
//! - **Import prompt**: `Ctrl+O` asks for a file path and imports it, replacing the store
//! - **Status messages**: import results and errors, success messages expire
//! - **Dirty state tracking**: redraws only when state changes
//!
//! Imports run synchronously on the event loop thread. The loop draws an
//! "Importing" frame first and reads no input until the import finishes.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, ScreenView, render_ui, thread_lines};
use crate::filters::{SearchQuery, apply_search};
use crate::import::import_file;
use crate::models::Conversation;
use crate::store::ConversationStore;

/// Duration for success status messages
const STATUS_SUCCESS_DURATION: Duration = Duration::from_millis(3000);
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;
const MAX_SEARCH_LEN: usize = 256;
const MAX_PATH_LEN: usize = 4096;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
    Info,
}

/// Status bar message; `expires_at: None` stays until replaced
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Option<Instant>,
}

impl StatusMessage {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List,
    Detail { id: String, conversation: Option<Conversation>, scroll: u16 },
}

pub struct App<'s> {
    store: &'s dyn ConversationStore,
    conversations: Vec<Conversation>,
    query: SearchQuery,
    selected_idx: usize,
    screen: Screen,
    // Text typed into the import prompt while it is open
    import_path: Option<String>,
    pending_import: Option<PathBuf>,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<'s> App<'s> {
    pub fn new(store: &'s dyn ConversationStore) -> Self {
        Self {
            store,
            conversations: store.load_all(),
            query: SearchQuery::default(),
            selected_idx: 0,
            screen: Screen::List,
            import_path: None,
            pending_import: None,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            if self.status_message.as_ref().is_some_and(|m| m.is_expired(Instant::now())) {
                self.status_message = None;
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                self.draw(terminal)?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            if self.pending_import.is_some() {
                self.finish_import();
                continue;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let visible = self.visible();
        let screen = match &self.screen {
            Screen::List => {
                ScreenView::List { conversations: &visible, selected_idx: self.selected_idx }
            }
            Screen::Detail { conversation, scroll, .. } => {
                ScreenView::Detail { conversation: conversation.as_ref(), scroll: *scroll }
            }
        };
        let state = RenderState {
            screen,
            query: &self.query,
            import_path: self.import_path.as_deref(),
            status_message: self.status_message.as_ref(),
            total_count: self.conversations.len(),
        };
        terminal.draw(|f| render_ui(f, &state))?;
        Ok(())
    }

    /// Conversations matching the current search, in store order
    fn visible(&self) -> Vec<&Conversation> {
        apply_search(&self.conversations, &self.query)
    }

    fn set_status(
        &mut self,
        text: impl Into<String>,
        message_type: MessageType,
        duration: Option<Duration>,
    ) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: duration.map(|d| Instant::now() + d),
        });
        self.needs_redraw = true;
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        if self.import_path.is_some() {
            self.handle_import_prompt(action);
            return;
        }

        match action {
            Action::StartImport => self.start_import(),
            action if self.screen == Screen::List => self.handle_list_action(action),
            action => self.handle_detail_action(action),
        }
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                if self.query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.query.text.clear();
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::Open => self.open_selected(),
            Action::ToggleScope => {
                self.query.scope = self.query.scope.toggle();
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
            Action::Input(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            _ => {}
        }
    }

    fn handle_detail_action(&mut self, action: Action) {
        match action {
            Action::Back => {
                self.screen = Screen::List;
                self.needs_redraw = true;
            }
            Action::MoveUp => self.scroll_detail(-1),
            Action::MoveDown => self.scroll_detail(1),
            Action::PageUp => self.scroll_detail(-PAGE_SIZE),
            Action::PageDown => self.scroll_detail(PAGE_SIZE),
            _ => {}
        }
    }

    fn handle_import_prompt(&mut self, action: Action) {
        let Some(path) = self.import_path.as_mut() else {
            return;
        };
        match action {
            Action::Input(c) if path.len() < MAX_PATH_LEN => path.push(c),
            Action::DeleteChar => {
                path.pop();
            }
            Action::Back => self.import_path = None,
            Action::Open => {
                let trimmed = path.trim();
                if trimmed.is_empty() {
                    return;
                }
                let file = PathBuf::from(trimmed);
                self.import_path = None;
                self.set_status(
                    format!("Importing {}...", file.display()),
                    MessageType::Info,
                    None,
                );
                self.pending_import = Some(file);
            }
            _ => return,
        }
        self.needs_redraw = true;
    }

    fn start_import(&mut self) {
        // The previous import's error is cleared before the next attempt
        self.status_message = None;
        self.import_path = Some(String::new());
        self.needs_redraw = true;
    }

    /// Run the queued import and refresh the list from the store
    fn finish_import(&mut self) {
        let Some(file) = self.pending_import.take() else {
            return;
        };

        match import_file(&file, self.store) {
            Ok(summary) => {
                self.conversations = self.store.load_all();
                self.screen = Screen::List;
                self.selected_idx = 0;
                self.set_status(
                    summary.describe(),
                    MessageType::Success,
                    Some(STATUS_SUCCESS_DURATION),
                );
            }
            Err(e) => {
                debug!(error = %e, path = %file.display(), "import failed");
                self.set_status(e.user_message(), MessageType::Error, None);
            }
        }
    }

    fn open_selected(&mut self) {
        let Some(id) = self.visible().get(self.selected_idx).map(|c| c.id.clone()) else {
            return;
        };
        self.open_conversation(id);
    }

    /// Show the detail screen for `id`, read fresh from the store
    fn open_conversation(&mut self, id: String) {
        let conversation = self.store.find_by_id(&id);
        if conversation.is_none() {
            debug!(id = %id, "conversation not found");
        }
        self.screen = Screen::Detail { id, conversation, scroll: 0 };
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible().len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn scroll_detail(&mut self, delta: isize) {
        let Screen::Detail { conversation: Some(conversation), scroll, .. } = &mut self.screen
        else {
            return;
        };

        let max = thread_lines(conversation).len().saturating_sub(1);
        let new_scroll = (*scroll as isize + delta).clamp(0, max as isize);
        let new_scroll = u16::try_from(new_scroll).unwrap_or(u16::MAX);
        if new_scroll != *scroll {
            *scroll = new_scroll;
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.query.text.len() < MAX_SEARCH_LEN {
            self.query.text.push(c);
            self.selected_idx = 0; // Reset selection on search change
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        if self.query.text.pop().is_some() {
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }
}
