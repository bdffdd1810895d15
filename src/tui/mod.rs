// TUI module for browsing imported conversations
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::store::ConversationStore;

/// Run the interactive browser over `store`
pub fn run_browser(store: &dyn ConversationStore) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(store);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
