use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::views::{NO_MATCHES, NOT_FOUND, NOTHING_IMPORTED, render_list, render_thread};
use crate::filters::{SearchQuery, SearchScope, apply_search};
use crate::import::import_file;
use crate::models::Sender;
use crate::store::{ConversationStore, FileStore, StoreStatus};
use crate::utils::{format_date, format_path_with_tilde, resolve_data_dir};

#[derive(Parser)]
#[command(name = "chat-export-explorer")]
#[command(version)]
#[command(about = "Import and browse exported chat conversations", long_about = None)]
pub struct Cli {
    /// Directory holding the imported conversations
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a conversations export, replacing anything imported before
    Import {
        /// Path to the exported JSON file
        file: PathBuf,
    },
    /// List imported conversations
    List {
        /// Only show conversations whose name contains TEXT
        #[arg(short, long, value_name = "TEXT")]
        search: Option<String>,
        /// Also match message text and attachment content
        #[arg(long)]
        full_text: bool,
    },
    /// Show one conversation as a thread
    Show {
        /// Conversation id, as printed by `list`
        id: String,
    },
    /// Browse conversations interactively
    Browse,
    /// Show statistics about the imported conversations
    Stats,
    /// Remove all imported conversations
    Clear,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let store = FileStore::new(data_dir);

    match command {
        Commands::Import { file } => import(&store, &file),
        Commands::List { search, full_text } => {
            list(&store, search.unwrap_or_default(), full_text);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { id } => Ok(show(&store, &id)),
        Commands::Browse => {
            crate::tui::run_browser(&store)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats => {
            show_stats(&store);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Clear => {
            store.clear().context("Failed to clear imported conversations")?;
            println!("Cleared imported conversations");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn import(store: &FileStore, file: &Path) -> Result<ExitCode> {
    match import_file(file, store) {
        Ok(summary) => {
            println!("{}", summary.describe());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, "import failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn list(store: &FileStore, search: String, full_text: bool) {
    let conversations = store.load_all();
    if conversations.is_empty() {
        println!("{}", NOTHING_IMPORTED);
        return;
    }

    let scope = if full_text { SearchScope::FullText } else { SearchScope::Name };
    let results = apply_search(&conversations, &SearchQuery::new(search, scope));
    if results.is_empty() {
        println!("{}", NO_MATCHES);
        return;
    }
    print!("{}", render_list(&results));
}

fn show(store: &FileStore, id: &str) -> ExitCode {
    match store.find_by_id(id) {
        Some(conversation) => {
            print!("{}", render_thread(&conversation));
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{}", NOT_FOUND);
            ExitCode::FAILURE
        }
    }
}

fn show_stats(store: &FileStore) {
    let conversations = store.load_all();
    let messages = conversations.iter().flat_map(|c| &c.messages);

    let (mut human, mut assistant, mut attachments) = (0, 0, 0);
    for message in messages {
        match message.sender {
            Sender::Human => human += 1,
            Sender::Assistant => assistant += 1,
        }
        attachments += message.attachments.len();
    }

    println!("Chat Export Statistics");
    println!("======================");
    println!("Conversations: {}", conversations.len());
    println!("Messages: {}", human + assistant);
    println!("  From user: {}", human);
    println!("  From Claude: {}", assistant);
    println!("Attachments: {}", attachments);
    println!();
    println!("Data file: {}", format_path_with_tilde(&store.path()));

    match store.status() {
        StoreStatus::Missing => println!("Status: nothing imported yet"),
        StoreStatus::Corrupt => println!("Status: stored data could not be read"),
        StoreStatus::Loaded { .. } => {
            let dates = conversations.iter().filter_map(|c| c.created_at.as_ref());
            if let Some(oldest) = dates.clone().min() {
                println!("Oldest conversation: {}", format_date(Some(oldest)));
            }
            if let Some(newest) = dates.max() {
                println!("Newest conversation: {}", format_date(Some(newest)));
            }
        }
    }
}
