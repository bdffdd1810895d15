use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "CHAT_EXPLORER_DATA_DIR";

const APP_DIR_NAME: &str = "chat-export-explorer";

/// Resolve where the conversation store lives.
///
/// Precedence: explicit override (the `--data-dir` flag), then
/// `CHAT_EXPLORER_DATA_DIR`, then the platform's local data directory.
pub fn resolve_data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_local_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
