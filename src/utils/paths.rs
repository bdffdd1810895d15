use std::env;
use std::path::Path;

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use chat_export_explorer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/.local/share/chat-export-explorer");
/// // Returns "~/.local/share/chat-export-explorer" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref()).filter(|h| !h.is_empty());

    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.to_string_lossy())
        };
    }

    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/.local/share/app");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/.local/share/app");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");
    }

    #[test]
    fn test_format_path_with_tilde_requires_component_boundary() {
        // "/Users/testuser2" shares a string prefix with home but is a different directory
        let path = PathBuf::from("/Users/testuser2/data");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "/Users/testuser2/data");
    }

    #[test]
    fn test_format_home_itself() {
        let path = PathBuf::from("/Users/testuser");
        assert_eq!(format_path_with_tilde_internal(&path, Some("/Users/testuser")), "~");
    }
}
