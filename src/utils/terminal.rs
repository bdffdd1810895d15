//! Terminal output sanitization
//!
//! Imported conversations are arbitrary user data. Message text, attachment
//! content and conversation names can carry ANSI escape sequences that would
//! clear the screen, move the cursor or recolor the terminal when printed by
//! `show`/`list` or drawn by the TUI. Everything user-controlled goes through
//! [`strip_ansi_codes`] before it reaches the terminal.

/// Strips ANSI escape codes from a string
///
/// Removes CSI sequences (`ESC [ ... letter`: colors, cursor movement), OSC
/// sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`: window titles, hyperlinks)
/// and every other control character except tab and line breaks.
///
/// # Examples
///
/// ```
/// use chat_export_explorer::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI ends at the first ASCII letter
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    // OSC ends at BEL or at the string terminator ESC \
                    while let Some(next_ch) = chars.next() {
                        if next_ch == '\x07' {
                            break;
                        }
                        if next_ch == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}
