use chrono::{DateTime, Utc};

/// Placeholder shown when an export carries no usable timestamp
pub const UNKNOWN_DATE: &str = "unknown date";

/// Format like "Jan 15, 2024, 10:30 AM" (UTC)
pub fn format_date(timestamp: Option<&DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}
