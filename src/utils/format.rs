use chrono::{DateTime, Local};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_datetime(dt: &DateTime<Local>) -> String {
    dt.format(FORMAT).to_string()
}

/// Escape text for safe inclusion in HTML element content and attributes
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
