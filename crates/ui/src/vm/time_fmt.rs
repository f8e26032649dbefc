use chrono::{DateTime, Local, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Format a fixture deadline as an absolute local timestamp.
///
/// Values without an offset are taken as local time. Anything unparseable is
/// shown verbatim.
#[must_use]
pub fn format_deadline(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return at.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map_or_else(|| raw.to_owned(), |at| at.format(DISPLAY_FORMAT).to_string())
}
