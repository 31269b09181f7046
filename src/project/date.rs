//! Display formatting for project dates.
//!
//! Project files carry dates as free text. The common shapes are parsed and
//! rendered in US long form, e.g. `2024-01-05` becomes `January 5, 2024`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a project date string.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, RFC 3339 timestamps and
/// `YYYY-MM-DDTHH:MM:SS` (or with a space separator). Time and offset are
/// discarded; the calendar date as written is kept.
pub fn parse_project_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS.iter().find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|datetime| datetime.date())
}

/// Format a project date for display, e.g. `January 5, 2024`.
///
/// Returns `None` for empty or unrecognised input.
pub fn format_display_date(raw: &str) -> Option<String> {
    parse_project_date(raw).map(|date| date.format("%B %-d, %Y").to_string())
}
