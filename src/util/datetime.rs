//! Timestamp parsing and display formatting.
//!
//! The backend stores `created_at` as a bare ISO-8601 local timestamp while
//! client-generated ones carry a `Z` suffix, so parsing tries RFC 3339 first
//! and falls back to naive forms. Unparseable input is shown as-is rather
//! than dropped.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Format a stored timestamp for table display, en-US style:
/// `Jan 15, 2024, 02:30 PM`.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Current time as an ISO-8601 string with millisecond precision, matching
/// what the old client sent (`new Date().toISOString()`).
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Date-stamped filename for the spreadsheet export.
pub fn export_filename(date: NaiveDate) -> String {
    format!("leads_export_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Today's UTC date, for stamping the export filename.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
