//! Jira timestamp helpers.
//!
//! Jira writes timestamps as `2024-01-17T12:34:56.000+0000`: millisecond
//! precision and an offset without a colon, which is not strict RFC 3339.

use chrono::{DateTime, NaiveDate, Utc};

const JIRA_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";
const JIRA_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a Jira timestamp, falling back to RFC 3339.
pub fn parse_jira_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(_) => DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Formats a timestamp the way Jira expects it in request bodies.
pub fn format_jira_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(JIRA_DATETIME_FORMAT).to_string()
}

/// Formats a calendar date as `YYYY-MM-DD`.
pub fn format_jira_date(date: &NaiveDate) -> String {
    date.format(JIRA_DATE_FORMAT).to_string()
}
