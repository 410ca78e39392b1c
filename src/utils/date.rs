use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a Wikidata datetime literal into a calendar date.
///
/// Literals arrive as "+1947-03-25T00:00:00Z" or without the leading sign;
/// only the date part matters here. BCE years keep their '-' sign.
pub fn parse_wikidata_date(s: &str) -> AppResult<NaiveDate> {
    let trimmed = s.strip_prefix('+').unwrap_or(s);
    let date_part = trimmed.split('T').next().unwrap_or("");

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}
