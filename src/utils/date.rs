use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a date typed by the user: empty input means today.
pub fn resolve_date_input(input: &str) -> AppResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(today());
    }

    parse_date(trimmed).ok_or_else(|| AppError::InvalidDate(trimmed.to_string()))
}
