//! Parsing of raw numeric fields typed by the user.

use crate::errors::{AppError, AppResult};

/// Parse an integer field, rejecting anything that is not a whole number.
pub fn parse_int(field: &'static str, raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })
}

/// Parse an integer field that must be zero or positive (hours, minutes).
pub fn parse_non_negative(field: &'static str, raw: &str) -> AppResult<i64> {
    let value = parse_int(field, raw)?;
    if value < 0 {
        return Err(AppError::NegativeValue { field, value });
    }
    Ok(value)
}
