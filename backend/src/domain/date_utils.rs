//! Date wire format and en-US display helpers.
//!
//! Dates cross the core boundary as `YYYY-MM-DD` strings, with the empty
//! string meaning "unset".

use chrono::{Datelike, NaiveDate};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateValueError {
    #[error("Date '{0}' is not a valid YYYY-MM-DD calendar date")]
    Malformed(String),
}

/// Parse a wire date value; `""` is `Ok(None)`
pub fn parse_date_value(value: &str) -> Result<Option<NaiveDate>, DateValueError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // chrono accepts unpadded fields and signed years; only the canonical
    // form is a valid value
    match NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        Ok(date) if format_iso_date(date) == trimmed => Ok(Some(date)),
        _ => Err(DateValueError::Malformed(value.to_string())),
    }
}

/// Format a date as YYYY-MM-DD
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Wire value for an optional date
pub fn to_date_value(date: Option<NaiveDate>) -> String {
    date.map(format_iso_date).unwrap_or_default()
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Three letter month abbreviation
pub fn short_month_name(month: u32) -> &'static str {
    month_name(month).get(..3).unwrap_or("???")
}

/// Date as shown in the picker's input field, e.g. "3/14/2025"
pub fn format_input_display(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Due date as shown on a goal card, e.g. "Mar 14, 2025"
pub fn format_due_date(date: NaiveDate) -> String {
    format!("{} {}, {}", short_month_name(date.month()), date.day(), date.year())
}
