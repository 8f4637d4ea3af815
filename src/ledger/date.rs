//! Order date handling. Dates travel as `YYYY-MM-DD` strings.

use crate::ledger::ValidationError;
use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Renders a date in the wire format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Checks an order date before submission.
///
/// The date must be present, must be a calendar date and, unless
/// `allow_future` is set, must not lie after `today`.
pub fn validate_date(raw: &str, today: NaiveDate, allow_future: bool) -> Result<NaiveDate, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::DateRequired);
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?;
    if !allow_future && date > today {
        return Err(ValidationError::FutureDate(raw.to_string()));
    }
    Ok(date)
}
