//! Date and time conversion between the export's text formats and iCalendar's.
//!
//! The export writes dates as `MM-DD-YY` and times as `H:MM AM/PM`. iCalendar
//! wants `YYYYMMDD` and 24-hour `HHMMSS`.

use crate::error::{Result, SchedError};
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};

/// `chrono` format of dates in the export (e.g., `01-06-25`).
pub const EXPORT_DATE_FORMAT: &str = "%m-%d-%y";

/// `chrono` format of times in the export (e.g., `2:00 PM`).
///
/// `chrono` matches `%p` case-insensitively and lets the space before it go
/// missing, so `2:00 pm` and `10:00AM` are accepted as well. Hours may have
/// one or two digits.
pub const EXPORT_TIME_FORMAT: &str = "%I:%M %p";

const ICAL_DATE_FORMAT: &str = "%Y%m%d";
const ICAL_TIME_FORMAT: &str = "%H%M%S";

/// Parse an export date (`MM-DD-YY`). Surrounding whitespace is rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, EXPORT_DATE_FORMAT).map_err(|_| SchedError::Date {
        value: s.to_string(),
    })
}

/// Parse an export time of day (`H:MM AM/PM`). Seconds are always zero.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), EXPORT_TIME_FORMAT).map_err(|_| SchedError::Time {
        value: s.to_string(),
    })
}

/// Format a date as iCalendar `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(ICAL_DATE_FORMAT).to_string()
}

/// Format a time of day as iCalendar `HHMMSS`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(ICAL_TIME_FORMAT).to_string()
}

/// Convert `MM-DD-YY` to `YYYYMMDD`.
///
/// # Errors
/// Returns `SchedError::Date` if the input is not a valid `MM-DD-YY` date.
pub fn convert_date(s: &str) -> Result<String> {
    parse_date(s).map(format_date)
}

/// Convert `H:MM AM/PM` to 24-hour `HHMMSS`.
///
/// # Errors
/// Returns `SchedError::Time` if the input is not a valid 12-hour clock time.
pub fn convert_time(s: &str) -> Result<String> {
    parse_time(s).map(format_time)
}

/// Move `date` forward to the first day whose weekday is in `weekdays`.
///
/// At most six days are added. If none of the seven candidates matches (only
/// possible with an empty `weekdays`), `date` is returned unchanged.
pub fn first_class_day(date: NaiveDate, weekdays: &[Weekday]) -> NaiveDate {
    (0..7)
        .filter_map(|offset| date.checked_add_days(Days::new(offset)))
        .find(|candidate| weekdays.contains(&candidate.weekday()))
        .unwrap_or(date)
}

/// Parse an export start date and resolve it to the first actual class day,
/// formatted as `YYYYMMDD`.
///
/// A term often starts on a day the course does not meet. iCalendar counts
/// DTSTART as the first occurrence regardless of `BYDAY`, so the start has to
/// land on a real class day.
///
/// # Errors
/// Returns `SchedError::Date` if `start_date` is malformed.
pub fn resolve_start_date(start_date: &str, weekdays: &[Weekday]) -> Result<String> {
    parse_date(start_date).map(|date| format_date(first_class_day(date, weekdays)))
}
