//! Meeting-pattern parsing.
//!
//! A Workday "Meeting Patterns" cell looks like:
//!
//! ```text
//! M-W-F | 10:00 AM - 10:50 AM | Fuller Labs 320
//! ```
//!
//! i.e. hyphen-separated day letters, a hyphen-separated time range, and a free
//! text location, separated by `|`. Only the first time range is used.

use crate::datetime::parse_time;
use crate::error::{Result, SchedError};
use crate::weekday::{by_day_list, WeekdayToken};
use chrono::{NaiveTime, Weekday};

/// Parsed form of a meeting-pattern cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingPattern {
    /// Class days in the order they appear in the pattern. Repeats are kept.
    pub weekdays: Vec<WeekdayToken>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
}

impl MeetingPattern {
    /// The `BYDAY` value for this pattern, e.g. `MO,WE,FR`.
    pub fn by_day(&self) -> String {
        by_day_list(&self.weekdays)
    }

    /// The `chrono` weekdays the class meets on.
    pub fn chrono_weekdays(&self) -> Vec<Weekday> {
        self.weekdays.iter().map(|t| t.weekday).collect()
    }
}

/// Parse a meeting-pattern cell.
///
/// Returns `Ok(None)` for an empty cell: the export leaves the pattern blank
/// for courses with no scheduled meetings. A cell holding only whitespace is
/// not blank and fails like any other malformed pattern.
///
/// # Errors
/// Returns `SchedError::Pattern` if the cell has fewer than three `|` segments,
/// contains an unknown day letter, or has a malformed time range.
pub fn parse_pattern(raw: &str) -> Result<Option<MeetingPattern>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let segments: Vec<&str> = raw.split('|').collect();
    if segments.len() < 3 {
        return Err(SchedError::pattern(
            raw,
            format!("expected at least 3 parts, got {}", segments.len()),
        ));
    }

    let weekdays = segments[0]
        .trim()
        .split('-')
        .map(|letter| {
            WeekdayToken::from_letter(letter)
                .ok_or_else(|| SchedError::pattern(raw, format!("unknown weekday '{}'", letter)))
        })
        .collect::<Result<Vec<_>>>()?;

    let times: Vec<&str> = segments[1].trim().split('-').map(str::trim).collect();
    if times.len() < 2 {
        return Err(SchedError::pattern(
            raw,
            format!(
                "expected at least 2 times (start and end), got {}",
                times.len()
            ),
        ));
    }
    let start_time = parse_pattern_time(raw, times[0])?;
    let end_time = parse_pattern_time(raw, times[1])?;

    Ok(Some(MeetingPattern {
        weekdays,
        start_time,
        end_time,
        location: segments[2].trim().to_string(),
    }))
}

fn parse_pattern_time(raw: &str, time: &str) -> Result<NaiveTime> {
    parse_time(time).map_err(|_| SchedError::pattern(raw, format!("bad time '{}'", time)))
}
