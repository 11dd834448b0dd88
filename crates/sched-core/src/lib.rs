//! # sched-core
//!
//! Converts a Workday "View My Courses" schedule export into an iCalendar
//! document of weekly recurring events with reminders.
//!
//! The hard part is the meeting-pattern cell: compact text such as
//! `M-W-F | 10:00 AM - 10:50 AM | Room 201` plus a start/end date pair has to
//! become an RRULE with the right `BYDAY` list, a DTSTART on a real class day,
//! timezone-qualified times, an inclusive UNTIL, and a stable UID.
//!
//! ## Quick start
//!
//! ```rust
//! use sched_core::{convert_rows, ConvertConfig};
//!
//! let rows = vec![
//!     vec!["Course Listing", "Meeting Patterns", "Start Date", "End Date"],
//!     vec!["CS 2102 - Object-Oriented Design", "T-R | 2:00 PM - 3:15 PM | Gym", "01-06-25", "05-02-25"],
//! ];
//! let ics = convert_rows(&rows, &ConvertConfig::default()).unwrap();
//! assert!(ics.contains("DTSTART;TZID=America/New_York:20250107T140000"));
//! assert!(ics.contains("RRULE:FREQ=WEEKLY;BYDAY=TU,TH;UNTIL=20250502T235959"));
//! ```
//!
//! ## Modules
//!
//! - [`extract`] — header detection and rows → [`CourseRecord`]s
//! - [`pattern`] — meeting-pattern text → [`MeetingPattern`]
//! - [`datetime`] — export date/time formats → iCalendar formats, start-day resolution
//! - [`event`] — [`CourseRecord`] → [`CalendarEvent`] (`VEVENT` block)
//! - [`calendar`] — `VCALENDAR` document writer
//! - [`workbook`] — xlsx/xls/ods worksheet → rows of text
//! - [`config`] — [`ConvertConfig`]
//! - [`error`] — Error types

pub mod calendar;
pub mod config;
pub mod datetime;
pub mod error;
pub mod event;
pub mod extract;
pub mod pattern;
pub mod weekday;
pub mod workbook;

use std::path::Path;

use chrono::Utc;

pub use calendar::{render_calendar, write_calendar, write_calendar_at};
pub use config::ConvertConfig;
pub use datetime::{convert_date, convert_time, resolve_start_date};
pub use error::{Result, SchedError};
pub use event::{synthesize, CalendarEvent};
pub use extract::{extract, CourseRecord};
pub use pattern::{parse_pattern, MeetingPattern};
pub use weekday::WeekdayToken;

/// Convert worksheet rows into a complete iCalendar document.
///
/// # Errors
/// Returns the first extraction or synthesis error.
pub fn convert_rows<S: AsRef<str>>(rows: &[Vec<S>], config: &ConvertConfig) -> Result<String> {
    let courses = extract(rows)?;
    render_calendar(&courses, config, Utc::now())
}

/// Convert the first worksheet of the workbook at `path`.
///
/// # Errors
/// Returns `SchedError::Workbook` if the file cannot be read, otherwise the
/// first extraction or synthesis error.
pub fn convert_workbook_path(path: impl AsRef<Path>, config: &ConvertConfig) -> Result<String> {
    let rows = workbook::read_rows_from_path(path)?;
    convert_rows(&rows, config)
}

/// Convert an in-memory workbook, returning the document bytes.
///
/// # Errors
/// Same as [`convert_workbook_path`].
pub fn convert_workbook_bytes(bytes: &[u8], config: &ConvertConfig) -> Result<Vec<u8>> {
    let rows = workbook::read_rows_from_bytes(bytes)?;
    convert_rows(&rows, config).map(String::into_bytes)
}
