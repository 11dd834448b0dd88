//! Calendar document writer.
//!
//! Every event is synthesized before anything is written, so a malformed
//! course aborts the document without producing output.

use std::io::Write;

use chrono::{DateTime, SubsecRound, Utc};

use crate::config::ConvertConfig;
use crate::error::Result;
use crate::event::{synthesize, CalendarEvent};
use crate::extract::CourseRecord;

pub const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n";
pub const CALENDAR_FOOTER: &str = "END:VCALENDAR\n";

/// Synthesize events for every course that has a meeting pattern, in input
/// order, all stamped with `now`.
///
/// # Errors
/// Fails on the first course that cannot be synthesized, or if `config` is
/// invalid.
pub fn synthesize_all(
    courses: &[CourseRecord],
    config: &ConvertConfig,
    now: DateTime<Utc>,
) -> Result<Vec<CalendarEvent>> {
    config.validate()?;
    let now = now.trunc_subsecs(0);

    let mut events = Vec::with_capacity(courses.len());
    for course in courses {
        if let Some(event) = synthesize(course, config, now)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Write the calendar for `courses` to `out`, stamped with the current time.
///
/// # Errors
/// See [`write_calendar_at`].
pub fn write_calendar<W: Write>(
    courses: &[CourseRecord],
    config: &ConvertConfig,
    out: &mut W,
) -> Result<()> {
    write_calendar_at(courses, config, Utc::now(), out)
}

/// Write the calendar for `courses` to `out`, stamped with `now`.
///
/// # Errors
/// Returns the first synthesis error (nothing is written in that case), or
/// `SchedError::Io` if writing fails.
pub fn write_calendar_at<W: Write>(
    courses: &[CourseRecord],
    config: &ConvertConfig,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    let doc = render_calendar(courses, config, now)?;
    out.write_all(doc.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Render the calendar for `courses` into a string, stamped with `now`.
///
/// # Errors
/// Returns the first synthesis error.
pub fn render_calendar(
    courses: &[CourseRecord],
    config: &ConvertConfig,
    now: DateTime<Utc>,
) -> Result<String> {
    let events = synthesize_all(courses, config, now)?;
    tracing::info!(
        courses = courses.len(),
        events = events.len(),
        "rendering calendar"
    );

    let mut doc = String::from(CALENDAR_HEADER);
    for event in &events {
        doc.push_str(&event.to_string());
    }
    doc.push_str(CALENDAR_FOOTER);
    Ok(doc)
}
