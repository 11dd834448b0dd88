//! Event synthesis -- turns one [`CourseRecord`] into a weekly recurring
//! `VEVENT` with a display reminder.
//!
//! Reference: RFC 5545 sections 3.6.1 (VEVENT), 3.6.6 (VALARM) and 3.3.10
//! (RRULE).

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::config::ConvertConfig;
use crate::datetime::{first_class_day, format_date, format_time, parse_date};
use crate::error::Result;
use crate::extract::CourseRecord;
use crate::pattern::parse_pattern;

/// Runs of characters that may not appear in a generated UID.
static UID_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("UID pattern is valid"));

const DTSTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Local time appended to the UNTIL date so the last class day is included.
const UNTIL_TIME: &str = "235959";

/// A single weekly recurring class event, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    /// Creation instant, rendered as `DTSTAMP` (UTC, second precision).
    pub dtstamp: DateTime<Utc>,
    /// IANA timezone for `DTSTART`/`DTEND`.
    pub timezone: String,
    /// First actual class day.
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub summary: String,
    pub location: String,
    /// Comma-joined `BYDAY` codes in pattern order.
    pub by_day: String,
    /// Last day of the term; the recurrence runs through the end of this day.
    pub until: NaiveDate,
    pub reminder_minutes: u32,
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start_date = format_date(self.start_date);
        writeln!(f, "BEGIN:VEVENT")?;
        writeln!(f, "UID:{}", self.uid)?;
        writeln!(f, "DTSTAMP:{}", self.dtstamp.format(DTSTAMP_FORMAT))?;
        writeln!(
            f,
            "DTSTART;TZID={}:{}T{}",
            self.timezone,
            start_date,
            format_time(self.start_time)
        )?;
        writeln!(
            f,
            "DTEND;TZID={}:{}T{}",
            self.timezone,
            start_date,
            format_time(self.end_time)
        )?;
        writeln!(f, "SUMMARY:{}", self.summary)?;
        writeln!(f, "LOCATION:{}", self.location)?;
        writeln!(
            f,
            "RRULE:FREQ=WEEKLY;BYDAY={};UNTIL={}T{}",
            self.by_day,
            format_date(self.until),
            UNTIL_TIME
        )?;
        writeln!(f, "BEGIN:VALARM")?;
        writeln!(f, "TRIGGER:-PT{}M", self.reminder_minutes)?;
        writeln!(f, "ACTION:DISPLAY")?;
        writeln!(f, "DESCRIPTION:Reminder - {} starts soon", self.summary)?;
        writeln!(f, "END:VALARM")?;
        writeln!(f, "END:VEVENT")
    }
}

/// Build the UID for a course: `description + by_day` with every run of
/// non-alphanumeric characters collapsed to `_`, outer `_` trimmed, and
/// `@<domain>` appended.
///
/// Two courses with the same description and days get the same UID.
pub fn sanitize_uid(description: &str, by_day: &str, domain: &str) -> String {
    let joined = format!("{}{}", description, by_day);
    let cleaned = UID_UNSAFE.replace_all(&joined, "_");
    format!("{}@{}", cleaned.trim_matches('_'), domain)
}

/// Synthesize the calendar event for `course`, stamped with `now`.
///
/// Returns `Ok(None)` when the course has no meeting pattern.
///
/// # Errors
/// Returns `SchedError::Pattern` for a malformed meeting pattern and
/// `SchedError::Date` for a malformed start or end date.
pub fn synthesize(
    course: &CourseRecord,
    config: &ConvertConfig,
    now: DateTime<Utc>,
) -> Result<Option<CalendarEvent>> {
    let Some(pattern) = parse_pattern(&course.meeting_pattern)? else {
        tracing::warn!(
            course = %course.description,
            "no meeting pattern, skipping"
        );
        return Ok(None);
    };

    let by_day = pattern.by_day();
    let until = parse_date(&course.end_date)?;
    let start_date = first_class_day(
        parse_date(&course.start_date)?,
        &pattern.chrono_weekdays(),
    );

    tracing::debug!(
        course = %course.description,
        %by_day,
        %start_date,
        %until,
        "synthesized event"
    );

    Ok(Some(CalendarEvent {
        uid: sanitize_uid(&course.description, &by_day, &config.uid_domain),
        dtstamp: now,
        timezone: config.timezone.clone(),
        start_date,
        start_time: pattern.start_time,
        end_time: pattern.end_time,
        summary: course.description.clone(),
        location: pattern.location,
        by_day,
        until,
        reminder_minutes: config.reminder_minutes,
    }))
}
