//! Error types for schedule conversion.

use thiserror::Error;

/// Errors that can occur while turning a schedule export into a calendar.
///
/// Every variant carries the offending value. Conversion is fail-fast: the
/// first error aborts the whole document.
#[derive(Error, Debug)]
pub enum SchedError {
    /// A required column header was not found in the worksheet.
    #[error("Unable to find column: {0}")]
    ColumnNotFound(String),

    /// The meeting-pattern text of a course could not be parsed.
    #[error("Unable to parse meeting pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// A start or end date was not in `MM-DD-YY` form.
    #[error("Invalid date '{value}': expected MM-DD-YY")]
    Date { value: String },

    /// A time of day was not in `H:MM AM/PM` form.
    #[error("Invalid time '{value}': expected H:MM AM/PM")]
    Time { value: String },

    /// The configured timezone is not a valid IANA identifier.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The spreadsheet could not be opened or has no worksheets.
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedError {
    pub(crate) fn pattern(pattern: &str, reason: impl Into<String>) -> Self {
        SchedError::Pattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout sched-core.
pub type Result<T> = std::result::Result<T, SchedError>;
