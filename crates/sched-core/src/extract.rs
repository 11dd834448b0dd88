//! Row extraction -- locates the header row of a schedule export and turns
//! every following data row into a [`CourseRecord`].
//!
//! The export has a few title rows above the table and sometimes summary rows
//! below it. The header row is the first row containing any known column name;
//! the table ends at the first row too short to hold every required column.

use crate::error::{Result, SchedError};
use serde::{Deserialize, Serialize};

pub const MEETING_COLUMN: &str = "Meeting Patterns";
pub const LISTING_COLUMN: &str = "Course Listing";
pub const START_DATE_COLUMN: &str = "Start Date";
pub const END_DATE_COLUMN: &str = "End Date";
pub const INSTRUCTOR_COLUMN: &str = "Instructor";

/// Columns that must be present, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    MEETING_COLUMN,
    LISTING_COLUMN,
    START_DATE_COLUMN,
    END_DATE_COLUMN,
];

/// One course row of the export after column resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course listing, followed by `" - <instructor>"` when an instructor is listed.
    pub description: String,
    /// Raw "Meeting Patterns" text. May be empty.
    pub meeting_pattern: String,
    /// Raw "Start Date" text (`MM-DD-YY`).
    pub start_date: String,
    /// Raw "End Date" text (`MM-DD-YY`).
    pub end_date: String,
}

/// Column positions while the header scan is in progress.
#[derive(Debug, Default)]
struct HeaderScan {
    meeting: Option<usize>,
    listing: Option<usize>,
    start_date: Option<usize>,
    end_date: Option<usize>,
    instructor: Option<usize>,
}

impl HeaderScan {
    /// Record `cell` if it names a known column. Returns whether it did.
    fn observe(&mut self, cell: &str, index: usize) -> bool {
        let slot = match cell {
            MEETING_COLUMN => &mut self.meeting,
            LISTING_COLUMN => &mut self.listing,
            START_DATE_COLUMN => &mut self.start_date,
            END_DATE_COLUMN => &mut self.end_date,
            INSTRUCTOR_COLUMN => &mut self.instructor,
            _ => return false,
        };
        *slot = Some(index);
        true
    }

    fn resolve(self, data_start: usize) -> Result<ColumnMap> {
        let require = |index: Option<usize>, name: &str| {
            index.ok_or_else(|| SchedError::ColumnNotFound(name.to_string()))
        };
        Ok(ColumnMap {
            meeting: require(self.meeting, MEETING_COLUMN)?,
            listing: require(self.listing, LISTING_COLUMN)?,
            start_date: require(self.start_date, START_DATE_COLUMN)?,
            end_date: require(self.end_date, END_DATE_COLUMN)?,
            instructor: self.instructor,
            data_start,
        })
    }
}

/// Resolved column layout of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub meeting: usize,
    pub listing: usize,
    pub start_date: usize,
    pub end_date: usize,
    pub instructor: Option<usize>,
    /// Index of the first row after the header row.
    pub data_start: usize,
}

impl ColumnMap {
    /// Find the header row and resolve every column position.
    ///
    /// Only the first row containing a known column name is considered; names
    /// appearing in later rows are ignored. If a name appears twice in the
    /// header row, the rightmost occurrence wins.
    ///
    /// # Errors
    /// Returns `SchedError::ColumnNotFound` naming the first required column
    /// that is absent from the header row (or from every row, when no header
    /// row exists).
    pub fn locate<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let mut scan = HeaderScan::default();
        for (row_index, row) in rows.iter().enumerate() {
            let mut found = false;
            for (col_index, cell) in row.iter().enumerate() {
                found |= scan.observe(cell.as_ref(), col_index);
            }
            if found {
                return scan.resolve(row_index + 1);
            }
        }
        scan.resolve(rows.len())
    }

    /// The largest index among the required columns.
    pub fn max_required_index(&self) -> usize {
        self.meeting
            .max(self.listing)
            .max(self.start_date)
            .max(self.end_date)
    }

    /// Whether `row` has enough cells to be a data row.
    pub fn fits<S: AsRef<str>>(&self, row: &[S]) -> bool {
        row.len() > self.max_required_index()
    }

    /// Build a record from a data row. The caller must check [`ColumnMap::fits`].
    fn record<S: AsRef<str>>(&self, row: &[S]) -> CourseRecord {
        let cell = |index: usize| row[index].as_ref().to_string();
        let mut description = cell(self.listing);
        if let Some(instructor) = self
            .instructor
            .and_then(|index| row.get(index))
            .map(|s| s.as_ref())
            .filter(|s| !s.is_empty())
        {
            description.push_str(" - ");
            description.push_str(instructor);
        }
        CourseRecord {
            description,
            meeting_pattern: cell(self.meeting),
            start_date: cell(self.start_date),
            end_date: cell(self.end_date),
        }
    }
}

/// Extract one [`CourseRecord`] per data row of `rows`.
///
/// Extraction stops at the first row too short to hold every required column;
/// that row and everything after it are ignored.
///
/// # Errors
/// Returns `SchedError::ColumnNotFound` if a required column header is missing.
pub fn extract<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Vec<CourseRecord>> {
    let columns = ColumnMap::locate(rows)?;
    tracing::debug!(?columns, "resolved schedule columns");

    let courses: Vec<CourseRecord> = rows
        .iter()
        .skip(columns.data_start)
        .take_while(|row| columns.fits(row.as_slice()))
        .map(|row| columns.record(row.as_slice()))
        .collect();

    tracing::debug!(count = courses.len(), "extracted course rows");
    Ok(courses)
}
