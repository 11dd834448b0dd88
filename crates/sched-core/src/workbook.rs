//! Spreadsheet input -- reads the first worksheet of an xlsx/xls/ods file into
//! rows of cell text.
//!
//! Cells are rendered the way the sheet displays them for the values the
//! export contains: date cells become `MM-DD-YY`, whole numbers lose their
//! `.0`, empty cells become `""`. Trailing empty cells are dropped from each
//! row, so a row that ends before the table's last column reads as short.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use crate::datetime::EXPORT_DATE_FORMAT;
use crate::error::{Result, SchedError};

/// Read the first worksheet of the workbook at `path`.
///
/// # Errors
/// Returns `SchedError::Workbook` if the file cannot be opened as a
/// spreadsheet or has no worksheets.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SchedError::Workbook(format!("{}: {}", path.display(), e)))?;
    first_sheet_rows(&mut workbook)
}

/// Read the first worksheet of an in-memory workbook.
///
/// # Errors
/// Returns `SchedError::Workbook` if the bytes are not a readable spreadsheet
/// or it has no worksheets.
pub fn read_rows_from_bytes(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| SchedError::Workbook(e.to_string()))?;
    first_sheet_rows(&mut workbook)
}

fn first_sheet_rows<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<Vec<Vec<String>>> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SchedError::Workbook("workbook has no worksheets".to_string()))?
        .map_err(|e| SchedError::Workbook(e.to_string()))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().map(cell_text).collect();
            while cells.last().is_some_and(String::is_empty) {
                cells.pop();
            }
            cells
        })
        .collect();

    tracing::debug!(rows = rows.len(), "read worksheet");
    Ok(rows)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{:.0}", f),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string().to_uppercase(),
        // `as_datetime` honours the workbook's 1900/1904 date system.
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map(|datetime| datetime.date().format(EXPORT_DATE_FORMAT).to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::Error(e) => format!("{:?}", e),
    }
}
