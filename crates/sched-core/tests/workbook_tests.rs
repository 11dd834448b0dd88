//! Tests for reading schedule workbooks from disk and from memory.

use sched_core::workbook::{read_rows_from_bytes, read_rows_from_path};
use sched_core::{convert_workbook_bytes, convert_workbook_path, extract, ConvertConfig, SchedError};

/// Helper: path to a workbook fixture.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn reads_first_sheet_as_display_text() {
    let rows = read_rows_from_path(fixture("schedule.xlsx")).expect("fixture should open");

    assert_eq!(rows[0], vec!["View My Courses"]);
    assert!(rows[1].is_empty(), "blank row should have no cells");
    assert_eq!(rows[2][0], "Course Listing");
    assert_eq!(rows[2][4], "Meeting Patterns");
    // Integral numbers lose their ".0".
    assert_eq!(rows[3][1], "3");
    // A date-formatted cell renders like the export's text dates.
    assert_eq!(rows[4][6], "01-06-25");
    // Trailing empty cells are dropped, so summary rows read as short.
    assert_eq!(rows[6], vec!["Total Credits", "7"]);
}

#[test]
fn extracts_courses_up_to_the_summary_row() {
    let rows = read_rows_from_path(fixture("schedule.xlsx")).unwrap();
    let courses = extract(&rows).unwrap();

    let descriptions: Vec<&str> = courses.iter().map(|c| c.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "CS 2102 - Object-Oriented Design Concepts - Jane Doe",
            "MA 1024 - Calculus IV",
            "ID 2050 - Global Projects Seminar - John Smith",
        ]
    );
    assert_eq!(courses[2].meeting_pattern, "");
}

#[test]
fn converts_fixture_from_path_and_bytes() {
    let config = ConvertConfig::default();
    let from_path = convert_workbook_path(fixture("schedule.xlsx"), &config).unwrap();
    let bytes = std::fs::read(fixture("schedule.xlsx")).unwrap();
    let from_bytes = String::from_utf8(convert_workbook_bytes(&bytes, &config).unwrap()).unwrap();

    for doc in [&from_path, &from_bytes] {
        assert_eq!(doc.matches("BEGIN:VEVENT").count(), 2);
        assert!(doc.contains(
            "UID:CS_2102_Object_Oriented_Design_Concepts_Jane_DoeMO_WE_FR@wpi.edu\n"
        ));
        assert!(doc.contains("DTSTART;TZID=America/New_York:20250107T140000\n"));
        assert!(!doc.contains("After The Table"));
        assert!(!doc.contains("Global Projects"));
    }
}

#[test]
fn bytes_and_path_read_the_same_rows() {
    let bytes = std::fs::read(fixture("schedule.xlsx")).unwrap();
    assert_eq!(
        read_rows_from_bytes(&bytes).unwrap(),
        read_rows_from_path(fixture("schedule.xlsx")).unwrap()
    );
}

#[test]
fn missing_column_fixture() {
    let err = convert_workbook_path(fixture("missing_column.xlsx"), &ConvertConfig::default())
        .unwrap_err();
    assert!(matches!(err, SchedError::ColumnNotFound(ref n) if n == "End Date"));
}

#[test]
fn bad_pattern_fixture() {
    let err = convert_workbook_path(fixture("bad_pattern.xlsx"), &ConvertConfig::default())
        .unwrap_err();
    match err {
        SchedError::Pattern { pattern, reason } => {
            assert_eq!(pattern, "S-M | 9:00 AM - 9:50 AM | Trailhead");
            assert_eq!(reason, "unknown weekday 'S'");
        }
        other => panic!("expected a pattern error, got {:?}", other),
    }
}

#[test]
fn nonexistent_file_is_a_workbook_error() {
    let err = read_rows_from_path(fixture("does_not_exist.xlsx")).unwrap_err();
    assert!(matches!(err, SchedError::Workbook(_)));
}

#[test]
fn garbage_bytes_are_a_workbook_error() {
    let err = read_rows_from_bytes(b"Course Listing,Meeting Patterns\n").unwrap_err();
    assert!(matches!(err, SchedError::Workbook(_)));
}
