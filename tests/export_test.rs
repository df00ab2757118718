//! CSV export tests, in-memory and on disk.

mod common;

use common::roster;
use minidash::export::{to_csv, write_csv, EXPORT_FILE_NAME, HEADERS};
use minidash::filter::{ModeFilter, ResearcherFilter, StatusFilter};
use minidash::models::Mode;
use tempfile::TempDir;

#[test]
fn test_csv_layout() {
    let roster = roster();
    let csv = to_csv(&roster).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], HEADERS.join(","));
    assert_eq!(
        lines[1],
        "Dr. Sarah Johnson,+1-555-0101,1@hospital.org,Cardiology,Interventional Cardiology,\
         Michael Chen,Lisa Rodriguez,CP,completed,100%,Boston MA"
    );
    assert!(!csv.ends_with('\n'));
}

#[test]
fn test_empty_export_is_header_only() {
    let csv = to_csv(std::iter::empty::<&minidash::models::Researcher>()).unwrap();
    assert_eq!(csv, HEADERS.join(","));
}

#[test]
fn test_export_follows_filtered_view() {
    let roster = roster();
    let filter = ResearcherFilter::new("", ModeFilter::Only(Mode::Gc), StatusFilter::All);
    let csv = to_csv(filter.apply(&roster)).unwrap();

    let body: Vec<&str> = csv.lines().skip(1).collect();
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|line| line.contains(",GC,")));
}

#[test]
fn test_fields_are_written_unquoted() {
    let mut roster = roster();
    roster[0].location = "Boston, MA".to_string();
    let csv = to_csv(&roster[..1]).unwrap();
    let row = csv.lines().nth(1).unwrap();

    assert!(!row.contains('"'));
    // The embedded comma adds a column
    assert_eq!(row.split(',').count(), HEADERS.len() + 1);
}

#[test]
fn test_write_csv_creates_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("exports");
    let roster = roster();

    let path = write_csv(&roster, &target).unwrap();
    assert_eq!(path, target.join(EXPORT_FILE_NAME));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_csv(&roster).unwrap());
}

#[test]
fn test_write_csv_overwrites_previous_export() {
    let temp_dir = TempDir::new().unwrap();
    let roster = roster();

    write_csv(&roster, temp_dir.path()).unwrap();
    let path = write_csv(&roster[..1], temp_dir.path()).unwrap();

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn test_write_csv_into_file_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "x").unwrap();

    let err = write_csv(&roster(), &blocker).unwrap_err();
    assert!(err.to_string().contains("failed to write export"));
}
