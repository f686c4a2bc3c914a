use crate::common::make_temp_dir;
use gradebook::core::models::{Grade, StudentRecord};
use gradebook::core::persist::{load_roster, save_roster};
use gradebook::core::roster::Roster;
use gradebook::core::types::SortField;
use std::fs;

fn record(id: i32, name: &str, grade: f32) -> StudentRecord {
    StudentRecord::new(id, name, Grade::new(grade).unwrap()).unwrap()
}

#[test]
fn round_trip_preserves_fractional_grades_exactly() {
    let dir = make_temp_dir("core-roundtrip");
    let path = dir.join("data.csv");

    let mut roster = Roster::new();
    roster.add(record(1, "Alice", 90.25)).unwrap();
    roster.add(record(2, "Bob", 0.5)).unwrap();
    roster.add(record(3, "Cara", 100.0)).unwrap();

    save_roster(&roster, &path).unwrap();
    let loaded = load_roster(&path).unwrap().unwrap();

    assert_eq!(loaded.records(), roster.records());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = make_temp_dir("core-parents");
    let path = dir.join("nested").join("deep").join("data.csv");

    let mut roster = Roster::new();
    roster.add(record(1, "Alice", 90.0)).unwrap();
    save_roster(&roster, &path).unwrap();

    assert!(path.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn sorting_by_grade_keeps_ties_in_insertion_order() {
    let mut roster = Roster::new();
    roster.add(record(5, "Eve", 70.0)).unwrap();
    roster.add(record(2, "Bob", 70.0)).unwrap();
    roster.add(record(9, "Zoe", 10.0)).unwrap();

    let sorted = roster.sorted(SortField::Grade);
    let ids: Vec<i32> = sorted.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 5, 2]);
}

#[test]
fn worked_example_matches_expected_statistics() {
    let mut roster = Roster::new();
    roster.add(record(1, "Alice", 90.0)).unwrap();
    roster.add(record(2, "Bob", 40.0)).unwrap();

    let summary = roster.summary().unwrap();
    assert_eq!((summary.max, summary.min), (90.0, 40.0));
    assert_eq!(format!("{:.2}", summary.mean), "65.00");

    let dist = roster.distribution();
    assert_eq!((dist.pass, dist.fail), (1, 1));

    let histogram = roster.histogram(10);
    assert_eq!(histogram.iter().sum::<usize>(), 2);
}
