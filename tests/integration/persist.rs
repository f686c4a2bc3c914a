use crate::common::{make_temp_dir, normalized_text, run_with_input, write_data_file};
use std::fs;

#[test]
fn save_writes_header_and_rows_to_data_csv() {
    let dir = make_temp_dir("persist-save");
    let input = "2\n1\nAlice\n90\n2\n2\nBob\n40\n1\n1\n8\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("data.csv updated"), "stdout: {stdout}");

    let contents = fs::read_to_string(dir.join("data.csv")).unwrap();
    assert_eq!(contents, "ID,Name,Grade\n1,Alice,90\n2,Bob,40\n");
}

#[test]
fn load_missing_file_starts_with_empty_dataset() {
    let dir = make_temp_dir("persist-missing");
    let output = run_with_input(&dir, "1\n2\n3\n8\n");

    assert!(output.status.success());
    let stderr = normalized_text(&output.stderr);
    assert!(
        stderr.contains("File not found. Starting with an empty dataset."),
        "stderr: {stderr}"
    );
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("No data available."), "stdout: {stdout}");
}

#[test]
fn load_prewritten_file_restores_records() {
    let dir = make_temp_dir("persist-load");
    write_data_file(&dir, "ID,Name,Grade\n1,Alice,90\n2,Bob,40\n");

    let output = run_with_input(&dir, "1\n2\n3\n8\n");

    assert!(output.status.success());
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("Loaded 2 student(s)"), "stdout: {stdout}");
    assert!(stdout.contains("Alice"), "stdout: {stdout}");
    assert!(stdout.contains("Average Grade = 65.00"), "stdout: {stdout}");
}

#[test]
fn save_then_load_round_trip_across_sessions() {
    let dir = make_temp_dir("persist-roundtrip");

    let save_session = run_with_input(&dir, "2\n1\nAlice\n90\n2\n2\nBob\n72.5\n1\n1\n8\n");
    assert!(save_session.status.success());

    let load_session = run_with_input(&dir, "1\n2\n3\n8\n");
    assert!(load_session.status.success());
    let stdout = normalized_text(&load_session.stdout);
    assert!(stdout.contains("Loaded 2 student(s)"), "stdout: {stdout}");
    assert!(stdout.contains("Highest Grade = 90"), "stdout: {stdout}");
    assert!(stdout.contains("Lowest Grade = 72.5"), "stdout: {stdout}");
}

#[test]
fn malformed_data_file_is_a_hard_error() {
    let dir = make_temp_dir("persist-malformed");
    write_data_file(&dir, "ID,Name,Grade\n1,Alice\n");

    let output = run_with_input(&dir, "1\n2\n8\n");

    // Load failures other than a missing file propagate and end the session.
    assert!(!output.status.success());
    let stderr = normalized_text(&output.stderr);
    assert!(stderr.contains("Row 2"), "stderr: {stderr}");
}

#[test]
fn session_log_records_menu_activity() {
    let dir = make_temp_dir("persist-log");
    let output = run_with_input(&dir, "2\n1\nAlice\n90\n1\n1\n8\n");
    assert!(output.status.success());

    let logs_dir = dir.join("logs");
    let entry = fs::read_dir(&logs_dir)
        .unwrap()
        .find_map(|e| e.ok())
        .expect("session log should exist");
    let contents = fs::read_to_string(entry.path()).unwrap();
    assert!(contents.contains("Added Student(id=1, name='Alice', grade=90)"));
    assert!(contents.contains("data.csv updated"));
}
