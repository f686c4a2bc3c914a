use crate::common::{make_temp_dir, normalized_lines, normalized_text, run_with_input};

#[test]
fn invalid_menu_option_reports_error_and_continues() {
    let dir = make_temp_dir("menu-invalid");
    let output = run_with_input(&dir, "abc\n8\n");

    assert!(output.status.success());
    let stderr = normalized_text(&output.stderr);
    assert!(
        stderr.contains("INVALID MENU OPTION -- please enter a number."),
        "stderr was: {stderr}"
    );
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("Goodbye :)"), "stdout was: {stdout}");
}

#[test]
fn out_of_range_menu_option_asks_for_a_valid_number() {
    let dir = make_temp_dir("menu-range");
    let output = run_with_input(&dir, "9\n8\n");

    assert!(output.status.success());
    let stderr = normalized_text(&output.stderr);
    assert!(
        stderr.contains("INVALID MENU OPTION -- please enter a valid number."),
        "stderr was: {stderr}"
    );
}

#[test]
fn menu_lists_all_eight_options() {
    let dir = make_temp_dir("menu-list");
    let output = run_with_input(&dir, "8\n");

    let stdout = normalized_text(&output.stdout);
    for expected in [
        "(1) Save/Load Student Data",
        "(2) Add Student",
        "(3) Analyse Data",
        "(4) Sort Students",
        "(5) Plot Grades",
        "(6) Plot Grade Distribution",
        "(7) Plot Grade Histogram",
        "(8) Exit",
    ] {
        assert!(stdout.contains(expected), "missing '{expected}' in: {stdout}");
    }
}

#[test]
fn add_then_analyse_reports_statistics() {
    let dir = make_temp_dir("menu-analyse");
    let input = "2\n1\nAlice\n90\n2\n2\nBob\n40\n3\n8\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("Student has been added."), "stdout: {stdout}");
    assert!(stdout.contains("Highest Grade = 90"), "stdout: {stdout}");
    assert!(stdout.contains("Lowest Grade = 40"), "stdout: {stdout}");
    assert!(stdout.contains("Average Grade = 65.00"), "stdout: {stdout}");
}

#[test]
fn analyse_with_no_records_reports_no_data() {
    let dir = make_temp_dir("menu-nodata");
    let output = run_with_input(&dir, "3\n8\n");

    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("No data available."), "stdout: {stdout}");
}

#[test]
fn duplicate_id_aborts_the_add() {
    let dir = make_temp_dir("menu-dup");
    let input = "2\n1\nAlice\n90\n2\n1\n3\n8\n";
    let output = run_with_input(&dir, input);

    let stderr = normalized_text(&output.stderr);
    assert!(stderr.contains("Error - ID 1 is taken."), "stderr: {stderr}");
    // Only the first record made it in.
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("Average Grade = 90.00"), "stdout: {stdout}");
}

#[test]
fn out_of_bounds_grade_aborts_the_add() {
    let dir = make_temp_dir("menu-bounds");
    let input = "2\n1\nAlice\n120\n3\n8\n";
    let output = run_with_input(&dir, input);

    let stderr = normalized_text(&output.stderr);
    assert!(
        stderr.contains("Error - Grade value 120 out of bounds."),
        "stderr: {stderr}"
    );
    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("No data available."), "stdout: {stdout}");
}

#[test]
fn non_integer_id_aborts_the_add() {
    let dir = make_temp_dir("menu-badid");
    let output = run_with_input(&dir, "2\nseven\n8\n");

    let stderr = normalized_text(&output.stderr);
    assert!(
        stderr.contains("Error - ID should be an integer."),
        "stderr: {stderr}"
    );
}

#[test]
fn sort_by_grade_reorders_the_table() {
    let dir = make_temp_dir("menu-sort");
    let input = "2\n1\nAlice\n90\n2\n2\nBob\n40\n4\n3\n8\n";
    let output = run_with_input(&dir, input);

    let lines = normalized_lines(&output.stdout);
    let bob = lines.iter().position(|l| l.contains("Bob"));
    let alice = lines.iter().position(|l| l.contains("Alice"));
    assert!(
        matches!((bob, alice), (Some(b), Some(a)) if b < a),
        "expected Bob before Alice, lines: {lines:?}"
    );
}

#[test]
fn pie_distribution_reports_pass_and_fail_shares() {
    let dir = make_temp_dir("menu-pie");
    let input = "2\n1\nAlice\n90\n2\n2\nBob\n40\n6\n8\n";
    let output = run_with_input(&dir, input);

    let stdout = normalized_text(&output.stdout);
    assert!(stdout.contains("STUDENT PASS VS FAIL RATES"), "stdout: {stdout}");
    assert!(stdout.contains("1 (50.0%)"), "stdout: {stdout}");
}

#[test]
fn empty_roster_plots_print_placeholder() {
    let dir = make_temp_dir("menu-noplot");
    let output = run_with_input(&dir, "5\n6\n7\n8\n");

    let stdout = normalized_text(&output.stdout);
    let occurrences = stdout.matches("No data available for plotting.").count();
    assert_eq!(occurrences, 3, "stdout: {stdout}");
}

#[test]
fn typing_exit_leaves_immediately() {
    let dir = make_temp_dir("menu-exit-word");
    let output = run_with_input(&dir, "exit\n");
    assert!(output.status.success());
}
