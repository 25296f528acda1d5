use std::io::Write;
use taskboard_core::{load_seed_file, Dashboard, Seed, SeedError, TaskStatus};

fn write_seed(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write seed file");
    file
}

#[test]
fn loads_tasks_and_defaults_missing_activities() {
    let file = write_seed(
        r#"{"tasks": [
            {"id": "a", "title": "Plan", "status": "in-progress",
             "assignee": "Dana", "dueDate": "2024-07-01"}
        ]}"#,
    );

    let seed = load_seed_file(file.path()).expect("seed loads");

    assert_eq!(seed.tasks.len(), 1);
    assert_eq!(seed.tasks[0].status, TaskStatus::InProgress);
    assert!(seed.activities.is_empty());

    let dashboard = Dashboard::from_seed(seed).expect("dashboard builds");
    assert_eq!(dashboard.view().lane_counts.in_progress, 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_seed_file(dir.path().join("absent.json")).expect_err("seed load fails");
    assert!(matches!(err, SeedError::Io { .. }));
}

#[test]
fn invalid_task_record_is_parse_error() {
    let file = write_seed(
        r#"{"tasks": [
            {"id": "a", "title": "Plan", "status": "todo",
             "assignee": "Dana", "dueDate": "next week"}
        ]}"#,
    );

    let err = load_seed_file(file.path()).expect_err("seed load fails");
    assert!(matches!(err, SeedError::Parse { .. }));
    assert!(err.to_string().contains("invalid seed file"));
}

#[test]
fn duplicate_ids_are_rejected_by_dashboard() {
    let file = write_seed(
        r#"{"tasks": [
            {"id": "a", "title": "One", "status": "todo", "assignee": "x", "dueDate": "2024-01-01"},
            {"id": "a", "title": "Two", "status": "done", "assignee": "y", "dueDate": "2024-01-02"}
        ]}"#,
    );

    let seed = load_seed_file(file.path()).expect("seed loads");
    assert!(Dashboard::from_seed(seed).is_err());
}

#[test]
fn builtin_seed_matches_demo_board() {
    let seed = Seed::builtin();
    assert_eq!(seed.tasks.len(), 3);
    assert_eq!(seed.activities.len(), 2);
    assert_eq!(seed.tasks[1].assignee, "Bob Wilson");
}
