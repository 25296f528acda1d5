use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use taskboard_core::{StoreError, StoreObserver, Task, TaskStatus, TaskStore};

fn task(id: &str, status: TaskStatus) -> Task {
    Task::with_id(id, format!("task {id}"), status, "Alice Cooper", "2024-03-01")
        .expect("valid task")
}

fn store_with(tasks: Vec<Task>) -> TaskStore {
    let mut store = TaskStore::new();
    store.initialize(tasks).expect("store initializes");
    store
}

fn ids(store: &TaskStore) -> Vec<&str> {
    store.snapshot().iter().map(|task| task.id.as_str()).collect()
}

fn lane_ids(store: &TaskStore, status: TaskStatus) -> Vec<&str> {
    store.lane(status).map(|task| task.id.as_str()).collect()
}

#[test]
fn initialize_rejects_duplicate_ids_and_keeps_previous_state() {
    let mut store = store_with(vec![task("a", TaskStatus::Todo)]);

    let err = store
        .initialize(vec![task("x", TaskStatus::Todo), task("x", TaskStatus::Done)])
        .expect_err("initialize rejects input");
    assert_eq!(err, StoreError::DuplicateId("x".to_string()));
    assert_eq!(ids(&store), vec!["a"]);
}

#[test]
fn initialize_rejects_invalid_records() {
    let mut store = TaskStore::new();
    let mut bad = task("a", TaskStatus::Todo);
    bad.due_date = "tomorrow".to_string();

    let err = store.initialize(vec![bad]).expect_err("initialize rejects input");
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn move_changes_status_and_inserts_before_nth_lane_task() {
    let mut store = store_with(vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::Done),
        task("3", TaskStatus::Todo),
        task("4", TaskStatus::Done),
    ]);

    store.move_task("1", TaskStatus::Done, 1).expect("move succeeds");

    assert_eq!(store.get("1").expect("task 1 present").status, TaskStatus::Done);
    assert_eq!(lane_ids(&store, TaskStatus::Done), vec!["2", "1", "4"]);
    assert_eq!(ids(&store), vec!["2", "3", "1", "4"]);
}

#[test]
fn move_past_lane_end_appends_to_sequence() {
    let mut store = store_with(vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::Done),
        task("3", TaskStatus::Todo),
    ]);

    store.move_task("1", TaskStatus::InProgress, 5).expect("move succeeds");

    assert_eq!(ids(&store), vec!["2", "3", "1"]);
    assert_eq!(lane_ids(&store, TaskStatus::InProgress), vec!["1"]);
}

#[test]
fn move_within_lane_reorders() {
    let mut store = store_with(vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::Todo),
        task("3", TaskStatus::Todo),
    ]);

    store.move_task("3", TaskStatus::Todo, 0).expect("move succeeds");
    assert_eq!(ids(&store), vec!["3", "1", "2"]);

    store.move_task("3", TaskStatus::Todo, 2).expect("move succeeds");
    assert_eq!(ids(&store), vec!["1", "2", "3"]);
}

#[test]
fn move_to_same_slot_is_idempotent_noop() {
    let mut store = store_with(vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::Done),
        task("3", TaskStatus::Todo),
    ]);
    let before = store.snapshot().to_vec();

    store.move_task("3", TaskStatus::Todo, 1).expect("move succeeds");
    assert_eq!(store.snapshot(), before.as_slice());

    store.move_task("1", TaskStatus::Done, 0).expect("move succeeds");
    let once = store.snapshot().to_vec();
    store.move_task("1", TaskStatus::Done, 0).expect("move succeeds");
    assert_eq!(store.snapshot(), once.as_slice());
}

#[test]
fn move_unknown_task_is_not_found_and_changes_nothing() {
    let mut store = store_with(vec![task("1", TaskStatus::Todo)]);
    let before = store.snapshot().to_vec();

    let err = store.move_task("missing", TaskStatus::Done, 0).expect_err("move rejected");
    assert_eq!(err, StoreError::NotFound("missing".to_string()));
    assert_eq!(store.snapshot(), before.as_slice());
}

#[test]
fn update_replaces_in_place() {
    let mut store = store_with(vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::Todo),
        task("3", TaskStatus::Todo),
    ]);

    let mut updated = task("2", TaskStatus::Done);
    updated.title = "renamed".to_string();
    store.update_task(updated.clone()).expect("update succeeds");

    assert_eq!(ids(&store), vec!["1", "2", "3"]);
    assert_eq!(store.get("2"), Some(&updated));
}

#[test]
fn update_unknown_task_is_not_found() {
    let mut store = store_with(vec![task("1", TaskStatus::Todo)]);
    let err = store.update_task(task("9", TaskStatus::Todo)).expect_err("update rejected");
    assert_eq!(err, StoreError::NotFound("9".to_string()));
}

#[test]
fn update_rejects_invalid_record() {
    let mut store = store_with(vec![task("1", TaskStatus::Todo)]);
    let mut bad = task("1", TaskStatus::Todo);
    bad.due_date = "2024-02-31".to_string();

    assert!(matches!(
        store.update_task(bad).expect_err("update rejected"),
        StoreError::Validation(_)
    ));
    assert_eq!(store.get("1").expect("task 1 present").due_date, "2024-03-01");
}

#[test]
fn id_set_is_conserved_across_mutations() {
    let seed = vec![
        task("1", TaskStatus::Todo),
        task("2", TaskStatus::InProgress),
        task("3", TaskStatus::Done),
        task("4", TaskStatus::Todo),
    ];
    let expected: BTreeSet<String> = seed.iter().map(|task| task.id.clone()).collect();
    let mut store = store_with(seed);

    let moves = [
        ("1", TaskStatus::Done, 0),
        ("4", TaskStatus::InProgress, 3),
        ("2", TaskStatus::Todo, 0),
        ("3", TaskStatus::Done, 9),
        ("1", TaskStatus::Todo, 1),
    ];
    for (id, status, index) in moves {
        store.move_task(id, status, index).expect("move succeeds");
        let _ = store.move_task("ghost", status, index);
    }
    store.update_task(task("2", TaskStatus::Done)).expect("update succeeds");
    let _ = store.update_task(task("ghost", TaskStatus::Done));

    let actual: BTreeSet<String> = store.snapshot().iter().map(|task| task.id.clone()).collect();
    assert_eq!(actual, expected);
    assert_eq!(store.len(), 4);
}

#[derive(Default)]
struct Recorder {
    sizes: Mutex<Vec<usize>>,
}

impl StoreObserver for Recorder {
    fn on_tasks_changed(&self, snapshot: &[Task]) {
        self.sizes.lock().expect("observer lock").push(snapshot.len());
    }
}

#[test]
fn observers_see_effective_mutations_only() {
    let recorder = Arc::new(Recorder::default());
    let mut store = TaskStore::new();
    store.subscribe(recorder.clone());

    store
        .initialize(vec![task("1", TaskStatus::Todo), task("2", TaskStatus::Todo)])
        .expect("store initializes");
    store.move_task("1", TaskStatus::Todo, 0).expect("move succeeds");
    store.move_task("1", TaskStatus::Done, 0).expect("move succeeds");
    let _ = store.move_task("missing", TaskStatus::Done, 0);
    store.update_task(task("2", TaskStatus::Todo)).expect("update succeeds");

    assert_eq!(*recorder.sizes.lock().expect("observer lock"), vec![2, 2, 2]);
}
