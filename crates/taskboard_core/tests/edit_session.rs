use taskboard_core::{
    EditSession, EditSessionState, SessionAction, SessionError, StoreError, Task, TaskEdit,
    TaskStatus, TaskStore,
};

fn seeded_store() -> TaskStore {
    let mut store = TaskStore::new();
    store
        .initialize(vec![
            Task::with_id("1", "Design", TaskStatus::InProgress, "Alice", "2024-02-28")
                .expect("valid task"),
            Task::with_id("2", "Research", TaskStatus::Todo, "Bob", "2024-03-05")
                .expect("valid task"),
        ])
        .expect("store initializes");
    store
}

#[test]
fn new_session_is_closed() {
    let session = EditSession::new();
    assert_eq!(session.state(), EditSessionState::Closed);
    assert!(session.working_copy().is_none());
}

#[test]
fn select_opens_clean_and_edit_marks_dirty() {
    let store = seeded_store();
    let mut session = EditSession::new();

    session.select(store.get("2").expect("task 2 present"));
    assert_eq!(session.state(), EditSessionState::OpenClean);

    session.edit(&TaskEdit::Title("Interviews".to_string())).expect("edit accepted");
    assert_eq!(session.state(), EditSessionState::OpenDirty);

    session.edit(&TaskEdit::Title("Research".to_string())).expect("edit accepted");
    assert_eq!(session.state(), EditSessionState::OpenClean);
}

#[test]
fn edits_do_not_touch_the_store_before_save() {
    let store = seeded_store();
    let before = store.snapshot().to_vec();
    let mut session = EditSession::new();

    session.select(store.get("1").expect("task 1 present"));
    session.edit(&TaskEdit::Title("X".to_string())).expect("edit accepted");
    session.edit(&TaskEdit::Status(TaskStatus::Done)).expect("edit accepted");

    assert_eq!(store.snapshot(), before.as_slice());
    assert_eq!(session.working_copy().expect("session is open").title, "X");
}

#[test]
fn save_commits_only_edited_field() {
    let mut store = seeded_store();
    let original = store.get("1").expect("task 1 present").clone();
    let mut session = EditSession::new();

    session.select(&original);
    session.edit(&TaskEdit::Title("X".to_string())).expect("edit accepted");
    let committed = session.save(&mut store).expect("save commits");

    assert_eq!(session.state(), EditSessionState::Closed);
    let stored = store.get("1").expect("task 1 present");
    assert_eq!(stored, &committed);
    assert_eq!(stored.title, "X");
    assert_eq!(stored.status, original.status);
    assert_eq!(stored.assignee, original.assignee);
    assert_eq!(stored.due_date, original.due_date);
    assert_eq!(store.snapshot()[0].id, "1");
}

#[test]
fn cancel_discards_working_copy() {
    let store = seeded_store();
    let before = store.snapshot().to_vec();
    let mut session = EditSession::new();

    session.select(store.get("2").expect("task 2 present"));
    session.edit(&TaskEdit::Assignee("Zed".to_string())).expect("edit accepted");
    session.cancel().expect("cancel closes session");

    assert_eq!(session.state(), EditSessionState::Closed);
    assert_eq!(store.snapshot(), before.as_slice());
}

#[test]
fn closed_session_rejects_edit_save_and_cancel() {
    let mut store = seeded_store();
    let before = store.snapshot().to_vec();
    let mut session = EditSession::new();

    assert_eq!(
        session.edit(&TaskEdit::Title("X".to_string())),
        Err(SessionError::InvalidTransition(SessionAction::Edit))
    );
    assert_eq!(
        session.save(&mut store),
        Err(SessionError::InvalidTransition(SessionAction::Save))
    );
    assert_eq!(
        session.cancel(),
        Err(SessionError::InvalidTransition(SessionAction::Cancel))
    );
    assert_eq!(session.state(), EditSessionState::Closed);
    assert_eq!(store.snapshot(), before.as_slice());
}

#[test]
fn save_of_vanished_task_fails_but_still_closes() {
    let mut store = seeded_store();
    let ghost = Task::with_id("9", "Ghost", TaskStatus::Todo, "Nobody", "2024-01-01")
        .expect("valid task");
    let before = store.snapshot().to_vec();
    let mut session = EditSession::new();

    session.select(&ghost);
    let err = session.save(&mut store).expect_err("save rejected");

    assert_eq!(err, SessionError::Store(StoreError::NotFound("9".to_string())));
    assert_eq!(session.state(), EditSessionState::Closed);
    assert_eq!(store.snapshot(), before.as_slice());
}

#[test]
fn invalid_due_date_edit_is_rejected_without_change() {
    let store = seeded_store();
    let mut session = EditSession::new();
    session.select(store.get("1").expect("task 1 present"));

    let err = session
        .edit(&TaskEdit::DueDate("2024-02-30".to_string()))
        .expect_err("edit rejected");

    assert!(matches!(err, SessionError::InvalidField(_)));
    assert_eq!(session.state(), EditSessionState::OpenClean);
    assert_eq!(session.working_copy().expect("session is open").due_date, "2024-02-28");
}

#[test]
fn select_while_open_retargets_session() {
    let store = seeded_store();
    let mut session = EditSession::new();

    session.select(store.get("1").expect("task 1 present"));
    session.edit(&TaskEdit::Title("draft".to_string())).expect("edit accepted");
    session.select(store.get("2").expect("task 2 present"));

    assert_eq!(session.state(), EditSessionState::OpenClean);
    assert_eq!(session.working_copy().expect("session is open").id, "2");
    assert_eq!(session.working_copy().expect("session is open").title, "Research");
}
