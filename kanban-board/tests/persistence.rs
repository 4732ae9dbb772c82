//! Persistence round-trips through the file-backed adapter: hydration,
//! per-slot fallback, and date reconstruction.

use chrono::{TimeZone, Utc};
use kanban_board::{
    Column, ColumnId, FileStorage, KanbanBoard, StorageAdapter, Task, TaskDraft, TaskId,
    COLUMNS_KEY, TASKS_KEY,
};
use std::collections::HashMap;
use tempfile::TempDir;

fn initial_columns() -> Vec<Column> {
    vec![
        Column::new("todo", "To Do", "#e57373"),
        Column::new("done", "Done", "#64b5f6").with_max_tasks(5),
    ]
}

fn board_at(dir: &TempDir) -> KanbanBoard {
    KanbanBoard::new(
        initial_columns(),
        HashMap::new(),
        Box::new(FileStorage::new(dir.path().join("board"))),
    )
}

#[test]
fn test_snapshot_roundtrip_reproduces_board() {
    let dir = TempDir::new().unwrap();
    let due = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();

    let first_id = {
        let mut board = board_at(&dir);
        board.open_create(ColumnId::from_string("todo"));
        let task = board
            .save(TaskDraft::new("Persisted").with_due_date(due))
            .unwrap()
            .unwrap();

        board.begin_drag(task.id.clone(), ColumnId::from_string("todo"));
        board.drag_over(&ColumnId::from_string("done"), 0);
        board.drop_on(&ColumnId::from_string("done")).unwrap();
        task.id
    };

    // A fresh widget over the same directory sees the moved task, with
    // its dates reconstructed as real date values
    let board = board_at(&dir);
    let task = &board.tasks()[&first_id];
    assert_eq!(task.title, "Persisted");
    assert_eq!(task.status.as_str(), "done");
    assert_eq!(task.due_date, Some(due));
    assert_eq!(
        board.columns().iter().find(|c| c.id.as_str() == "done").unwrap().task_ids,
        vec![first_id.clone()]
    );
}

#[test]
fn test_missing_storage_falls_back_to_initial() {
    let dir = TempDir::new().unwrap();
    let board = board_at(&dir);

    assert_eq!(board.columns().len(), 2);
    assert!(board.tasks().is_empty());
}

#[test]
fn test_malformed_slot_falls_back_per_slot() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("board"));

    // A well-formed tasks slot next to a corrupt columns slot
    let mut task = Task::new("Survivor", ColumnId::from_string("todo"));
    task.id = TaskId::from_string("s1");
    let tasks: HashMap<TaskId, Task> = [(task.id.clone(), task)].into();
    storage
        .save(TASKS_KEY, &serde_json::to_string(&tasks).unwrap())
        .unwrap();
    storage.save(COLUMNS_KEY, "#### not json ####").unwrap();

    let board = board_at(&dir);

    // Columns fell back to the initial set, tasks hydrated from disk
    assert_eq!(board.columns().len(), 2);
    assert_eq!(board.columns()[0].id.as_str(), "todo");
    assert_eq!(board.tasks().len(), 1);
    assert_eq!(board.tasks()[&TaskId::from_string("s1")].title, "Survivor");
}

#[test]
fn test_tasks_slot_with_wrong_shape_is_discarded() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("board"));
    storage.save(TASKS_KEY, "[1, 2, 3]").unwrap();

    let board = board_at(&dir);
    assert!(board.tasks().is_empty());
}

#[test]
fn test_every_committed_change_is_written() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("board"));

    let mut board = board_at(&dir);
    board.open_create(ColumnId::from_string("todo"));
    board.save(TaskDraft::new("One")).unwrap();

    let tasks_after_create: HashMap<TaskId, Task> =
        serde_json::from_str(&storage.load(TASKS_KEY).unwrap()).unwrap();
    assert_eq!(tasks_after_create.len(), 1);

    let id = tasks_after_create.keys().next().unwrap().clone();
    board.request_delete(&id);
    board.confirm_delete(&id);

    let tasks_after_delete: HashMap<TaskId, Task> =
        serde_json::from_str(&storage.load(TASKS_KEY).unwrap()).unwrap();
    assert!(tasks_after_delete.is_empty());
}

#[test]
fn test_dates_serialize_as_iso8601_strings() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path().join("board"));

    let mut board = board_at(&dir);
    board.open_create(ColumnId::from_string("todo"));
    board
        .save(TaskDraft::new("Dated").with_due_date(Utc::now()))
        .unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&storage.load(TASKS_KEY).unwrap()).unwrap();
    let (_, task) = raw.as_object().unwrap().iter().next().unwrap();
    assert!(task["createdAt"].is_string());
    assert!(task["dueDate"].is_string());
}
