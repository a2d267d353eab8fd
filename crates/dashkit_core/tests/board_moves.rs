use dashkit_core::seed::seed_board;
use dashkit_core::{
    Board, BoardStore, Column, ColumnId, DragLocation, DragOutcome, Priority, Task,
    TaskValidationError,
};

fn task(id: &str) -> Task {
    Task::new(id, format!("content {id}"), Priority::Medium)
}

fn ids(store: &BoardStore, column: ColumnId) -> Vec<String> {
    store
        .board()
        .column(column)
        .task_ids()
        .map(|id| id.as_str().to_string())
        .collect()
}

fn at(column: ColumnId, index: usize) -> DragLocation {
    DragLocation::new(column, index)
}

#[test]
fn cross_column_move_matches_scenario() {
    let board = Board::from_columns(vec![Column::with_tasks(
        ColumnId::Todo,
        vec![task("T1"), task("T2")],
    )])
    .unwrap();
    let mut store = BoardStore::new(board);

    assert!(store.apply_move(at(ColumnId::Todo, 0), Some(at(ColumnId::Done, 0))));

    assert_eq!(ids(&store, ColumnId::Todo), vec!["T2"]);
    assert_eq!(ids(&store, ColumnId::Done), vec!["T1"]);
}

#[test]
fn same_column_reorder_inserts_into_shortened_list() {
    let board = Board::from_columns(vec![Column::with_tasks(
        ColumnId::Review,
        vec![task("a"), task("b"), task("c")],
    )])
    .unwrap();
    let mut store = BoardStore::new(board);

    store.apply_move(at(ColumnId::Review, 0), Some(at(ColumnId::Review, 2)));
    assert_eq!(ids(&store, ColumnId::Review), vec!["b", "c", "a"]);

    store.apply_move(at(ColumnId::Review, 2), Some(at(ColumnId::Review, 0)));
    assert_eq!(ids(&store, ColumnId::Review), vec!["a", "b", "c"]);
}

#[test]
fn same_position_is_identity() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let before = store.snapshot();

    assert!(!store.apply_move(at(ColumnId::InProgress, 1), Some(at(ColumnId::InProgress, 1))));

    assert_eq!(*store.snapshot(), *before);
    assert_eq!(store.version(), 0);
}

#[test]
fn cancelled_drag_leaves_board_unchanged() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let before = store.snapshot();

    assert!(!store.apply_drag(DragOutcome::Cancelled));
    assert!(!store.apply_drag(DragOutcome::from_parts(at(ColumnId::Todo, 0), None)));

    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn moves_preserve_task_count_and_identity() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let total = store.board().task_count();
    let original = store.board().column(ColumnId::Todo).tasks[0].clone();

    let moves = [
        (at(ColumnId::Todo, 0), at(ColumnId::Done, 2)),
        (at(ColumnId::Done, 2), at(ColumnId::InProgress, 0)),
        (at(ColumnId::InProgress, 0), at(ColumnId::InProgress, 2)),
        (at(ColumnId::Review, 1), at(ColumnId::Todo, 0)),
        (at(ColumnId::InProgress, 2), at(ColumnId::Review, 1)),
    ];
    for (source, destination) in moves {
        store.apply_drag(DragOutcome::Moved {
            source,
            destination,
        });
        assert_eq!(store.board().task_count(), total);
        store.board().check_partition().unwrap();
    }

    let (column, index) = store.board().locate(&original.id).unwrap();
    assert_eq!(column, ColumnId::Review);
    assert_eq!(store.board().column(column).tasks[index], original);
    assert_eq!(store.version(), moves.len() as u64);
}

#[test]
fn move_shares_untouched_columns_with_previous_snapshot() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let before = store.snapshot();

    store.apply_move(at(ColumnId::Todo, 1), Some(at(ColumnId::Done, 0)));
    let after = store.snapshot();

    assert!(after.shares_column(&before, ColumnId::InProgress));
    assert!(after.shares_column(&before, ColumnId::Review));
    assert!(!after.shares_column(&before, ColumnId::Todo));
    assert!(!after.shares_column(&before, ColumnId::Done));
}

#[test]
#[should_panic(expected = "move destination index 5 out of range")]
fn out_of_range_destination_fails_fast() {
    let mut store = BoardStore::new(seed_board().unwrap());
    store.apply_move(at(ColumnId::Todo, 0), Some(at(ColumnId::Done, 5)));
}

#[test]
#[should_panic(expected = "move destination index 3 out of range")]
fn same_column_destination_is_checked_against_shortened_list() {
    let mut store = BoardStore::new(seed_board().unwrap());
    store.apply_move(at(ColumnId::Todo, 0), Some(at(ColumnId::Todo, 3)));
}

#[test]
fn add_task_appends_to_default_column() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let new_task = Task::new("task-10", "Write release notes", Priority::Low).with_assignee(" ");

    store.add_task_to_default(new_task.clone()).unwrap();

    let todo = store.board().column(ColumnId::Todo);
    assert_eq!(todo.len(), 4);
    assert_eq!(todo.tasks.last(), Some(&new_task));
    assert_eq!(todo.tasks[3].assignee, None);
}

#[test]
fn whitespace_only_task_is_rejected_without_change() {
    let mut store = BoardStore::new(seed_board().unwrap());
    let before = store.snapshot();

    let err = store
        .add_task(ColumnId::Todo, Task::new("task-x", "  ", Priority::High))
        .unwrap_err();

    assert_eq!(err, TaskValidationError::BlankContent);
    assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn board_serializes_columns_in_display_order() {
    let board = seed_board().unwrap();
    let json = serde_json::to_value(&board).unwrap();

    assert_eq!(json[0]["id"], "todo");
    assert_eq!(json[1]["id"], "in-progress");
    assert_eq!(json[0]["tasks"][0]["priority"], "high");
    assert!(json[0]["tasks"][2].get("assignee").is_none());

    let decoded: Board = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, board);
}

#[test]
fn deserialize_rejects_duplicated_task() {
    let value = serde_json::json!([
        { "id": "todo", "title": "To Do", "tasks": [
            { "id": "t1", "content": "a", "priority": "low" }
        ]},
        { "id": "done", "title": "Done", "tasks": [
            { "id": "t1", "content": "a", "priority": "low" }
        ]}
    ]);

    let err = serde_json::from_value::<Board>(value).unwrap_err();
    assert!(
        err.to_string().contains("task appears more than once: t1"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_blank_content_and_assignee() {
    let value = serde_json::json!([
        { "id": "todo", "title": "To Do", "tasks": [
            { "id": "t1", "content": "   ", "priority": "low", "assignee": "  " }
        ]}
    ]);

    let err = serde_json::from_value::<Board>(value).unwrap_err();
    assert!(
        err.to_string().contains("task t1 is invalid"),
        "unexpected error: {err}"
    );

    let value = serde_json::json!([
        { "id": "review", "title": "Review", "tasks": [
            { "id": "t2", "content": "check", "priority": "high", "assignee": " Jane " }
        ]}
    ]);
    let err = serde_json::from_value::<Board>(value).unwrap_err();
    assert!(
        err.to_string().contains("assignee must be trimmed"),
        "unexpected error: {err}"
    );
}

#[test]
#[should_panic(expected = "move source index 7 out of range")]
fn same_position_move_with_bad_index_panics() {
    let mut store = BoardStore::default();
    store.apply_move(at(ColumnId::Todo, 7), Some(at(ColumnId::Todo, 7)));
}
