//! Kanban board model and move reducer.
//!
//! # Responsibility
//! - Define the fixed column set and the board partition of tasks.
//! - Provide a pure move reducer that returns a new board value.
//!
//! # Invariants
//! - Every `TaskId` appears in exactly one column, exactly once.
//! - All four columns are always present, in display order.
//! - Reducers never mutate `self`; columns untouched by a move are shared
//!   with the previous board through `Arc`.

use crate::model::task::{Task, TaskId, TaskValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Identifier of one of the fixed board columns.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Default target for newly added tasks.
    #[default]
    Todo,
    InProgress,
    Review,
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Todo,
        ColumnId::InProgress,
        ColumnId::Review,
        ColumnId::Done,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Header label used when a board is built without explicit titles.
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = BoardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            other => Err(BoardError::UnknownColumn(other.to_string())),
        }
    }
}

/// Board construction and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Drag adapter or stored data referenced a column outside the fixed set.
    UnknownColumn(String),
    /// The same column was supplied twice.
    DuplicateColumn(ColumnId),
    /// A task id appears more than once across the board.
    DuplicateTask(TaskId),
    /// Stored task data fails task validation.
    InvalidTask {
        id: TaskId,
        reason: TaskValidationError,
    },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownColumn(value) => write!(f, "unknown column id: `{value}`"),
            Self::DuplicateColumn(id) => write!(f, "column supplied twice: {id}"),
            Self::DuplicateTask(id) => write!(f, "task appears more than once: {id}"),
            Self::InvalidTask { id, reason } => write!(f, "task {id} is invalid: {reason}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTask { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Ordered bucket of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with its default title.
    pub fn empty(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(id: ColumnId, tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::empty(id)
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> + '_ {
        self.tasks.iter().map(|task| &task.id)
    }
}

/// Position of a card in the board, as reported by the drag adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub column: ColumnId,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: ColumnId, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragOutcome {
    /// Dropped outside any column or aborted.
    Cancelled,
    Moved {
        source: DragLocation,
        destination: DragLocation,
    },
}

impl DragOutcome {
    /// Builds an outcome from the adapter's raw tuple, where a missing
    /// destination means the gesture was cancelled.
    pub fn from_parts(source: DragLocation, destination: Option<DragLocation>) -> Self {
        match destination {
            Some(destination) => Self::Moved {
                source,
                destination,
            },
            None => Self::Cancelled,
        }
    }

    /// Returns `true` when applying this outcome cannot change a board.
    pub fn is_noop(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Moved {
                source,
                destination,
            } => source == destination,
        }
    }
}

/// Kanban board: a partition of tasks over the fixed column set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Board {
    columns: [Arc<Column>; 4],
}

impl Board {
    /// Creates a board with four empty columns.
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL.map(|id| Arc::new(Column::empty(id))),
        }
    }

    /// Builds a board from explicit columns.
    ///
    /// Missing columns are filled with empty defaults.
    ///
    /// # Errors
    /// - `DuplicateColumn` when a column id is supplied twice.
    /// - `DuplicateTask` when a task id appears more than once.
    /// - `InvalidTask` when a task has blank content or an unnormalized
    ///   assignee.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        let mut seen_columns = HashSet::new();
        for column in columns {
            if !seen_columns.insert(column.id) {
                return Err(BoardError::DuplicateColumn(column.id));
            }
            let slot = column.id.slot();
            board.columns[slot] = Arc::new(column);
        }
        board.check_partition()?;
        Ok(board)
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.slot()]
    }

    /// Columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().map(Arc::as_ref)
    }

    /// Returns whether both boards hold the very same column allocation.
    pub fn shares_column(&self, other: &Board, id: ColumnId) -> bool {
        Arc::ptr_eq(&self.columns[id.slot()], &other.columns[id.slot()])
    }

    pub fn task_count(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Finds the column and index currently holding `task_id`.
    pub fn locate(&self, task_id: &TaskId) -> Option<(ColumnId, usize)> {
        self.columns().find_map(|column| {
            column
                .tasks
                .iter()
                .position(|task| &task.id == task_id)
                .map(|index| (column.id, index))
        })
    }

    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.locate(task_id).is_some()
    }

    /// Verifies that every task is valid and no task id is duplicated
    /// across the board.
    pub fn check_partition(&self) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for task in self.columns().flat_map(|column| column.tasks.iter()) {
            task.validate().map_err(|reason| BoardError::InvalidTask {
                id: task.id.clone(),
                reason,
            })?;
            if !seen.insert(&task.id) {
                return Err(BoardError::DuplicateTask(task.id.clone()));
            }
        }
        Ok(())
    }

    /// Panics unless `source` addresses an existing card.
    pub(crate) fn assert_source(&self, source: DragLocation) -> usize {
        let source_len = self.column(source.column).len();
        assert!(
            source.index < source_len,
            "move source index {} out of range for column `{}` (len {})",
            source.index,
            source.column,
            source_len
        );
        source_len
    }

    /// Returns a new board with the task at `source` moved to `destination`.
    ///
    /// For same-column moves `destination.index` addresses the list after the
    /// task has been removed.
    ///
    /// # Panics
    /// Panics when `source.index` is not a valid index into the source column
    /// or `destination.index` exceeds the destination length. Indices come
    /// from the trusted drag adapter, so a bad index is a caller bug.
    pub fn with_move(&self, source: DragLocation, destination: DragLocation) -> Board {
        let source_len = self.assert_source(source);
        let destination_len = if source.column == destination.column {
            source_len - 1
        } else {
            self.column(destination.column).len()
        };
        assert!(
            destination.index <= destination_len,
            "move destination index {} out of range for column `{}` (len {})",
            destination.index,
            destination.column,
            destination_len
        );

        let mut next = self.clone();
        let task = Arc::make_mut(&mut next.columns[source.column.slot()])
            .tasks
            .remove(source.index);
        Arc::make_mut(&mut next.columns[destination.column.slot()])
            .tasks
            .insert(destination.index, task);
        next
    }

    /// Returns a new board with `task` appended to `column`.
    ///
    /// Callers are responsible for validation; see `BoardStore::add_task`.
    pub fn with_appended(&self, column: ColumnId, task: Task) -> Board {
        let mut next = self.clone();
        Arc::make_mut(&mut next.columns[column.slot()]).tasks.push(task);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<Vec<Column>> for Board {
    type Error = BoardError;

    fn try_from(value: Vec<Column>) -> Result<Self, Self::Error> {
        Self::from_columns(value)
    }
}

impl From<Board> for Vec<Column> {
    fn from(value: Board) -> Self {
        value
            .columns
            .into_iter()
            .map(Arc::unwrap_or_clone)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardError, Column, ColumnId, DragLocation, DragOutcome};
    use crate::model::task::{Priority, Task, TaskValidationError};

    fn task(id: &str) -> Task {
        Task::new(id, format!("content of {id}"), Priority::Medium)
    }

    #[test]
    fn column_id_parses_adapter_strings() {
        assert_eq!("in-progress".parse::<ColumnId>().unwrap(), ColumnId::InProgress);
        assert_eq!(
            "backlog".parse::<ColumnId>().unwrap_err(),
            BoardError::UnknownColumn("backlog".to_string())
        );
    }

    #[test]
    fn from_columns_fills_missing_columns() {
        let board =
            Board::from_columns(vec![Column::with_tasks(ColumnId::Done, vec![task("t1")])])
                .unwrap();
        assert_eq!(board.columns().count(), 4);
        assert_eq!(board.column(ColumnId::Todo).title, "To Do");
        assert_eq!(board.task_count(), 1);
    }

    #[test]
    fn from_columns_rejects_duplicate_tasks_across_columns() {
        let err = Board::from_columns(vec![
            Column::with_tasks(ColumnId::Todo, vec![task("t1")]),
            Column::with_tasks(ColumnId::Review, vec![task("t1")]),
        ])
        .unwrap_err();
        assert_eq!(err, BoardError::DuplicateTask("t1".into()));
    }

    #[test]
    fn from_columns_rejects_repeated_column() {
        let err = Board::from_columns(vec![Column::empty(ColumnId::Todo), Column::empty(ColumnId::Todo)])
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateColumn(ColumnId::Todo));
    }

    #[test]
    fn from_columns_places_columns_by_id() {
        let board = Board::from_columns(vec![
            Column::with_tasks(ColumnId::Review, vec![task("t2")]),
            Column::with_tasks(ColumnId::Todo, vec![task("t1")]),
        ])
        .unwrap();
        assert_eq!(board.locate(&"t1".into()), Some((ColumnId::Todo, 0)));
        assert_eq!(board.locate(&"t2".into()), Some((ColumnId::Review, 0)));
    }

    #[test]
    fn from_columns_rejects_blank_content() {
        let err = Board::from_columns(vec![Column::with_tasks(
            ColumnId::Todo,
            vec![Task::new("t1", "   ", Priority::Low)],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidTask {
                id: "t1".into(),
                reason: TaskValidationError::BlankContent,
            }
        );
    }

    #[test]
    fn from_columns_rejects_unnormalized_assignee() {
        let mut padded = task("t1");
        padded.assignee = Some("  Jane ".to_string());
        let err = Board::from_columns(vec![Column::with_tasks(ColumnId::Done, vec![padded])])
            .unwrap_err();
        assert!(matches!(
            err,
            BoardError::InvalidTask {
                reason: TaskValidationError::UnnormalizedAssignee,
                ..
            }
        ));
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::from_columns(vec![Column::with_tasks(
            ColumnId::Todo,
            vec![task("t1"), task("t2")],
        )])
        .unwrap();

        let moved = board.with_move(
            DragLocation::new(ColumnId::Todo, 0),
            DragLocation::new(ColumnId::Done, 0),
        );

        assert_eq!(board.column(ColumnId::Todo).len(), 2);
        assert_eq!(moved.column(ColumnId::Todo).len(), 1);
        assert!(moved.shares_column(&board, ColumnId::Review));
        assert!(!moved.shares_column(&board, ColumnId::Todo));
    }

    #[test]
    #[should_panic(expected = "move source index 3 out of range")]
    fn with_move_panics_on_bad_source_index() {
        let board = Board::empty();
        let _ = board.with_move(
            DragLocation::new(ColumnId::Todo, 3),
            DragLocation::new(ColumnId::Done, 0),
        );
    }

    #[test]
    fn drag_outcome_from_parts_maps_missing_destination_to_cancelled() {
        let source = DragLocation::new(ColumnId::Todo, 0);
        assert_eq!(DragOutcome::from_parts(source, None), DragOutcome::Cancelled);
        assert!(DragOutcome::from_parts(source, Some(source)).is_noop());
    }
}
