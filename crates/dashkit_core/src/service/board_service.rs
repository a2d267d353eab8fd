//! Kanban board state manager.
//!
//! # Responsibility
//! - Own the current board snapshot for the kanban page.
//! - Apply drag-gesture moves and task additions as immutable updates.
//!
//! # Invariants
//! - Each effective change replaces the snapshot with a new `Arc<Board>` and
//!   bumps `version` by one; no-ops leave both untouched.
//! - Published snapshots are never mutated afterwards.
//! - Task count across the board only changes through `add_task`.

use crate::model::board::{Board, ColumnId, DragLocation, DragOutcome};
use crate::model::task::{Task, TaskValidationError};
use log::{debug, info};
use std::sync::Arc;

/// Page-scoped owner of the kanban board.
#[derive(Debug, Clone)]
pub struct BoardStore {
    board: Arc<Board>,
    version: u64,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board: Arc::new(board),
            version: 0,
        }
    }

    /// Current board snapshot for rendering.
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Borrowed view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of effective changes applied since construction.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Applies a finished drag gesture.
    ///
    /// Returns `true` when the board changed.
    ///
    /// # Panics
    /// Panics on out-of-range indices; see `Board::with_move`.
    pub fn apply_drag(&mut self, outcome: DragOutcome) -> bool {
        match outcome {
            DragOutcome::Cancelled => {
                debug!("event=board_move module=board status=noop reason=cancelled");
                false
            }
            DragOutcome::Moved {
                source,
                destination,
            } => self.apply_move(source, Some(destination)),
        }
    }

    /// Moves the task at `source` to `destination`.
    ///
    /// A `None` destination (dropped outside any column) and a drop onto the
    /// original position are ignored. Returns `true` when the board changed.
    ///
    /// # Panics
    /// Panics on out-of-range indices; see `Board::with_move`.
    pub fn apply_move(&mut self, source: DragLocation, destination: Option<DragLocation>) -> bool {
        let Some(destination) = destination else {
            debug!("event=board_move module=board status=noop reason=no_destination");
            return false;
        };
        self.board.assert_source(source);
        if source == destination {
            debug!(
                "event=board_move module=board status=noop reason=same_position column={} index={}",
                source.column, source.index
            );
            return false;
        }

        let next = self.board.with_move(source, destination);
        self.publish(next);
        debug!(
            "event=board_move module=board status=ok from={}:{} to={}:{} version={}",
            source.column, source.index, destination.column, destination.index, self.version
        );
        true
    }

    /// Appends `task` to the end of `column`.
    ///
    /// # Errors
    /// - `BlankContent` when content is whitespace only.
    /// - `DuplicateId` when the id is already on the board.
    ///
    /// Rejections leave the board and version unchanged.
    pub fn add_task(&mut self, column: ColumnId, task: Task) -> Result<(), TaskValidationError> {
        if let Err(err) = self.check_new_task(&task) {
            info!(
                "event=board_add_task module=board status=rejected column={} reason={}",
                column, err
            );
            return Err(err);
        }

        let task_id = task.id.clone();
        let next = self.board.with_appended(column, task);
        self.publish(next);
        debug!(
            "event=board_add_task module=board status=ok column={} task_id={} version={}",
            column, task_id, self.version
        );
        Ok(())
    }

    /// Appends `task` to the default intake column.
    pub fn add_task_to_default(&mut self, task: Task) -> Result<(), TaskValidationError> {
        self.add_task(ColumnId::default(), task)
    }

    fn check_new_task(&self, task: &Task) -> Result<(), TaskValidationError> {
        task.validate()?;
        if self.board.contains_task(&task.id) {
            return Err(TaskValidationError::DuplicateId(task.id.clone()));
        }
        Ok(())
    }

    fn publish(&mut self, next: Board) {
        self.board = Arc::new(next);
        self.version += 1;
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::BoardStore;
    use crate::model::board::{Board, Column, ColumnId, DragLocation};
    use crate::model::task::{Priority, Task, TaskValidationError};
    use std::sync::Arc;

    fn store_with_todo(ids: &[&str]) -> BoardStore {
        let tasks = ids
            .iter()
            .map(|id| Task::new(*id, format!("do {id}"), Priority::Low))
            .collect();
        BoardStore::new(
            Board::from_columns(vec![Column::with_tasks(ColumnId::Todo, tasks)]).unwrap(),
        )
    }

    #[test]
    fn effective_move_bumps_version_and_replaces_snapshot() {
        let mut store = store_with_todo(&["t1", "t2"]);
        let before = store.snapshot();

        assert!(store.apply_move(
            DragLocation::new(ColumnId::Todo, 0),
            Some(DragLocation::new(ColumnId::Todo, 1)),
        ));

        assert_eq!(store.version(), 1);
        assert!(!Arc::ptr_eq(&before, &store.snapshot()));
        assert_eq!(before.column(ColumnId::Todo).tasks[0].id.as_str(), "t1");
    }

    #[test]
    fn noop_move_keeps_snapshot_identity() {
        let mut store = store_with_todo(&["t1"]);
        let before = store.snapshot();

        let location = DragLocation::new(ColumnId::Todo, 0);
        assert!(!store.apply_move(location, None));
        assert!(!store.apply_move(location, Some(location)));

        assert_eq!(store.version(), 0);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn add_task_rejects_duplicate_id() {
        let mut store = store_with_todo(&["t1"]);
        let err = store
            .add_task(ColumnId::Done, Task::new("t1", "again", Priority::High))
            .unwrap_err();

        assert_eq!(err, TaskValidationError::DuplicateId("t1".into()));
        assert_eq!(store.version(), 0);
        assert!(store.board().column(ColumnId::Done).is_empty());
    }
}
