//! Fixed startup data for the kanban and calendar pages.

use crate::model::board::{Board, BoardError, Column, ColumnId};
use crate::model::event::{CalendarEvent, EventKind};
use crate::model::task::{Priority, Task};
use chrono::{Days, NaiveDate};

/// Builds the demo board shown on first load.
pub fn seed_board() -> Result<Board, BoardError> {
    Board::from_columns(vec![
        Column::with_tasks(
            ColumnId::Todo,
            vec![
                Task::new("task-1", "Create dashboard wireframes", Priority::High)
                    .with_assignee("Jane Smith"),
                Task::new("task-2", "Design database schema", Priority::Medium)
                    .with_assignee("Mike Johnson"),
                Task::new("task-3", "Research API integration options", Priority::Low),
            ],
        ),
        Column::with_tasks(
            ColumnId::InProgress,
            vec![
                Task::new("task-4", "Implement authentication service", Priority::High)
                    .with_assignee("John Doe"),
                Task::new("task-5", "Create component library", Priority::Medium)
                    .with_assignee("Lisa Brown"),
            ],
        ),
        Column::with_tasks(
            ColumnId::Review,
            vec![
                Task::new("task-6", "Code review: User module", Priority::Medium)
                    .with_assignee("Tom Wilson"),
                Task::new("task-7", "Test payment integration", Priority::High)
                    .with_assignee("Emma Davis"),
            ],
        ),
        Column::with_tasks(
            ColumnId::Done,
            vec![
                Task::new("task-8", "Project setup", Priority::Low).with_assignee("John Doe"),
                Task::new("task-9", "Define requirements", Priority::Medium)
                    .with_assignee("Jane Smith"),
            ],
        ),
    ])
}

/// Builds the demo events, placed relative to `today`.
pub fn seed_events(today: NaiveDate) -> Vec<CalendarEvent> {
    [
        ("1", "Team Meeting", -3, EventKind::Meeting),
        ("2", "Project Deadline", 2, EventKind::Deadline),
        ("3", "Client Call", 0, EventKind::Meeting),
        ("4", "Review Progress", 7, EventKind::Reminder),
        ("5", "Team Lunch", 4, EventKind::Meeting),
    ]
    .into_iter()
    .map(|(id, title, offset, kind)| CalendarEvent::new(id, title, shift(today, offset), kind))
    .collect()
}

fn shift(day: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset < 0 {
        day.checked_sub_days(days)
    } else {
        day.checked_add_days(days)
    };
    shifted.unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::{seed_board, seed_events};
    use crate::model::board::ColumnId;
    use chrono::NaiveDate;

    #[test]
    fn seed_board_has_nine_tasks_in_four_columns() {
        let board = seed_board().unwrap();
        assert_eq!(board.task_count(), 9);
        assert_eq!(board.column(ColumnId::Todo).len(), 3);
        assert_eq!(board.column(ColumnId::Done).len(), 2);
        assert_eq!(board.column(ColumnId::Todo).tasks[2].assignee, None);
    }

    #[test]
    fn seed_events_are_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let events = seed_events(today);
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2025, 2, 26).unwrap());
        assert_eq!(events[2].date, today);
        assert_eq!(events[3].date, NaiveDate::from_ymd_opt(2025, 3, 8).unwrap());
    }
}
