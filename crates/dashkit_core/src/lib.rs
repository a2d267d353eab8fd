//! Core state logic for the dashkit admin dashboard.
//! This crate is the single source of truth for board, calendar and settings
//! invariants; rendering lives in the presentation layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::board::{Board, BoardError, Column, ColumnId, DragLocation, DragOutcome};
pub use model::event::{
    CalendarEvent, EventDraft, EventId, EventKind, EventPatch, EventValidationError,
};
pub use model::settings::{DashboardSettings, LayoutMode, ThemeColor, ThemeMode};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use repo::settings_repo::{RepoError, RepoResult, SettingsRepository, SqliteSettingsRepository};
pub use service::board_service::BoardStore;
pub use service::edit_flow::{EditFlow, EditFlowError, EditState};
pub use service::event_store::{EventStore, EventStoreError, EventStoreResult, EventsOn};
pub use service::settings_service::SettingsService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
