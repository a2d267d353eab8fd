//! Domain model for the kanban, calendar and settings pages.
//!
//! # Responsibility
//! - Define canonical data structures used by core state managers.
//! - Keep validation rules next to the records they guard.
//!
//! # Invariants
//! - Tasks and events are identified by stable, caller-visible ids.
//! - Model types carry no presentation styling.

pub mod board;
pub mod event;
pub mod settings;
pub mod task;
