//! Page-scoped state managers and use-case services.
//!
//! # Responsibility
//! - Apply state transitions explicitly, one call per UI event.
//! - Keep the presentation layer decoupled from storage details.

pub mod board_service;
pub mod edit_flow;
pub mod event_store;
pub mod settings_service;
