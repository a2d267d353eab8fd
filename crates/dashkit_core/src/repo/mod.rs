//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the settings storage contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod settings_repo;
