//! Calendar edit flow state machine.
//!
//! # Responsibility
//! - Track which event is selected and the draft being edited.
//! - Commit drafts to an `EventStore` only on explicit save.
//!
//! # Invariants
//! - The store is never touched before `save`.
//! - `cancel` always discards the draft and returns to `Idle`.
//! - A rejected save keeps the flow in `Editing` with the draft intact.

use crate::model::event::{CalendarEvent, EventDraft, EventId};
use crate::service::event_store::{EventStore, EventStoreError};
use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current step of the edit flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Selected(CalendarEvent),
    Editing {
        /// `None` while composing a brand-new event.
        target: Option<EventId>,
        draft: EventDraft,
    },
}

impl EditState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Selected(_) => "selected",
            Self::Editing { .. } => "editing",
        }
    }
}

/// Errors returned by edit flow transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditFlowError {
    /// The requested action is not allowed from the current state.
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
    /// The store rejected the draft on save.
    Store(EventStoreError),
}

impl Display for EditFlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { from, action } => {
                write!(f, "cannot {action} while {from}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditFlowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::InvalidTransition { .. } => None,
        }
    }
}

impl From<EventStoreError> for EditFlowError {
    fn from(value: EventStoreError) -> Self {
        Self::Store(value)
    }
}

/// Explicit transition functions for the calendar page's edit flow.
#[derive(Debug, Clone, Default)]
pub struct EditFlow {
    state: EditState,
}

impl EditFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Selects an event. Allowed from `Idle` and `Selected`.
    pub fn select(&mut self, event: CalendarEvent) -> Result<(), EditFlowError> {
        match self.state {
            EditState::Idle | EditState::Selected(_) => {
                self.state = EditState::Selected(event);
                Ok(())
            }
            EditState::Editing { .. } => Err(self.invalid("select")),
        }
    }

    /// Clears the selection. Allowed from `Idle` and `Selected`.
    pub fn deselect(&mut self) -> Result<(), EditFlowError> {
        match self.state {
            EditState::Idle | EditState::Selected(_) => {
                self.state = EditState::Idle;
                Ok(())
            }
            EditState::Editing { .. } => Err(self.invalid("deselect")),
        }
    }

    /// Clones the selected event into a draft.
    pub fn begin_edit(&mut self) -> Result<(), EditFlowError> {
        let EditState::Selected(event) = &self.state else {
            return Err(self.invalid("begin_edit"));
        };
        let next = EditState::Editing {
            target: Some(event.id.clone()),
            draft: EventDraft::from(event),
        };
        debug!("event=calendar_edit module=calendar status=start event_id={}", event.id);
        self.state = next;
        Ok(())
    }

    /// Starts composing a new event dated on the calendar's selected day.
    pub fn begin_create(&mut self, selected_date: Option<NaiveDate>) -> Result<(), EditFlowError> {
        match self.state {
            EditState::Idle | EditState::Selected(_) => {
                self.state = EditState::Editing {
                    target: None,
                    draft: EventDraft::for_date(selected_date),
                };
                Ok(())
            }
            EditState::Editing { .. } => Err(self.invalid("begin_create")),
        }
    }

    /// Current draft, if editing.
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the draft for form field bindings.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.state {
            EditState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Commits the draft to `store` and returns to `Idle`.
    ///
    /// Returns the id of the saved event.
    pub fn save(&mut self, store: &mut EventStore) -> Result<EventId, EditFlowError> {
        let EditState::Editing { target, draft } = &self.state else {
            return Err(self.invalid("save"));
        };

        let saved_id = match target {
            Some(id) => {
                let patch = draft
                    .to_patch()
                    .map_err(EventStoreError::from)?;
                store.update(id, patch)?;
                id.clone()
            }
            None => store.add_draft(draft.clone())?,
        };

        debug!(
            "event=calendar_edit module=calendar status=saved event_id={}",
            saved_id
        );
        self.state = EditState::Idle;
        Ok(saved_id)
    }

    /// Discards any draft and returns to `Idle`.
    pub fn cancel(&mut self) {
        if matches!(self.state, EditState::Editing { .. }) {
            debug!("event=calendar_edit module=calendar status=cancelled");
        }
        self.state = EditState::Idle;
    }

    fn invalid(&self, action: &'static str) -> EditFlowError {
        EditFlowError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}
