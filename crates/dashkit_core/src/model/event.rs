//! Calendar event model.
//!
//! # Responsibility
//! - Define the calendar entry record and its category.
//! - Define the form-facing draft and the partial update patch.
//!
//! # Invariants
//! - `title` is never blank once an event is accepted by the store.
//! - `date` is a calendar day; time-of-day is not represented.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id for an event created from the add-event form.
    pub fn generate() -> Self {
        Self(format!("event-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    #[default]
    Meeting,
    Deadline,
    Reminder,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Deadline => "deadline",
            Self::Reminder => "reminder",
        }
    }
}

/// Validation failures for event input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    BlankTitle,
    MissingDate,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::MissingDate => write!(f, "event date is required"),
        }
    }
}

impl Error for EventValidationError {}

/// A single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub date: NaiveDate,
    /// Serialized as `type` to match the calendar page wire naming.
    #[serde(rename = "type")]
    pub kind: EventKind,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        date: NaiveDate,
        kind: EventKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            kind,
        }
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Returns whether this event falls on `day`.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }

    /// Returns a copy with every present patch field applied.
    pub fn patched(&self, patch: &EventPatch) -> Self {
        Self {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            date: patch.date.unwrap_or(self.date),
            kind: patch.kind.unwrap_or(self.kind),
        }
    }
}

/// Partial update applied by `EventStore::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub kind: Option<EventKind>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.kind.is_none()
    }
}

/// In-progress, uncommitted event form state.
///
/// Unlike `CalendarEvent`, the date may still be unset while the user is
/// filling the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub kind: EventKind,
}

impl EventDraft {
    /// Blank draft pre-filled with the calendar's selected day.
    pub fn for_date(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    /// Checks the draft and returns its accepted date.
    pub fn validate(&self) -> Result<NaiveDate, EventValidationError> {
        if self.title.trim().is_empty() {
            return Err(EventValidationError::BlankTitle);
        }
        self.date.ok_or(EventValidationError::MissingDate)
    }

    /// Converts the draft into an event with the given id.
    pub fn into_event(self, id: EventId) -> Result<CalendarEvent, EventValidationError> {
        let date = self.validate()?;
        Ok(CalendarEvent {
            id,
            title: self.title,
            date,
            kind: self.kind,
        })
    }

    /// Full-replacement patch describing this draft.
    pub fn to_patch(&self) -> Result<EventPatch, EventValidationError> {
        let date = self.validate()?;
        Ok(EventPatch {
            title: Some(self.title.clone()),
            date: Some(date),
            kind: Some(self.kind),
        })
    }
}

impl From<&CalendarEvent> for EventDraft {
    fn from(value: &CalendarEvent) -> Self {
        Self {
            title: value.title.clone(),
            date: Some(value.date),
            kind: value.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarEvent, EventDraft, EventKind, EventPatch, EventValidationError};
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn patched_only_overrides_present_fields() {
        let event = CalendarEvent::new("e1", "Standup", day(20), EventKind::Meeting);
        let patch = EventPatch {
            kind: Some(EventKind::Reminder),
            ..EventPatch::default()
        };

        let next = event.patched(&patch);
        assert_eq!(next.title, "Standup");
        assert_eq!(next.date, day(20));
        assert_eq!(next.kind, EventKind::Reminder);
    }

    #[test]
    fn draft_without_date_is_rejected() {
        let draft = EventDraft {
            title: "Retro".to_string(),
            ..EventDraft::default()
        };
        assert_eq!(draft.validate(), Err(EventValidationError::MissingDate));
    }

    #[test]
    fn draft_title_is_checked_before_date() {
        let draft = EventDraft::for_date(None);
        assert_eq!(draft.validate(), Err(EventValidationError::BlankTitle));
    }

    #[test]
    fn draft_from_event_roundtrips_fields() {
        let event = CalendarEvent::new("e1", "Launch", day(21), EventKind::Deadline);
        let draft = EventDraft::from(&event);
        assert_eq!(draft.clone().into_event(event.id.clone()).unwrap(), event);
    }
}
