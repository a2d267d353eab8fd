//! Calendar event store.
//!
//! # Responsibility
//! - Own the calendar page's event collection.
//! - Provide add/update/remove and the per-day derived view.
//!
//! # Invariants
//! - Event ids are unique within the store.
//! - Stored events always pass `CalendarEvent::validate()`.
//! - Iteration order is insertion order; updates keep an event's position.

use crate::model::event::{
    CalendarEvent, EventDraft, EventId, EventPatch, EventValidationError,
};
use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors returned by event store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    /// Input failed field validation.
    Validation(EventValidationError),
    /// `add` targeted an id that is already stored.
    DuplicateId(EventId),
    /// `update` targeted an id that is not stored.
    NotFound(EventId),
}

impl Display for EventStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "event id already exists: {id}"),
            Self::NotFound(id) => write!(f, "event not found: {id}"),
        }
    }
}

impl Error for EventStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for EventStoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type EventStoreResult<T> = Result<T, EventStoreError>;

/// Page-scoped owner of calendar events.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed events, keeping their order.
    ///
    /// # Errors
    /// Fails on the first event that `add` would reject.
    pub fn with_events(events: impl IntoIterator<Item = CalendarEvent>) -> EventStoreResult<Self> {
        let mut store = Self::new();
        for event in events {
            store.add(event)?;
        }
        Ok(store)
    }

    /// Inserts a new event at the end of the collection.
    ///
    /// # Errors
    /// - `Validation` when the title is blank.
    /// - `DuplicateId` when an event with the same id exists.
    pub fn add(&mut self, event: CalendarEvent) -> EventStoreResult<()> {
        if let Err(err) = event.validate() {
            info!(
                "event=calendar_add module=calendar status=rejected reason={}",
                err
            );
            return Err(err.into());
        }
        if self.position(&event.id).is_some() {
            info!(
                "event=calendar_add module=calendar status=rejected reason=duplicate_id event_id={}",
                event.id
            );
            return Err(EventStoreError::DuplicateId(event.id));
        }

        debug!(
            "event=calendar_add module=calendar status=ok event_id={} date={}",
            event.id, event.date
        );
        self.events.push(event);
        Ok(())
    }

    /// Validates a form draft and adds it under a freshly generated id.
    ///
    /// Returns the generated id.
    pub fn add_draft(&mut self, draft: EventDraft) -> EventStoreResult<EventId> {
        let event = draft.into_event(EventId::generate())?;
        let id = event.id.clone();
        self.add(event)?;
        Ok(id)
    }

    /// Merges `patch` into the event with `id`.
    ///
    /// # Errors
    /// - `NotFound` when no event has `id`.
    /// - `Validation` when the merged event would have a blank title.
    pub fn update(&mut self, id: &EventId, patch: EventPatch) -> EventStoreResult<()> {
        let Some(index) = self.position(id) else {
            info!(
                "event=calendar_update module=calendar status=rejected reason=not_found event_id={}",
                id
            );
            return Err(EventStoreError::NotFound(id.clone()));
        };
        if patch.is_empty() {
            debug!(
                "event=calendar_update module=calendar status=noop reason=empty_patch event_id={}",
                id
            );
            return Ok(());
        }

        let merged = self.events[index].patched(&patch);
        merged.validate()?;
        self.events[index] = merged;
        debug!(
            "event=calendar_update module=calendar status=ok event_id={}",
            id
        );
        Ok(())
    }

    /// Deletes the event with `id`.
    ///
    /// Returns `false` when nothing matched; removing twice is harmless.
    pub fn remove(&mut self, id: &EventId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.events.remove(index);
                debug!(
                    "event=calendar_remove module=calendar status=ok event_id={}",
                    id
                );
                true
            }
            None => {
                debug!(
                    "event=calendar_remove module=calendar status=noop event_id={}",
                    id
                );
                false
            }
        }
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Full collection in insertion order.
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Lazy view of events falling on `day`, in insertion order.
    pub fn events_on(&self, day: NaiveDate) -> EventsOn<'_> {
        EventsOn {
            inner: self.events.iter(),
            day,
        }
    }

    pub fn has_events_on(&self, day: NaiveDate) -> bool {
        self.events.iter().any(|event| event.is_on(day))
    }

    /// Days of the given month that carry at least one event.
    pub fn event_days_in_month(&self, year: i32, month: u32) -> BTreeSet<NaiveDate> {
        self.events
            .iter()
            .map(|event| event.date)
            .filter(|date| date.year() == year && date.month() == month)
            .collect()
    }

    fn position(&self, id: &EventId) -> Option<usize> {
        self.events.iter().position(|event| &event.id == id)
    }
}

/// Iterator returned by `EventStore::events_on`.
///
/// A clone resumes from the current position; call `events_on` again to
/// restart from the first event.
#[derive(Debug, Clone)]
pub struct EventsOn<'a> {
    inner: std::slice::Iter<'a, CalendarEvent>,
    day: NaiveDate,
}

impl<'a> Iterator for EventsOn<'a> {
    type Item = &'a CalendarEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.day;
        self.inner.find(|event| event.is_on(day))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for EventsOn<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let day = self.day;
        self.inner.rfind(|event| event.is_on(day))
    }
}

impl std::iter::FusedIterator for EventsOn<'_> {}
