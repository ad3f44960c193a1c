//! Event entity.
//!
//! # Invariants
//! - `start < end`, checked once in [`Event::new`].
//! - Identity is the alias only, compared case-insensitively.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{format_date_time, Description, EventAlias, EventName};
use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const EVENT_WINDOW_CONSTRAINTS: &str = "Start time must be before end time";

/// Raised when an event would end at or before its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindowError {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Display for EventWindowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(EVENT_WINDOW_CONSTRAINTS)
    }
}

impl Error for EventWindowError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: EventName,
    alias: EventAlias,
    start: NaiveDateTime,
    end: NaiveDateTime,
    description: Description,
}

impl Event {
    pub fn new(
        name: EventName,
        alias: EventAlias,
        start: NaiveDateTime,
        end: NaiveDateTime,
        description: Description,
    ) -> Result<Self, EventWindowError> {
        if start >= end {
            return Err(EventWindowError { start, end });
        }
        Ok(Self {
            name,
            alias,
            start,
            end,
            description,
        })
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn alias(&self) -> &EventAlias {
        &self.alias
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn description(&self) -> &Description {
        &self.description
    }
}

impl Entity for Event {
    const KIND: EntityKind = EntityKind::Event;

    fn same_identity(&self, other: &Self) -> bool {
        self.alias.matches(&other.alias)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Alias: {}; Start: {}; End: {}; Description: {}",
            self.name,
            self.alias,
            format_date_time(&self.start),
            format_date_time(&self.end),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::parse_date_time;

    fn event(alias: &str, start: &str, end: &str) -> Result<Event, EventWindowError> {
        Event::new(
            EventName::parse("Concert").unwrap(),
            EventAlias::parse(alias).unwrap(),
            parse_date_time(start).unwrap(),
            parse_date_time(end).unwrap(),
            Description::parse("Tour").unwrap(),
        )
    }

    #[test]
    fn new_rejects_end_not_after_start() {
        assert!(event("A", "2025-09-19 19:30", "2025-09-19 19:30").is_err());
        let err = event("A", "2025-09-19 20:00", "2025-09-19 19:30").unwrap_err();
        assert_eq!(err.to_string(), EVENT_WINDOW_CONSTRAINTS);
    }

    #[test]
    fn identity_is_alias_ignoring_case() {
        let first = event("TSC2025", "2025-09-19 19:30", "2025-09-19 23:30").unwrap();
        let second = event("tsc2025", "2025-01-01 10:00", "2025-01-01 11:00").unwrap();
        assert!(first.same_identity(&second));
        assert_ne!(first, second);
    }
}
