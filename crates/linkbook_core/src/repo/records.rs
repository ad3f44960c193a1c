//! Flat storage records and their conversion to and from the model.
//!
//! # Invariants
//! - Records hold plain strings; every field is optional so that a missing
//!   value is reported by name instead of failing deserialization.
//! - `into_*` runs the same validators as the command parsers.

use crate::model::contact::Contact;
use crate::model::entity::EntityKind;
use crate::model::event::{Event, EVENT_WINDOW_CONSTRAINTS};
use crate::model::fields::{
    Address, Description, Email, EventAlias, EventName, Name, Phone, Tag, TodoName,
    DATE_TIME_CONSTRAINTS,
};
use crate::model::organizer::Organizer;
use crate::model::todo::Todo;
use crate::model::unique_list::ModelError;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Timestamp layout used in storage.
pub const STORAGE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn required<'a>(
    value: &'a Option<String>,
    kind: EntityKind,
    field: &'static str,
) -> RepoResult<&'a str> {
    value
        .as_deref()
        .ok_or(RepoError::MissingField { kind, field })
}

static STORED_DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}$")
        .expect("valid stored date-time regex")
});

fn parse_stored_date_time(raw: &str, field: &'static str) -> RepoResult<NaiveDateTime> {
    let invalid = RepoError::IllegalValue {
        field,
        message: DATE_TIME_CONSTRAINTS,
    };
    let trimmed = raw.trim();
    if !STORED_DATE_TIME_RE.is_match(trimmed) {
        return Err(invalid);
    }
    NaiveDateTime::parse_from_str(trimmed, STORAGE_DATE_TIME_FORMAT).map_err(|_| invalid)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContactRecord {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub event_alias: Option<String>,
}

impl ContactRecord {
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: Some(contact.name().to_string()),
            phone: Some(contact.phone().to_string()),
            email: Some(contact.email().to_string()),
            address: Some(contact.address().to_string()),
            tags: contact.tags().iter().map(ToString::to_string).collect(),
            event_alias: contact.event().map(ToString::to_string),
        }
    }

    pub fn into_contact(self) -> RepoResult<Contact> {
        let kind = EntityKind::Contact;
        let name = Name::parse(required(&self.name, kind, "name")?)?;
        let phone = Phone::parse(required(&self.phone, kind, "phone")?)?;
        let email = Email::parse(required(&self.email, kind, "email")?)?;
        let address = Address::parse(required(&self.address, kind, "address")?)?;
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(tag))
            .collect::<Result<_, _>>()?;
        let event = self
            .event_alias
            .as_deref()
            .map(EventAlias::parse)
            .transpose()?;
        Ok(Contact::new(name, phone, email, address, tags, event))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EventRecord {
    pub name: Option<String>,
    pub alias: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
}

impl EventRecord {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: Some(event.name().to_string()),
            alias: Some(event.alias().to_string()),
            start: Some(event.start().format(STORAGE_DATE_TIME_FORMAT).to_string()),
            end: Some(event.end().format(STORAGE_DATE_TIME_FORMAT).to_string()),
            description: Some(event.description().to_string()),
        }
    }

    pub fn into_event(self) -> RepoResult<Event> {
        let kind = EntityKind::Event;
        let name = EventName::parse(required(&self.name, kind, "name")?)?;
        let alias = EventAlias::parse(required(&self.alias, kind, "alias")?)?;
        let start = parse_stored_date_time(required(&self.start, kind, "start")?, "start")?;
        let end = parse_stored_date_time(required(&self.end, kind, "end")?, "end")?;
        let description =
            Description::parse(required(&self.description, kind, "description")?)?;
        Event::new(name, alias, start, end, description).map_err(|_| RepoError::IllegalValue {
            field: "end",
            message: EVENT_WINDOW_CONSTRAINTS,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TodoRecord {
    pub name: Option<String>,
    pub description: Option<String>,
    pub contact_name: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoRecord {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            name: Some(todo.name().to_string()),
            description: Some(todo.description().to_string()),
            contact_name: todo.contact().map(ToString::to_string),
            completed: todo.is_completed(),
        }
    }

    pub fn into_todo(self) -> RepoResult<Todo> {
        let kind = EntityKind::Todo;
        let name = TodoName::parse(required(&self.name, kind, "name")?)?;
        let description =
            Description::parse(required(&self.description, kind, "description")?)?;
        let contact = self
            .contact_name
            .as_deref()
            .map(Name::parse)
            .transpose()?;
        Ok(Todo::with_status(name, description, contact, self.completed))
    }
}

/// Whole-organizer snapshot in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizerSnapshot {
    pub contacts: Vec<ContactRecord>,
    pub events: Vec<EventRecord>,
    pub todos: Vec<TodoRecord>,
}

impl OrganizerSnapshot {
    pub fn from_model(organizer: &Organizer) -> Self {
        Self {
            contacts: organizer
                .contacts()
                .iter()
                .map(ContactRecord::from_contact)
                .collect(),
            events: organizer
                .events()
                .iter()
                .map(EventRecord::from_event)
                .collect(),
            todos: organizer.todos().iter().map(TodoRecord::from_todo).collect(),
        }
    }

    /// Validates every record and builds the organizer.
    pub fn into_organizer(self) -> RepoResult<Organizer> {
        let contacts = self
            .contacts
            .into_iter()
            .map(ContactRecord::into_contact)
            .collect::<RepoResult<Vec<_>>>()?;
        let events = self
            .events
            .into_iter()
            .map(EventRecord::into_event)
            .collect::<RepoResult<Vec<_>>>()?;
        let todos = self
            .todos
            .into_iter()
            .map(TodoRecord::into_todo)
            .collect::<RepoResult<Vec<_>>>()?;

        let mut organizer = Organizer::new();
        organizer
            .contacts_mut()
            .set_all(contacts)
            .map_err(duplicate)?;
        organizer.events_mut().set_all(events).map_err(duplicate)?;
        organizer.todos_mut().set_all(todos).map_err(duplicate)?;
        Ok(organizer)
    }
}

fn duplicate(err: ModelError) -> RepoError {
    match err {
        ModelError::Duplicate(kind) | ModelError::NotFound(kind) => RepoError::Duplicate(kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_record(start: &str, end: &str) -> EventRecord {
        EventRecord {
            name: Some("Concert".to_string()),
            alias: Some("TSC2025".to_string()),
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            description: Some("Tour".to_string()),
        }
    }

    #[test]
    fn missing_field_is_reported_by_kind_and_name() {
        let record = TodoRecord {
            name: Some("Call".to_string()),
            ..TodoRecord::default()
        };
        let err = record.into_todo().unwrap_err();
        assert_eq!(err.to_string(), "Todo's description field is missing!");
    }

    #[test]
    fn stored_dates_use_storage_layout() {
        let event = event_record("2025-09-19T19:30", "2025-09-19T23:30")
            .into_event()
            .unwrap();
        assert_eq!(EventRecord::from_event(&event).start.as_deref(), Some("2025-09-19T19:30"));

        let err = event_record("2025-09-19 19:30", "2025-09-19T23:30")
            .into_event()
            .unwrap_err();
        assert!(matches!(err, RepoError::IllegalValue { field: "start", .. }));

        let err = event_record("2025-09-19T19:30", "2025-9-19T23:30")
            .into_event()
            .unwrap_err();
        assert!(matches!(err, RepoError::IllegalValue { field: "end", .. }));
    }

    #[test]
    fn reversed_window_is_rejected_on_load() {
        let err = event_record("2025-09-19T23:30", "2025-09-19T19:30")
            .into_event()
            .unwrap_err();
        assert_eq!(err.to_string(), EVENT_WINDOW_CONSTRAINTS);
    }
}
