//! Event commands: add, edit, delete, find and list.
//!
//! # Invariants
//! - Events are addressed by alias against the full list, never the view.
//! - Deleting an event unlinks every contact that pointed at its alias.

use crate::command::{CommandError, CommandOutcome, CommandResult, DisplayTag};
use crate::model::contact::Contact;
use crate::model::event::Event;
use crate::model::fields::{Description, EventAlias, EventName};
use crate::model::filter::EventFilter;
use crate::model::organizer::Model;
use crate::model::unique_list::ModelError;
use chrono::NaiveDateTime;

pub const ADD_EVENT_WORD: &str = "add-event";
pub const EDIT_EVENT_WORD: &str = "edit-event";
pub const DELETE_EVENT_WORD: &str = "delete-event";
pub const FIND_EVENT_WORD: &str = "find-event";
pub const LIST_EVENTS_WORD: &str = "list-events";

pub const ADD_EVENT_USAGE: &str = "add-event: Adds an event to the organizer.\n\
Parameters: en/EVENT_NAME ea/ALIAS st/START et/END d/DESCRIPTION\n\
Example: add-event en/Taylor Swift concert ea/TSC2025 st/2025-09-19 19:30 \
et/2025-09-19 23:30 d/Eras tour";
pub const EDIT_EVENT_USAGE: &str = "edit-event: Edits the event identified by its alias. \
Existing values will be overwritten by the input values.\n\
Parameters: ea/ALIAS [en/EVENT_NAME] [st/START] [et/END] [d/DESCRIPTION]\n\
Example: edit-event ea/TSC2025 st/2025-09-19 18:30 d/Venue changed to Indoor Stadium";
pub const DELETE_EVENT_USAGE: &str = "delete-event: Deletes the event identified by its alias \
and unlinks every contact linked to it.\n\
Parameters: ea/ALIAS\n\
Example: delete-event ea/TSC2025";
pub const FIND_EVENT_USAGE: &str = "find-event: Finds all events whose alias starts with any \
of the keywords (case-insensitive).\n\
Parameters: ea/KEYWORD [MORE_KEYWORDS]...\n\
Example: find-event ea/tsc";
pub const LIST_EVENTS_USAGE: &str = "list-events: Lists all events.\nExample: list-events";

pub const MESSAGE_EVENT_NOT_EDITED: &str = "At least one field to edit must be provided.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEventCommand {
    event: Event,
}

impl AddEventCommand {
    pub fn new(event: Event) -> Self {
        Self { event }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        if model.has_event(&self.event) {
            return Err(CommandError::DuplicateEvent(self.event.alias().clone()));
        }
        model.add_event(self.event.clone())?;
        Ok(CommandResult::changed(
            format!("New event added: {}", self.event),
            DisplayTag::Events,
        ))
    }
}

/// Fields overlaid on an existing event. The alias itself is not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventEdit {
    pub name: Option<EventName>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub description: Option<Description>,
}

impl EventEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.start.is_some()
            || self.end.is_some()
            || self.description.is_some()
    }

    fn overlay(&self, target: &Event) -> Result<Event, CommandError> {
        let edited = Event::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            target.alias().clone(),
            self.start.unwrap_or_else(|| target.start()),
            self.end.unwrap_or_else(|| target.end()),
            self.description
                .clone()
                .unwrap_or_else(|| target.description().clone()),
        )?;
        Ok(edited)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEventCommand {
    alias: EventAlias,
    edit: EventEdit,
}

impl EditEventCommand {
    pub fn new(alias: EventAlias, edit: EventEdit) -> Self {
        Self { alias, edit }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .organizer()
            .find_event(&self.alias)
            .cloned()
            .ok_or_else(|| CommandError::EventNotFound(self.alias.clone()))?;
        let edited = self.edit.overlay(&target)?;

        let committed = edited.clone();
        model.apply(|organizer| {
            organizer
                .events_mut()
                .set(&target, committed)
                .map_err(|err| match err {
                    ModelError::Duplicate(_) => {
                        CommandError::DuplicateEvent(target.alias().clone())
                    }
                    other => CommandError::Model(other),
                })
        })?;
        model.update_event_filter(EventFilter::ShowAll);

        Ok(CommandResult::changed(
            format!("Edited event: {edited}"),
            DisplayTag::Events,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEventCommand {
    alias: EventAlias,
}

impl DeleteEventCommand {
    pub fn new(alias: EventAlias) -> Self {
        Self { alias }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .organizer()
            .find_event(&self.alias)
            .cloned()
            .ok_or_else(|| CommandError::EventNotFound(self.alias.clone()))?;

        let unlinked = model.apply(|organizer| -> Result<usize, CommandError> {
            organizer.events_mut().remove(&target)?;
            let mut unlinked = 0;
            let contacts: Vec<Contact> = organizer
                .contacts()
                .iter()
                .map(|contact| {
                    if contact.is_linked_to(target.alias()) {
                        unlinked += 1;
                        contact.with_event(None)
                    } else {
                        contact.clone()
                    }
                })
                .collect();
            organizer.contacts_mut().set_all(contacts)?;
            Ok(unlinked)
        })?;

        let mut message = format!("Deleted event: {target}");
        if unlinked > 0 {
            message.push_str(&format!("\nUnlinked {unlinked} contact(s) from this event"));
        }
        Ok(CommandResult::changed(message, DisplayTag::Events))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindEventCommand {
    keywords: Vec<String>,
}

impl FindEventCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.update_event_filter(EventFilter::AliasPrefixes(self.keywords.clone()));
        Ok(CommandResult::viewed(
            format!("{} events listed!", model.shown_event_count()),
            DisplayTag::Events,
        ))
    }
}

pub fn list_events(model: &mut Model) -> CommandOutcome {
    model.update_event_filter(EventFilter::ShowAll);
    Ok(CommandResult::viewed("Listed all events", DisplayTag::Events))
}
