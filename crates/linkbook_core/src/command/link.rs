//! Contact to event links: link, unlink and find-by-event.
//!
//! # Invariants
//! - A batch is resolved completely (indices and event) before any contact
//!   is rewritten.
//! - Links store the event's own alias casing.

use crate::command::contact::shown_contacts_at;
use crate::command::{CommandError, CommandOutcome, CommandResult, DisplayTag};
use crate::index::Index;
use crate::model::fields::EventAlias;
use crate::model::filter::ContactFilter;
use crate::model::organizer::Model;

pub const LINK_EVENT_WORD: &str = "link-event";
pub const UNLINK_EVENT_WORD: &str = "unlink-event";
pub const FIND_BY_EVENT_WORD: &str = "find-by-event";

pub const LINK_EVENT_USAGE: &str = "link-event: Links one or more contacts to an event.\n\
Parameters: INDEX [MORE_INDEXES]... ea/ALIAS\n\
Example: link-event 1 2 ea/TSC2025";
pub const UNLINK_EVENT_USAGE: &str = "unlink-event: Unlinks one or more contacts from their \
linked event.\n\
Parameters: INDEX [MORE_INDEXES]...\n\
Example: unlink-event 1 2 3";
pub const FIND_BY_EVENT_USAGE: &str = "find-by-event: Finds all contacts linked to the event \
with the given alias (case-insensitive).\n\
Parameters: ea/ALIAS\n\
Example: find-by-event ea/TSC2025";

pub const MESSAGE_NOTHING_TO_UNLINK: &str = "No event linked to the selected contact(s)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEventCommand {
    indices: Vec<Index>,
    alias: EventAlias,
}

impl LinkEventCommand {
    pub fn new(indices: Vec<Index>, alias: EventAlias) -> Self {
        Self { indices, alias }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let targets = shown_contacts_at(model, &self.indices)?;
        let event = model
            .organizer()
            .find_event(&self.alias)
            .cloned()
            .ok_or_else(|| CommandError::EventNotFound(self.alias.clone()))?;

        model.apply(|organizer| -> Result<(), CommandError> {
            for target in &targets {
                let linked = target.with_event(Some(event.alias().clone()));
                organizer.contacts_mut().set(target, linked)?;
            }
            Ok(())
        })?;

        let names: Vec<&str> = targets.iter().map(|target| target.name().as_str()).collect();
        Ok(CommandResult::changed(
            format!(
                "Linked {} to event: {} ({})",
                names.join(", "),
                event.name(),
                event.alias()
            ),
            DisplayTag::Contacts,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlinkEventCommand {
    indices: Vec<Index>,
}

impl UnlinkEventCommand {
    pub fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    /// Contacts without a link are skipped; a batch with nothing linked
    /// still succeeds.
    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let targets = shown_contacts_at(model, &self.indices)?;
        let linked: Vec<_> = targets
            .into_iter()
            .filter(|target| target.event().is_some())
            .collect();
        if linked.is_empty() {
            return Ok(CommandResult::viewed(
                MESSAGE_NOTHING_TO_UNLINK,
                DisplayTag::Contacts,
            ));
        }

        model.apply(|organizer| -> Result<(), CommandError> {
            for target in &linked {
                organizer
                    .contacts_mut()
                    .set(target, target.with_event(None))?;
            }
            Ok(())
        })?;

        Ok(CommandResult::changed(
            format!("Unlinked {} contact(s) from their events", linked.len()),
            DisplayTag::Contacts,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindByEventCommand {
    alias: EventAlias,
}

impl FindByEventCommand {
    pub fn new(alias: EventAlias) -> Self {
        Self { alias }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.update_contact_filter(ContactFilter::LinkedTo(self.alias.clone()));
        Ok(CommandResult::viewed(
            format!("{} contacts listed!", model.shown_contact_count()),
            DisplayTag::Contacts,
        ))
    }
}
