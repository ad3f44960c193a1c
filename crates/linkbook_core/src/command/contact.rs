//! Contact commands: add, edit, delete, find and list.
//!
//! # Invariants
//! - Renaming a contact rewrites the contact link of every todo that named
//!   it; deleting a contact clears those links.

use crate::command::{
    ensure_distinct, list_lines, CommandError, CommandOutcome, CommandResult, DisplayTag,
};
use crate::index::Index;
use crate::model::contact::Contact;
use crate::model::fields::{Address, Email, Name, Phone, Tag};
use crate::model::filter::ContactFilter;
use crate::model::organizer::{Model, Organizer};
use crate::model::todo::Todo;
use crate::model::unique_list::ModelError;
use std::collections::BTreeSet;

pub const ADD_CONTACT_WORD: &str = "add-contact";
pub const EDIT_CONTACT_WORD: &str = "edit-contact";
pub const DELETE_CONTACT_WORD: &str = "delete-contact";
pub const FIND_CONTACT_WORD: &str = "find-contact";
pub const LIST_CONTACTS_WORD: &str = "list-contacts";

pub const ADD_CONTACT_USAGE: &str = "add-contact: Adds a contact to the organizer.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add-contact n/Alex Yeoh p/87438807 e/alexyeoh@example.com \
a/Blk 30 Geylang Street 29, #06-40 t/friends";
pub const EDIT_CONTACT_USAGE: &str = "edit-contact: Edits the contact identified by the index \
number used in the displayed contact list. Existing values will be overwritten by the input \
values; an empty t/ clears all tags.\n\
Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit-contact 1 p/91234567 e/alex@example.com";
pub const DELETE_CONTACT_USAGE: &str = "delete-contact: Deletes the contact(s) identified by \
the index numbers used in the displayed contact list.\n\
Parameters: INDEX [MORE_INDEXES]...\n\
Example: delete-contact 1 3";
pub const FIND_CONTACT_USAGE: &str = "find-contact: Finds all contacts whose names contain any \
of the keywords as a whole word (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-contact alex bernice";
pub const LIST_CONTACTS_USAGE: &str = "list-contacts: Lists all contacts.\nExample: list-contacts";

pub const MESSAGE_CONTACT_NOT_EDITED: &str = "At least one field to edit must be provided.";

/// Resolves display indices against the contact view, rejecting repeats and
/// out-of-range positions before anything is changed.
pub(crate) fn shown_contacts_at(
    model: &Model,
    indices: &[Index],
) -> Result<Vec<Contact>, CommandError> {
    ensure_distinct(indices)?;
    indices
        .iter()
        .map(|index| {
            model
                .shown_contact(index.zero_based())
                .cloned()
                .ok_or(CommandError::InvalidContactIndex)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactCommand {
    contact: Contact,
}

impl AddContactCommand {
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        if model.has_contact(&self.contact) {
            return Err(CommandError::DuplicateContact);
        }
        model.add_contact(self.contact.clone())?;
        Ok(CommandResult::changed(
            format!("New contact added: {}", self.contact),
            DisplayTag::Contacts,
        ))
    }
}

/// Fields overlaid on an existing contact. `tags: Some(empty)` clears tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEdit {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl ContactEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    fn overlay(&self, target: &Contact) -> Contact {
        Contact::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.phone.clone().unwrap_or_else(|| target.phone().clone()),
            self.email.clone().unwrap_or_else(|| target.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| target.address().clone()),
            self.tags.clone().unwrap_or_else(|| target.tags().clone()),
            target.event().cloned(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContactCommand {
    index: Index,
    edit: ContactEdit,
}

impl EditContactCommand {
    pub fn new(index: Index, edit: ContactEdit) -> Self {
        Self { index, edit }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .shown_contact(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidContactIndex)?;
        let edited = self.edit.overlay(&target);

        let committed = edited.clone();
        model.apply(|organizer| -> Result<(), CommandError> {
            organizer
                .contacts_mut()
                .set(&target, committed)
                .map_err(|err| match err {
                    ModelError::Duplicate(_) => CommandError::DuplicateContact,
                    other => CommandError::Model(other),
                })?;
            if edited.name() != target.name() {
                relink_todos(organizer, target.name(), Some(edited.name()))?;
            }
            Ok(())
        })?;
        model.update_contact_filter(ContactFilter::ShowAll);

        Ok(CommandResult::changed(
            format!("Edited contact: {edited}"),
            DisplayTag::Contacts,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContactCommand {
    indices: Vec<Index>,
}

impl DeleteContactCommand {
    pub fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let targets = shown_contacts_at(model, &self.indices)?;

        model.apply(|organizer| -> Result<(), CommandError> {
            for target in &targets {
                organizer.contacts_mut().remove(target)?;
                relink_todos(organizer, target.name(), None)?;
            }
            Ok(())
        })?;

        Ok(CommandResult::changed(
            format!("Deleted contact(s):\n{}", list_lines(&targets)),
            DisplayTag::Contacts,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindContactCommand {
    keywords: Vec<String>,
}

impl FindContactCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.update_contact_filter(ContactFilter::NameKeywords(self.keywords.clone()));
        Ok(CommandResult::viewed(
            format!("{} contacts listed!", model.shown_contact_count()),
            DisplayTag::Contacts,
        ))
    }
}

pub fn list_contacts(model: &mut Model) -> CommandOutcome {
    model.update_contact_filter(ContactFilter::ShowAll);
    Ok(CommandResult::viewed("Listed all contacts", DisplayTag::Contacts))
}

/// Points every todo linked to `from` at `to` (`None` clears the link).
fn relink_todos(
    organizer: &mut Organizer,
    from: &Name,
    to: Option<&Name>,
) -> Result<(), ModelError> {
    let todos: Vec<Todo> = organizer
        .todos()
        .iter()
        .map(|todo| {
            if todo.contact() == Some(from) {
                todo.with_contact(to.cloned())
            } else {
                todo.clone()
            }
        })
        .collect();
    organizer.todos_mut().set_all(todos)
}
