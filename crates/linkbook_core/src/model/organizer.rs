//! Organizer aggregate and the display-facing model.
//!
//! # Responsibility
//! - Own the three uniqueness-checked collections as one value.
//! - Keep one filtered view per collection in step with every mutation.
//! - Offer an all-or-nothing mutation scope for multi-step commands.
//!
//! # Invariants
//! - Views are refreshed after every committed mutation and never after a
//!   failed one.
//! - Cross-collection links are not checked here. A contact may point at an
//!   alias with no matching event if a caller writes it directly.

use crate::model::contact::Contact;
use crate::model::event::Event;
use crate::model::fields::EventAlias;
use crate::model::filter::{ContactFilter, EventFilter, FilteredView, TodoFilter};
use crate::model::todo::Todo;
use crate::model::unique_list::{ModelResult, UniqueList};

/// Backing state: contacts, events and todos in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organizer {
    contacts: UniqueList<Contact>,
    events: UniqueList<Event>,
    todos: UniqueList<Todo>,
}

impl Organizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &UniqueList<Contact> {
        &self.contacts
    }

    pub fn events(&self) -> &UniqueList<Event> {
        &self.events
    }

    pub fn todos(&self) -> &UniqueList<Todo> {
        &self.todos
    }

    pub fn contacts_mut(&mut self) -> &mut UniqueList<Contact> {
        &mut self.contacts
    }

    pub fn events_mut(&mut self) -> &mut UniqueList<Event> {
        &mut self.events
    }

    pub fn todos_mut(&mut self) -> &mut UniqueList<Todo> {
        &mut self.todos
    }

    /// Looks an event up by alias across the whole list.
    pub fn find_event(&self, alias: &EventAlias) -> Option<&Event> {
        self.events.iter().find(|event| event.alias().matches(alias))
    }

    /// First contact whose name equals `name` ignoring case.
    pub fn find_contact_ignore_case(&self, name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.name().matches_ignore_case(name))
    }
}

/// Organizer plus the filtered views the display layer reads.
#[derive(Debug, Clone, Default)]
pub struct Model {
    organizer: Organizer,
    contact_view: FilteredView<ContactFilter>,
    event_view: FilteredView<EventFilter>,
    todo_view: FilteredView<TodoFilter>,
}

impl Model {
    pub fn new(organizer: Organizer) -> Self {
        let mut model = Self {
            organizer,
            ..Self::default()
        };
        model.refresh_views();
        model
    }

    pub fn organizer(&self) -> &Organizer {
        &self.organizer
    }

    /// Runs `mutation` against a working copy and commits it only when the
    /// closure succeeds.
    pub fn apply<T, E>(
        &mut self,
        mutation: impl FnOnce(&mut Organizer) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut working = self.organizer.clone();
        let value = mutation(&mut working)?;
        self.organizer = working;
        self.refresh_views();
        Ok(value)
    }

    pub fn has_contact(&self, contact: &Contact) -> bool {
        self.organizer.contacts.contains(contact)
    }

    pub fn add_contact(&mut self, contact: Contact) -> ModelResult<()> {
        self.apply(|organizer| organizer.contacts_mut().add(contact))
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.organizer.events.contains(event)
    }

    pub fn add_event(&mut self, event: Event) -> ModelResult<()> {
        self.apply(|organizer| organizer.events_mut().add(event))
    }

    pub fn has_todo(&self, todo: &Todo) -> bool {
        self.organizer.todos.contains(todo)
    }

    pub fn add_todo(&mut self, todo: Todo) -> ModelResult<()> {
        self.apply(|organizer| organizer.todos_mut().add(todo))
    }

    pub fn set_todo(&mut self, target: &Todo, replacement: Todo) -> ModelResult<()> {
        self.apply(|organizer| organizer.todos_mut().set(target, replacement))
    }

    pub fn update_contact_filter(&mut self, filter: ContactFilter) {
        self.contact_view
            .set_filter(filter, self.organizer.contacts.as_slice());
    }

    pub fn update_event_filter(&mut self, filter: EventFilter) {
        self.event_view
            .set_filter(filter, self.organizer.events.as_slice());
    }

    pub fn update_todo_filter(&mut self, filter: TodoFilter) {
        self.todo_view
            .set_filter(filter, self.organizer.todos.as_slice());
    }

    /// Contacts currently shown, in backing order.
    pub fn shown_contacts(&self) -> Vec<&Contact> {
        self.contact_view
            .project(self.organizer.contacts.as_slice())
            .collect()
    }

    pub fn shown_events(&self) -> Vec<&Event> {
        self.event_view
            .project(self.organizer.events.as_slice())
            .collect()
    }

    pub fn shown_todos(&self) -> Vec<&Todo> {
        self.todo_view
            .project(self.organizer.todos.as_slice())
            .collect()
    }

    /// Contact at zero-based display `position` of the current view.
    pub fn shown_contact(&self, position: usize) -> Option<&Contact> {
        self.contact_view
            .get(self.organizer.contacts.as_slice(), position)
    }

    pub fn shown_todo(&self, position: usize) -> Option<&Todo> {
        self.todo_view.get(self.organizer.todos.as_slice(), position)
    }

    pub fn shown_contact_count(&self) -> usize {
        self.contact_view.len()
    }

    pub fn shown_event_count(&self) -> usize {
        self.event_view.len()
    }

    pub fn shown_todo_count(&self) -> usize {
        self.todo_view.len()
    }

    fn refresh_views(&mut self) {
        self.contact_view
            .refresh(self.organizer.contacts.as_slice());
        self.event_view.refresh(self.organizer.events.as_slice());
        self.todo_view.refresh(self.organizer.todos.as_slice());
    }
}
