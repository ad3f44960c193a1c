//! Executable commands.
//!
//! # Responsibility
//! - Hold validated parameters for one command word each.
//! - Apply the command to a [`Model`] and describe the outcome.
//! - Keep cross-collection links consistent (cascade unlink/rename), since
//!   the model itself does not.
//!
//! # Invariants
//! - `execute` either commits its whole mutation or fails with the model
//!   unchanged.
//! - Index arguments address the currently shown (filtered) list.

pub mod contact;
pub mod event;
pub mod general;
pub mod link;
pub mod result;
pub mod todo;

pub use result::{CommandResult, DisplayTag};

use crate::index::Index;
use crate::model::event::EventWindowError;
use crate::model::fields::{EventAlias, Name};
use crate::model::organizer::Model;
use crate::model::unique_list::ModelError;
use crate::parser::MESSAGE_DUPLICATE_INDEX;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_INVALID_CONTACT_INDEX: &str = "The contact index provided is invalid";
pub const MESSAGE_INVALID_TODO_INDEX: &str = "The todo index provided is invalid";

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// Execution failure. The model is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    DuplicateContact,
    DuplicateEvent(EventAlias),
    DuplicateTodo,
    InvalidContactIndex,
    InvalidTodoIndex,
    DuplicateIndex,
    EventNotFound(EventAlias),
    ContactNotFound(Name),
    InvalidEventWindow(EventWindowError),
    /// Collection rejected a change the command did not anticipate.
    Model(ModelError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateContact => f.write_str("This contact already exists in the organizer"),
            Self::DuplicateEvent(alias) => {
                write!(f, "An event with alias {alias} already exists in the organizer")
            }
            Self::DuplicateTodo => f.write_str("This todo already exists in the organizer"),
            Self::InvalidContactIndex => f.write_str(MESSAGE_INVALID_CONTACT_INDEX),
            Self::InvalidTodoIndex => f.write_str(MESSAGE_INVALID_TODO_INDEX),
            Self::DuplicateIndex => f.write_str(MESSAGE_DUPLICATE_INDEX),
            Self::EventNotFound(alias) => write!(f, "No event found with alias: {alias}"),
            Self::ContactNotFound(name) => write!(f, "Contact not found: {name}"),
            Self::InvalidEventWindow(err) => write!(f, "{err}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEventWindow(err) => Some(err),
            Self::Model(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModelError> for CommandError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<EventWindowError> for CommandError {
    fn from(value: EventWindowError) -> Self {
        Self::InvalidEventWindow(value)
    }
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddEvent(event::AddEventCommand),
    EditEvent(event::EditEventCommand),
    DeleteEvent(event::DeleteEventCommand),
    FindEvent(event::FindEventCommand),
    ListEvents,
    LinkEvent(link::LinkEventCommand),
    UnlinkEvent(link::UnlinkEventCommand),
    FindByEvent(link::FindByEventCommand),
    AddTodo(todo::AddTodoCommand),
    EditTodo(todo::EditTodoCommand),
    DeleteTodo(todo::DeleteTodoCommand),
    MarkTodo(todo::MarkTodoCommand),
    FindTodo(todo::FindTodoCommand),
    ListTodos,
    AddContact(contact::AddContactCommand),
    EditContact(contact::EditContactCommand),
    DeleteContact(contact::DeleteContactCommand),
    FindContact(contact::FindContactCommand),
    ListContacts,
    Help,
    Exit,
}

impl Command {
    /// Command word as typed by the user. Safe to log.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddEvent(_) => event::ADD_EVENT_WORD,
            Self::EditEvent(_) => event::EDIT_EVENT_WORD,
            Self::DeleteEvent(_) => event::DELETE_EVENT_WORD,
            Self::FindEvent(_) => event::FIND_EVENT_WORD,
            Self::ListEvents => event::LIST_EVENTS_WORD,
            Self::LinkEvent(_) => link::LINK_EVENT_WORD,
            Self::UnlinkEvent(_) => link::UNLINK_EVENT_WORD,
            Self::FindByEvent(_) => link::FIND_BY_EVENT_WORD,
            Self::AddTodo(_) => todo::ADD_TODO_WORD,
            Self::EditTodo(_) => todo::EDIT_TODO_WORD,
            Self::DeleteTodo(_) => todo::DELETE_TODO_WORD,
            Self::MarkTodo(command) => command.word(),
            Self::FindTodo(_) => todo::FIND_TODO_WORD,
            Self::ListTodos => todo::LIST_TODOS_WORD,
            Self::AddContact(_) => contact::ADD_CONTACT_WORD,
            Self::EditContact(_) => contact::EDIT_CONTACT_WORD,
            Self::DeleteContact(_) => contact::DELETE_CONTACT_WORD,
            Self::FindContact(_) => contact::FIND_CONTACT_WORD,
            Self::ListContacts => contact::LIST_CONTACTS_WORD,
            Self::Help => general::HELP_WORD,
            Self::Exit => general::EXIT_WORD,
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        match self {
            Self::AddEvent(command) => command.execute(model),
            Self::EditEvent(command) => command.execute(model),
            Self::DeleteEvent(command) => command.execute(model),
            Self::FindEvent(command) => command.execute(model),
            Self::ListEvents => event::list_events(model),
            Self::LinkEvent(command) => command.execute(model),
            Self::UnlinkEvent(command) => command.execute(model),
            Self::FindByEvent(command) => command.execute(model),
            Self::AddTodo(command) => command.execute(model),
            Self::EditTodo(command) => command.execute(model),
            Self::DeleteTodo(command) => command.execute(model),
            Self::MarkTodo(command) => command.execute(model),
            Self::FindTodo(command) => command.execute(model),
            Self::ListTodos => todo::list_todos(model),
            Self::AddContact(command) => command.execute(model),
            Self::EditContact(command) => command.execute(model),
            Self::DeleteContact(command) => command.execute(model),
            Self::FindContact(command) => command.execute(model),
            Self::ListContacts => contact::list_contacts(model),
            Self::Help => Ok(general::help()),
            Self::Exit => Ok(general::exit()),
        }
    }
}

/// Rejects index batches that name one position twice.
fn ensure_distinct(indices: &[Index]) -> Result<(), CommandError> {
    let mut seen = BTreeSet::new();
    if indices.iter().all(|index| seen.insert(*index)) {
        Ok(())
    } else {
        Err(CommandError::DuplicateIndex)
    }
}

/// Joins entity displays one per line.
fn list_lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
