//! Command-line parsing: tokenizer, prefix syntax and per-command parsers.
//!
//! # Responsibility
//! - Turn one raw input line into a validated [`Command`].
//! - Report every malformed input as a [`ParseError`] before any command
//!   touches the model.
//!
//! # Invariants
//! - Format errors always carry the usage string of the command involved.
//! - Parsing has no side effects.
//!
//! # See also
//! - [`crate::command`] for what each parsed command does.

pub mod contact;
pub mod event;
pub mod syntax;
pub mod todo;
pub mod tokenizer;
pub mod util;

use crate::command::contact::{
    ADD_CONTACT_WORD, DELETE_CONTACT_WORD, EDIT_CONTACT_WORD, FIND_CONTACT_WORD,
    LIST_CONTACTS_WORD,
};
use crate::command::event::{
    ADD_EVENT_WORD, DELETE_EVENT_WORD, EDIT_EVENT_WORD, FIND_EVENT_WORD, LIST_EVENTS_WORD,
};
use crate::command::general::{EXIT_WORD, HELP_USAGE, HELP_WORD};
use crate::command::link::{FIND_BY_EVENT_WORD, LINK_EVENT_WORD, UNLINK_EVENT_WORD};
use crate::command::todo::{
    ADD_TODO_WORD, DELETE_TODO_WORD, EDIT_TODO_WORD, FIND_TODO_WORD, LIST_TODOS_WORD,
    MARK_TODO_WORD, UNMARK_TODO_WORD,
};
use crate::command::Command;
use crate::model::event::EventWindowError;
use crate::model::fields::FieldError;
use crate::parser::syntax::Prefix;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_DUPLICATE_INDEX: &str = "Duplicate index found! Please try again";

pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons a raw command line is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A value (or the preamble when `prefix` is `None`) contains `/`.
    Tokenize { prefix: Option<Prefix> },
    /// Missing required prefix or unexpected preamble.
    InvalidFormat { usage: &'static str },
    /// Single-valued prefixes supplied more than once.
    DuplicatePrefixes(Vec<Prefix>),
    /// Edit command without any field to change.
    NotEdited(&'static str),
    /// A field value failed its validator.
    Constraint(FieldError),
    /// Event start is not before its end.
    EventWindow(EventWindowError),
    InvalidIndex,
    DuplicateIndex,
    UnknownCommand,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize { prefix: Some(prefix) } => {
                write!(f, "Values for {prefix} cannot contain forward slashes(/)")
            }
            Self::Tokenize { prefix: None } => {
                f.write_str("Preamble cannot contain forward slashes(/)")
            }
            Self::InvalidFormat { usage } => write!(f, "Invalid command format! \n{usage}"),
            Self::DuplicatePrefixes(prefixes) => {
                let joined: Vec<&str> = prefixes.iter().map(|prefix| prefix.as_str()).collect();
                write!(
                    f,
                    "Multiple values specified for the following single-valued field(s): {}",
                    joined.join(" ")
                )
            }
            Self::NotEdited(message) => f.write_str(message),
            Self::Constraint(err) => write!(f, "{err}"),
            Self::EventWindow(err) => write!(f, "{err}"),
            Self::InvalidIndex => f.write_str(MESSAGE_INVALID_INDEX),
            Self::DuplicateIndex => f.write_str(MESSAGE_DUPLICATE_INDEX),
            Self::UnknownCommand => f.write_str(MESSAGE_UNKNOWN_COMMAND),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint(err) => Some(err),
            Self::EventWindow(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldError> for ParseError {
    fn from(value: FieldError) -> Self {
        Self::Constraint(value)
    }
}

impl From<EventWindowError> for ParseError {
    fn from(value: EventWindowError) -> Self {
        Self::EventWindow(value)
    }
}

/// Parses one input line: the first word selects the command, the rest is
/// handed to that command's parser.
pub fn parse_command(line: &str) -> ParseResult<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat { usage: HELP_USAGE });
    }
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    let command = match word {
        ADD_EVENT_WORD => Command::AddEvent(event::parse_add_event(args)?),
        EDIT_EVENT_WORD => Command::EditEvent(event::parse_edit_event(args)?),
        DELETE_EVENT_WORD => Command::DeleteEvent(event::parse_delete_event(args)?),
        FIND_EVENT_WORD => Command::FindEvent(event::parse_find_event(args)?),
        LIST_EVENTS_WORD => Command::ListEvents,
        LINK_EVENT_WORD => Command::LinkEvent(event::parse_link_event(args)?),
        UNLINK_EVENT_WORD => Command::UnlinkEvent(event::parse_unlink_event(args)?),
        FIND_BY_EVENT_WORD => Command::FindByEvent(event::parse_find_by_event(args)?),
        ADD_TODO_WORD => Command::AddTodo(todo::parse_add_todo(args)?),
        EDIT_TODO_WORD => Command::EditTodo(todo::parse_edit_todo(args)?),
        DELETE_TODO_WORD => Command::DeleteTodo(todo::parse_delete_todo(args)?),
        MARK_TODO_WORD => Command::MarkTodo(todo::parse_mark_todo(args, true)?),
        UNMARK_TODO_WORD => Command::MarkTodo(todo::parse_mark_todo(args, false)?),
        FIND_TODO_WORD => Command::FindTodo(todo::parse_find_todo(args)?),
        LIST_TODOS_WORD => Command::ListTodos,
        ADD_CONTACT_WORD => Command::AddContact(contact::parse_add_contact(args)?),
        EDIT_CONTACT_WORD => Command::EditContact(contact::parse_edit_contact(args)?),
        DELETE_CONTACT_WORD => Command::DeleteContact(contact::parse_delete_contact(args)?),
        FIND_CONTACT_WORD => Command::FindContact(contact::parse_find_contact(args)?),
        LIST_CONTACTS_WORD => Command::ListContacts,
        HELP_WORD => Command::Help,
        EXIT_WORD => Command::Exit,
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_reports_help_usage() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat { usage: HELP_USAGE })
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        assert_eq!(parse_command("frobnicate 1"), Err(ParseError::UnknownCommand));
    }

    #[test]
    fn argument_free_words_ignore_trailing_text() {
        assert_eq!(parse_command("list-todos please"), Ok(Command::ListTodos));
        assert_eq!(parse_command("exit"), Ok(Command::Exit));
    }
}
