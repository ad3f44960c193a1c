//! Session commands: help and exit.

use crate::command::{contact, event, link, todo, CommandResult, DisplayTag};

pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const HELP_USAGE: &str = "help: Shows the usage of every command.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Saves and leaves the organizer.\nExample: exit";

/// Every usage string, in the order `help` prints them.
pub const ALL_USAGES: &[&str] = &[
    event::ADD_EVENT_USAGE,
    event::EDIT_EVENT_USAGE,
    event::DELETE_EVENT_USAGE,
    event::FIND_EVENT_USAGE,
    event::LIST_EVENTS_USAGE,
    link::LINK_EVENT_USAGE,
    link::UNLINK_EVENT_USAGE,
    link::FIND_BY_EVENT_USAGE,
    todo::ADD_TODO_USAGE,
    todo::EDIT_TODO_USAGE,
    todo::DELETE_TODO_USAGE,
    todo::MARK_TODO_USAGE,
    todo::UNMARK_TODO_USAGE,
    todo::FIND_TODO_USAGE,
    todo::LIST_TODOS_USAGE,
    contact::ADD_CONTACT_USAGE,
    contact::EDIT_CONTACT_USAGE,
    contact::DELETE_CONTACT_USAGE,
    contact::FIND_CONTACT_USAGE,
    contact::LIST_CONTACTS_USAGE,
    HELP_USAGE,
    EXIT_USAGE,
];

pub fn help() -> CommandResult {
    CommandResult::viewed(ALL_USAGES.join("\n\n"), DisplayTag::NoChange)
}

pub fn exit() -> CommandResult {
    CommandResult::exiting("Exiting organizer as requested ...")
}
