//! Command-line use-case facade.
//!
//! # Responsibility
//! - Turn one input line into a command and run it against the model.
//! - Emit one metadata-only log record per executed line.
//!
//! # Invariants
//! - A failed parse never touches the model.
//! - A failed command leaves the model exactly as it was.
//! - Raw input is never logged; only the command word is.
//! - The facade is storage-agnostic; callers persist on `data_changed`.

use crate::command::{CommandError, CommandResult};
use crate::model::contact::Contact;
use crate::model::event::Event;
use crate::model::organizer::Model;
use crate::model::todo::Todo;
use crate::parser::{parse_command, ParseError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    Parse(ParseError),
    Command(CommandError),
}

impl Display for LogicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Command(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LogicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Command(err) => Some(err),
        }
    }
}

impl From<ParseError> for LogicError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for LogicError {
    fn from(value: CommandError) -> Self {
        Self::Command(value)
    }
}

/// Owns the model and executes command lines against it.
#[derive(Debug, Default)]
pub struct Logic {
    model: Model,
}

impl Logic {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Parses and executes one line.
    ///
    /// # Errors
    /// - [`LogicError::Parse`] for unknown words and malformed arguments.
    /// - [`LogicError::Command`] when execution is rejected by the model.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                debug!(
                    "event=command_parse module=logic status=error error_kind={}",
                    parse_error_kind(&err)
                );
                return Err(err.into());
            }
        };

        let word = command.word();
        match command.execute(&mut self.model) {
            Ok(result) => {
                info!(
                    "event=command_execute module=logic status=ok command={word} display={} changed={}",
                    result.display, result.data_changed
                );
                Ok(result)
            }
            Err(err) => {
                info!("event=command_execute module=logic status=error command={word}");
                Err(err.into())
            }
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn shown_contacts(&self) -> Vec<&Contact> {
        self.model.shown_contacts()
    }

    pub fn shown_events(&self) -> Vec<&Event> {
        self.model.shown_events()
    }

    pub fn shown_todos(&self) -> Vec<&Todo> {
        self.model.shown_todos()
    }
}

fn parse_error_kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::Tokenize { .. } => "tokenize",
        ParseError::InvalidFormat { .. } => "invalid_format",
        ParseError::DuplicatePrefixes(_) => "duplicate_prefixes",
        ParseError::NotEdited(_) => "not_edited",
        ParseError::Constraint(_) => "constraint",
        ParseError::EventWindow(_) => "event_window",
        ParseError::InvalidIndex => "invalid_index",
        ParseError::DuplicateIndex => "duplicate_index",
        ParseError::UnknownCommand => "unknown_command",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DisplayTag;

    #[test]
    fn parse_failure_leaves_model_untouched() {
        let mut logic = Logic::default();
        let err = logic.execute("add-todo tn/Call").unwrap_err();
        assert!(matches!(err, LogicError::Parse(ParseError::InvalidFormat { .. })));
        assert_eq!(logic.model().organizer().todos().len(), 0);
    }

    #[test]
    fn successful_line_reports_display_tag() {
        let mut logic = Logic::default();
        let result = logic.execute("add-todo tn/Call td/Ring the venue").unwrap();
        assert_eq!(result.display, DisplayTag::Todos);
        assert!(result.data_changed);
        assert_eq!(logic.shown_todos().len(), 1);
    }
}
