//! Parsers for todo commands.

use crate::command::todo::{
    AddTodoCommand, ContactLinkEdit, DeleteTodoCommand, EditTodoCommand, FindTodoCommand,
    MarkTodoCommand, TodoEdit, ADD_TODO_USAGE, DELETE_TODO_USAGE, EDIT_TODO_USAGE,
    FIND_TODO_USAGE, MARK_TODO_USAGE, MESSAGE_TODO_NOT_EDITED, UNMARK_TODO_USAGE,
};
use crate::model::fields::{Description, Name, TodoName};
use crate::parser::syntax::{Prefix, PREFIX_NAME, PREFIX_TODO_DESCRIPTION, PREFIX_TODO_NAME};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{
    parse_index, parse_indices, parse_keywords, tokenize_required, with_usage,
};
use crate::parser::{ParseError, ParseResult};

const TODO_PREFIXES: [Prefix; 3] = [PREFIX_TODO_NAME, PREFIX_TODO_DESCRIPTION, PREFIX_NAME];

/// `add-todo tn/NAME td/DESC [n/CONTACT]`
pub fn parse_add_todo(args: &str) -> ParseResult<AddTodoCommand> {
    let map = tokenize_required(
        args,
        &TODO_PREFIXES,
        &[PREFIX_TODO_NAME, PREFIX_TODO_DESCRIPTION],
        ADD_TODO_USAGE,
    )?;
    map.verify_no_duplicate_prefixes_for(&TODO_PREFIXES)?;

    let name = TodoName::parse(map.value(PREFIX_TODO_NAME).unwrap_or_default())?;
    let description = Description::parse(map.value(PREFIX_TODO_DESCRIPTION).unwrap_or_default())?;
    let contact = map.value(PREFIX_NAME).map(Name::parse).transpose()?;
    Ok(AddTodoCommand::new(name, description, contact))
}

/// `edit-todo INDEX [tn/NAME] [td/DESC] [n/CONTACT]`
///
/// An empty `n/` is a request to remove the contact, not an absent field.
pub fn parse_edit_todo(args: &str) -> ParseResult<EditTodoCommand> {
    let map = tokenize(args, &TODO_PREFIXES)?;
    let index = with_usage(parse_index(map.preamble()), EDIT_TODO_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&TODO_PREFIXES)?;

    let contact = match map.value(PREFIX_NAME) {
        None => ContactLinkEdit::Unchanged,
        Some(raw) if raw.trim().is_empty() => ContactLinkEdit::Clear,
        Some(raw) => ContactLinkEdit::Set(Name::parse(raw)?),
    };
    let edit = TodoEdit {
        name: map.value(PREFIX_TODO_NAME).map(TodoName::parse).transpose()?,
        description: map
            .value(PREFIX_TODO_DESCRIPTION)
            .map(Description::parse)
            .transpose()?,
        contact,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NotEdited(MESSAGE_TODO_NOT_EDITED));
    }
    Ok(EditTodoCommand::new(index, edit))
}

/// `delete-todo INDEX [MORE]...`
pub fn parse_delete_todo(args: &str) -> ParseResult<DeleteTodoCommand> {
    let map = tokenize(args, &[])?;
    let indices = with_usage(parse_indices(map.preamble()), DELETE_TODO_USAGE)?;
    Ok(DeleteTodoCommand::new(indices))
}

/// `mark-todo INDEX [MORE]...` when `completed`, else `unmark-todo`.
pub fn parse_mark_todo(args: &str, completed: bool) -> ParseResult<MarkTodoCommand> {
    let usage = if completed {
        MARK_TODO_USAGE
    } else {
        UNMARK_TODO_USAGE
    };
    let map = tokenize(args, &[])?;
    let indices = with_usage(parse_indices(map.preamble()), usage)?;
    Ok(if completed {
        MarkTodoCommand::mark(indices)
    } else {
        MarkTodoCommand::unmark(indices)
    })
}

/// `find-todo KEYWORD [MORE]...`
pub fn parse_find_todo(args: &str) -> ParseResult<FindTodoCommand> {
    let map = tokenize(args, &[])?;
    let keywords = parse_keywords(map.preamble(), FIND_TODO_USAGE)?;
    Ok(FindTodoCommand::new(keywords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;

    #[test]
    fn add_todo_contact_is_optional_but_validated() {
        assert!(parse_add_todo(" tn/Call td/Followup").is_ok());
        assert!(parse_add_todo(" tn/Call td/Followup n/Ghost").is_ok());
        assert!(parse_add_todo(" tn/Call td/Followup n/").is_err());
        assert_eq!(
            parse_add_todo(" tn/Call"),
            Err(ParseError::InvalidFormat { usage: ADD_TODO_USAGE })
        );
    }

    #[test]
    fn edit_todo_distinguishes_empty_contact_from_absent() {
        let clear = parse_edit_todo(" 1 n/").unwrap();
        let expected = EditTodoCommand::new(
            Index::from_one_based(1).unwrap(),
            TodoEdit {
                contact: ContactLinkEdit::Clear,
                ..TodoEdit::default()
            },
        );
        assert_eq!(clear, expected);

        assert_eq!(
            parse_edit_todo(" 1"),
            Err(ParseError::NotEdited(MESSAGE_TODO_NOT_EDITED))
        );
    }

    #[test]
    fn edit_todo_rejects_bad_index_with_usage() {
        assert_eq!(
            parse_edit_todo(" x tn/Call"),
            Err(ParseError::InvalidFormat { usage: EDIT_TODO_USAGE })
        );
        assert_eq!(
            parse_edit_todo(" 1 2 tn/Call"),
            Err(ParseError::InvalidFormat { usage: EDIT_TODO_USAGE })
        );
    }

    #[test]
    fn mark_and_unmark_share_index_rules() {
        assert_eq!(
            parse_mark_todo(" 1 3", true),
            Ok(MarkTodoCommand::mark(vec![
                Index::from_one_based(1).unwrap(),
                Index::from_one_based(3).unwrap(),
            ]))
        );
        assert_eq!(parse_mark_todo(" 1 1", false), Err(ParseError::DuplicateIndex));
        assert_eq!(
            parse_mark_todo(" -1", false),
            Err(ParseError::InvalidFormat { usage: UNMARK_TODO_USAGE })
        );
    }
}
