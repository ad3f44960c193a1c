//! Parsers for event commands and contact/event links.

use crate::command::event::{
    AddEventCommand, DeleteEventCommand, EditEventCommand, EventEdit, FindEventCommand,
    ADD_EVENT_USAGE, DELETE_EVENT_USAGE, EDIT_EVENT_USAGE, FIND_EVENT_USAGE,
    MESSAGE_EVENT_NOT_EDITED,
};
use crate::command::link::{
    FindByEventCommand, LinkEventCommand, UnlinkEventCommand, FIND_BY_EVENT_USAGE,
    LINK_EVENT_USAGE, UNLINK_EVENT_USAGE,
};
use crate::model::event::Event;
use crate::model::fields::{parse_date_time, Description, EventAlias, EventName};
use crate::parser::syntax::{
    Prefix, PREFIX_DESCRIPTION, PREFIX_END, PREFIX_EVENT_ALIAS, PREFIX_EVENT_NAME, PREFIX_START,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{parse_indices, parse_keywords, tokenize_required, with_usage};
use crate::parser::{ParseError, ParseResult};

const EVENT_PREFIXES: [Prefix; 5] = [
    PREFIX_EVENT_NAME,
    PREFIX_EVENT_ALIAS,
    PREFIX_START,
    PREFIX_END,
    PREFIX_DESCRIPTION,
];

/// `add-event en/NAME ea/ALIAS st/START et/END d/DESC`
pub fn parse_add_event(args: &str) -> ParseResult<AddEventCommand> {
    let map = tokenize_required(args, &EVENT_PREFIXES, &EVENT_PREFIXES, ADD_EVENT_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&EVENT_PREFIXES)?;

    let name = EventName::parse(map.value(PREFIX_EVENT_NAME).unwrap_or_default())?;
    let alias = EventAlias::parse(map.value(PREFIX_EVENT_ALIAS).unwrap_or_default())?;
    let start = parse_date_time(map.value(PREFIX_START).unwrap_or_default())?;
    let end = parse_date_time(map.value(PREFIX_END).unwrap_or_default())?;
    let description = Description::parse(map.value(PREFIX_DESCRIPTION).unwrap_or_default())?;

    let event = Event::new(name, alias, start, end, description)?;
    Ok(AddEventCommand::new(event))
}

/// `edit-event ea/ALIAS [en/NAME] [st/START] [et/END] [d/DESC]`
pub fn parse_edit_event(args: &str) -> ParseResult<EditEventCommand> {
    let map = tokenize_required(args, &EVENT_PREFIXES, &[PREFIX_EVENT_ALIAS], EDIT_EVENT_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&EVENT_PREFIXES)?;
    let alias = EventAlias::parse(map.value(PREFIX_EVENT_ALIAS).unwrap_or_default())?;

    let edit = EventEdit {
        name: map.value(PREFIX_EVENT_NAME).map(EventName::parse).transpose()?,
        start: map.value(PREFIX_START).map(parse_date_time).transpose()?,
        end: map.value(PREFIX_END).map(parse_date_time).transpose()?,
        description: map
            .value(PREFIX_DESCRIPTION)
            .map(Description::parse)
            .transpose()?,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NotEdited(MESSAGE_EVENT_NOT_EDITED));
    }
    Ok(EditEventCommand::new(alias, edit))
}

/// `delete-event ea/ALIAS`
pub fn parse_delete_event(args: &str) -> ParseResult<DeleteEventCommand> {
    let alias = parse_single_alias(args, DELETE_EVENT_USAGE)?;
    Ok(DeleteEventCommand::new(alias))
}

/// `find-event ea/KEYWORD [MORE]...`
pub fn parse_find_event(args: &str) -> ParseResult<FindEventCommand> {
    let map = tokenize_required(
        args,
        &[PREFIX_EVENT_ALIAS],
        &[PREFIX_EVENT_ALIAS],
        FIND_EVENT_USAGE,
    )?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_EVENT_ALIAS])?;
    let keywords = parse_keywords(
        map.value(PREFIX_EVENT_ALIAS).unwrap_or_default(),
        FIND_EVENT_USAGE,
    )?;
    Ok(FindEventCommand::new(keywords))
}

/// `link-event INDEX [MORE]... ea/ALIAS`
pub fn parse_link_event(args: &str) -> ParseResult<LinkEventCommand> {
    let map = tokenize(args, &[PREFIX_EVENT_ALIAS])?;
    if !map.contains(PREFIX_EVENT_ALIAS) || map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: LINK_EVENT_USAGE,
        });
    }
    map.verify_no_duplicate_prefixes_for(&[PREFIX_EVENT_ALIAS])?;
    let alias = EventAlias::parse(map.value(PREFIX_EVENT_ALIAS).unwrap_or_default())?;
    let indices = with_usage(parse_indices(map.preamble()), LINK_EVENT_USAGE)?;
    Ok(LinkEventCommand::new(indices, alias))
}

/// `unlink-event INDEX [MORE]...`
pub fn parse_unlink_event(args: &str) -> ParseResult<UnlinkEventCommand> {
    let map = tokenize(args, &[])?;
    let indices = with_usage(parse_indices(map.preamble()), UNLINK_EVENT_USAGE)?;
    Ok(UnlinkEventCommand::new(indices))
}

/// `find-by-event ea/ALIAS`
pub fn parse_find_by_event(args: &str) -> ParseResult<FindByEventCommand> {
    let alias = parse_single_alias(args, FIND_BY_EVENT_USAGE)?;
    Ok(FindByEventCommand::new(alias))
}

fn parse_single_alias(args: &str, usage: &'static str) -> ParseResult<EventAlias> {
    let map = tokenize_required(args, &[PREFIX_EVENT_ALIAS], &[PREFIX_EVENT_ALIAS], usage)?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_EVENT_ALIAS])?;
    Ok(EventAlias::parse(
        map.value(PREFIX_EVENT_ALIAS).unwrap_or_default(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::EVENT_WINDOW_CONSTRAINTS;
    use crate::model::fields::DATE_TIME_CONSTRAINTS;

    const VALID: &str =
        " en/Concert ea/TSC2025 st/2025-09-19 19:30 et/2025-09-19 23:30 d/Tour";

    #[test]
    fn add_event_requires_every_prefix_and_no_preamble() {
        assert!(parse_add_event(VALID).is_ok());
        assert_eq!(
            parse_add_event(" en/Concert ea/TSC2025 st/2025-09-19 19:30 et/2025-09-19 23:30"),
            Err(ParseError::InvalidFormat { usage: ADD_EVENT_USAGE })
        );
        let with_preamble = format!(" oops{VALID}");
        assert_eq!(
            parse_add_event(&with_preamble),
            Err(ParseError::InvalidFormat { usage: ADD_EVENT_USAGE })
        );
    }

    #[test]
    fn add_event_checks_window_and_date_format() {
        let reversed = " en/C ea/A st/2025-09-19 23:30 et/2025-09-19 19:30 d/x";
        assert_eq!(
            parse_add_event(reversed).unwrap_err().to_string(),
            EVENT_WINDOW_CONSTRAINTS
        );
        let bad_date = " en/C ea/A st/19-09-2025 et/2025-09-19 19:30 d/x";
        assert_eq!(
            parse_add_event(bad_date).unwrap_err().to_string(),
            DATE_TIME_CONSTRAINTS
        );
    }

    #[test]
    fn repeated_single_valued_prefix_is_named() {
        let repeated = format!("{VALID} ea/OTHER");
        assert_eq!(
            parse_add_event(&repeated),
            Err(ParseError::DuplicatePrefixes(vec![PREFIX_EVENT_ALIAS]))
        );
    }

    #[test]
    fn edit_event_without_fields_is_not_edited() {
        assert_eq!(
            parse_edit_event(" ea/TSC2025"),
            Err(ParseError::NotEdited(MESSAGE_EVENT_NOT_EDITED))
        );
        assert!(parse_edit_event(" ea/TSC2025 d/Moved indoors").is_ok());
    }

    #[test]
    fn link_event_needs_indices_and_alias() {
        assert!(parse_link_event(" 1 3 ea/TSC2025").is_ok());
        assert_eq!(
            parse_link_event(" ea/TSC2025"),
            Err(ParseError::InvalidFormat { usage: LINK_EVENT_USAGE })
        );
        assert_eq!(
            parse_link_event(" 0 ea/TSC2025"),
            Err(ParseError::InvalidFormat { usage: LINK_EVENT_USAGE })
        );
        assert_eq!(parse_link_event(" 2 2 ea/TSC2025"), Err(ParseError::DuplicateIndex));
    }

    #[test]
    fn find_event_splits_keywords() {
        assert_eq!(
            parse_find_event(" ea/tsc  ncs"),
            Ok(FindEventCommand::new(vec!["tsc".to_string(), "ncs".to_string()]))
        );
        assert_eq!(
            parse_find_event(" ea/ "),
            Err(ParseError::InvalidFormat { usage: FIND_EVENT_USAGE })
        );
    }
}
