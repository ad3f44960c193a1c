//! Parsers for contact commands.

use crate::command::contact::{
    AddContactCommand, ContactEdit, DeleteContactCommand, EditContactCommand, FindContactCommand,
    ADD_CONTACT_USAGE, DELETE_CONTACT_USAGE, EDIT_CONTACT_USAGE, FIND_CONTACT_USAGE,
    MESSAGE_CONTACT_NOT_EDITED,
};
use crate::model::contact::Contact;
use crate::model::fields::{Address, Email, FieldResult, Name, Phone, Tag};
use crate::parser::syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use crate::parser::tokenizer::tokenize;
use crate::parser::util::{
    parse_index, parse_indices, parse_keywords, tokenize_required, with_usage,
};
use crate::parser::{ParseError, ParseResult};
use std::collections::BTreeSet;

const CONTACT_PREFIXES: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
];
const SINGLE_VALUED: [Prefix; 4] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];

fn parse_tags(raw: &[String]) -> FieldResult<BTreeSet<Tag>> {
    raw.iter().map(|tag| Tag::parse(tag)).collect()
}

/// `add-contact n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...`
pub fn parse_add_contact(args: &str) -> ParseResult<AddContactCommand> {
    let map = tokenize_required(args, &CONTACT_PREFIXES, &SINGLE_VALUED, ADD_CONTACT_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;

    let contact = Contact::new(
        Name::parse(map.value(PREFIX_NAME).unwrap_or_default())?,
        Phone::parse(map.value(PREFIX_PHONE).unwrap_or_default())?,
        Email::parse(map.value(PREFIX_EMAIL).unwrap_or_default())?,
        Address::parse(map.value(PREFIX_ADDRESS).unwrap_or_default())?,
        parse_tags(map.all_values(PREFIX_TAG))?,
        None,
    );
    Ok(AddContactCommand::new(contact))
}

/// `edit-contact INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...`
///
/// A lone empty `t/` clears every tag.
pub fn parse_edit_contact(args: &str) -> ParseResult<EditContactCommand> {
    let map = tokenize(args, &CONTACT_PREFIXES)?;
    let index = with_usage(parse_index(map.preamble()), EDIT_CONTACT_USAGE)?;
    map.verify_no_duplicate_prefixes_for(&SINGLE_VALUED)?;

    let tags = match map.all_values(PREFIX_TAG) {
        [] => None,
        [only] if only.is_empty() => Some(BTreeSet::new()),
        raw => Some(parse_tags(raw)?),
    };
    let edit = ContactEdit {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::parse).transpose()?,
        tags,
    };
    if !edit.is_any_field_edited() {
        return Err(ParseError::NotEdited(MESSAGE_CONTACT_NOT_EDITED));
    }
    Ok(EditContactCommand::new(index, edit))
}

/// `delete-contact INDEX [MORE]...`
pub fn parse_delete_contact(args: &str) -> ParseResult<DeleteContactCommand> {
    let map = tokenize(args, &[])?;
    let indices = with_usage(parse_indices(map.preamble()), DELETE_CONTACT_USAGE)?;
    Ok(DeleteContactCommand::new(indices))
}

/// `find-contact KEYWORD [MORE]...`
pub fn parse_find_contact(args: &str) -> ParseResult<FindContactCommand> {
    let map = tokenize(args, &[])?;
    let keywords = parse_keywords(map.preamble(), FIND_CONTACT_USAGE)?;
    Ok(FindContactCommand::new(keywords))
}
