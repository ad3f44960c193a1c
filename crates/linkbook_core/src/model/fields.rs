//! Validated field value objects.
//!
//! # Responsibility
//! - Turn raw user/storage strings into typed, trimmed field values.
//! - Own the fixed, user-facing constraint messages for every field.
//!
//! # Invariants
//! - A value object can only be obtained through `parse`, so every stored
//!   value satisfies its pattern and length bounds.
//! - Parsing always trims surrounding whitespace first.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input pattern for event start/end timestamps.
pub const DATE_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const NAME_CONSTRAINTS: &str = "Names should only contain letters, numbers, spaces, \
apostrophes ('), hyphens (-), ampersands (&) and commas (,), and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters separated by single special \
characters (+_.-), and the domain should be made up of alphanumeric labels separated by \
periods, ending with a label at least 2 characters long";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";
pub const EVENT_NAME_CONSTRAINTS: &str = "Event names should be 1-100 characters long and may \
only contain letters, numbers, spaces, apostrophes ('), hyphens (-), ampersands (&), and commas \
(,). Extra whitespace is trimmed.";
pub const EVENT_ALIAS_CONSTRAINTS: &str = "Aliases should be 1-20 characters long, alphanumeric, \
may include hyphens (-) or underscores (_), and should not be blank.";
pub const TODO_NAME_CONSTRAINTS: &str = "Todo names should be 1-50 characters long and may only \
contain letters, numbers, spaces, apostrophes ('), hyphens (-), ampersands (&) and commas (,). \
Extra whitespace is trimmed.";
pub const DESCRIPTION_CONSTRAINTS: &str = "Descriptions must not contain '/' .";
pub const DATE_TIME_CONSTRAINTS: &str = "Invalid date format. Expected format: yyyy-MM-dd HH:mm";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9'&,\- ]+$").expect("valid name regex"));
static EVENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9'&,\- ]{1,100}$").expect("valid event name regex"));
static TODO_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9'&,\- ]{1,50}$").expect("valid todo name regex"));
static EVENT_ALIAS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,20}$").expect("valid alias regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([+_.-]?[A-Za-z0-9])*@([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])+$",
    )
    .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));
/// Zero-padded `yyyy-MM-dd HH:mm`; chrono alone accepts short fields.
static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$").expect("valid date-time regex")
});

/// Constraint violation raised by a field validator.
///
/// `field` names the offending field so storage adapters can report it;
/// `message` is the fixed, human-readable constraint text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    field: &'static str,
    message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl Error for FieldError {}

pub type FieldResult<T> = Result<T, FieldError>;

fn checked(
    raw: &str,
    pattern: &Regex,
    field: &'static str,
    message: &'static str,
) -> FieldResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !pattern.is_match(trimmed) {
        return Err(FieldError::new(field, message));
    }
    Ok(trimmed.to_string())
}

macro_rules! string_field {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl $ty {
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_field!(
    /// Contact name. Identity key for contacts (exact, case-sensitive).
    Name
);
string_field!(Phone);
string_field!(Email);
string_field!(Address);
string_field!(Tag);
string_field!(
    /// Display name of an event, 1-100 characters.
    EventName
);
string_field!(
    /// Short event code. Stored with original casing, compared
    /// case-insensitively wherever it acts as a key.
    EventAlias
);
string_field!(
    /// Todo title, 1-50 characters.
    TodoName
);
string_field!(
    /// Free text that must not contain `/`. May be empty.
    Description
);

impl Name {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &NAME_RE, "name", NAME_CONSTRAINTS).map(Self)
    }

    /// Case-insensitive comparison used for cross-entity name lookups.
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Phone {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &PHONE_RE, "phone", PHONE_CONSTRAINTS).map(Self)
    }
}

impl Email {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &EMAIL_RE, "email", EMAIL_CONSTRAINTS).map(Self)
    }
}

impl Address {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldError::new("address", ADDRESS_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Tag {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &TAG_RE, "tag", TAG_CONSTRAINTS).map(Self)
    }
}

impl EventName {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &EVENT_NAME_RE, "name", EVENT_NAME_CONSTRAINTS).map(Self)
    }
}

impl EventAlias {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &EVENT_ALIAS_RE, "alias", EVENT_ALIAS_CONSTRAINTS).map(Self)
    }

    /// Aliases are keys: `TSC2025` and `tsc2025` name the same event.
    pub fn matches(&self, other: &EventAlias) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }

    /// Case-insensitive prefix test used by `find-event`.
    pub fn starts_with_ignore_case(&self, keyword: &str) -> bool {
        let alias = self.0.to_ascii_lowercase();
        alias.starts_with(&keyword.to_ascii_lowercase())
    }
}

impl TodoName {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        checked(raw, &TODO_NAME_RE, "name", TODO_NAME_CONSTRAINTS).map(Self)
    }
}

impl Description {
    pub fn parse(raw: &str) -> FieldResult<Self> {
        let trimmed = raw.trim();
        if trimmed.contains('/') {
            return Err(FieldError::new("description", DESCRIPTION_CONSTRAINTS));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// Parses `yyyy-MM-dd HH:mm`, tolerating one trailing comma.
pub fn parse_date_time(raw: &str) -> FieldResult<NaiveDateTime> {
    let trimmed = raw.trim();
    let candidate = trimmed.strip_suffix(',').unwrap_or(trimmed);
    let invalid = FieldError::new("datetime", DATE_TIME_CONSTRAINTS);
    if !DATE_TIME_RE.is_match(candidate) {
        return Err(invalid);
    }
    NaiveDateTime::parse_from_str(candidate, DATE_TIME_INPUT_FORMAT).map_err(|_| invalid)
}

/// Renders a timestamp back into the input pattern.
pub fn format_date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_INPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_accepts_allowed_punctuation() {
        let name = Name::parse("  O'Brien-Smith & Co, Ltd ").unwrap();
        assert_eq!(name.as_str(), "O'Brien-Smith & Co, Ltd");
    }

    #[test]
    fn name_rejects_blank_slash_and_emoji() {
        assert!(Name::parse("   ").is_err());
        assert!(Name::parse("a/b").is_err());
        assert!(Name::parse("Alex 🎉").is_err());
        assert_eq!(Name::parse("").unwrap_err().message(), NAME_CONSTRAINTS);
    }

    #[test]
    fn todo_and_event_names_enforce_length_bounds() {
        assert!(TodoName::parse(&"a".repeat(50)).is_ok());
        assert!(TodoName::parse(&"a".repeat(51)).is_err());
        assert!(EventName::parse(&"a".repeat(100)).is_ok());
        assert!(EventName::parse(&"a".repeat(101)).is_err());
    }

    #[test]
    fn alias_accepts_underscore_and_hyphen_only() {
        assert!(EventAlias::parse("TSC_2025-b").is_ok());
        assert!(EventAlias::parse("TSC 2025").is_err());
        assert!(EventAlias::parse(&"a".repeat(21)).is_err());
        assert_eq!(
            EventAlias::parse("bad!").unwrap_err().message(),
            EVENT_ALIAS_CONSTRAINTS
        );
    }

    #[test]
    fn alias_matching_ignores_case_but_keeps_stored_case() {
        let alias = EventAlias::parse("TSC2025").unwrap();
        assert_eq!(alias.as_str(), "TSC2025");
        assert!(alias.matches(&EventAlias::parse("tsc2025").unwrap()));
        assert!(alias.starts_with_ignore_case("tsc"));
        assert!(!alias.starts_with_ignore_case("2025"));
    }

    #[test]
    fn date_time_tolerates_trailing_comma_only() {
        let parsed = parse_date_time(" 2025-09-19 19:30, ").unwrap();
        assert_eq!(format_date_time(&parsed), "2025-09-19 19:30");
        assert!(parse_date_time("2025-09-19T19:30").is_err());
        assert!(parse_date_time("19-09-2025 19:30").is_err());
        assert!(parse_date_time("2025-9-1 9:05").is_err());
        assert!(parse_date_time("+2025-09-19 19:30").is_err());
        assert!(parse_date_time("2025-09-19 19:30,,").is_err());
        assert_eq!(
            parse_date_time("tomorrow").unwrap_err().message(),
            DATE_TIME_CONSTRAINTS
        );
    }

    #[test]
    fn description_rejects_slash_and_allows_empty() {
        assert!(Description::parse("see a/b").is_err());
        assert_eq!(Description::parse("  ").unwrap().as_str(), "");
    }

    #[test]
    fn contact_fields_follow_their_patterns() {
        assert!(Phone::parse("91234567").is_ok());
        assert!(Phone::parse("12").is_err());
        assert!(Email::parse("alex.yeoh+work@example-mail.com").is_ok());
        assert!(Email::parse("alex@example.c").is_err());
        assert!(Email::parse("alex..yeoh@example.com").is_err());
        assert!(Address::parse(" Blk 30 Geylang Street 29, #06-40 ").is_ok());
        assert!(Address::parse("  ").is_err());
        assert!(Tag::parse("friends").is_ok());
        assert!(Tag::parse("best friend").is_err());
    }
}
