use linkbook_core::command::event::ADD_EVENT_USAGE;
use linkbook_core::command::todo::DELETE_TODO_USAGE;
use linkbook_core::model::fields::{DATE_TIME_CONSTRAINTS, PHONE_CONSTRAINTS};
use linkbook_core::parser::syntax::{PREFIX_NAME, PREFIX_TODO_DESCRIPTION, PREFIX_TODO_NAME};
use linkbook_core::parser::tokenizer::tokenize;
use linkbook_core::{parse_command, Command, ParseError};

#[test]
fn prefixes_inside_words_are_not_split_points() {
    let map = tokenize(
        " n/Alex tn/Call  td/Ring back n/Bob",
        &[PREFIX_NAME, PREFIX_TODO_NAME, PREFIX_TODO_DESCRIPTION],
    )
    .unwrap();

    assert_eq!(map.preamble(), "");
    assert_eq!(map.all_values(PREFIX_NAME), ["Alex", "Bob"]);
    assert_eq!(map.value(PREFIX_NAME), Some("Bob"));
    assert_eq!(map.value(PREFIX_TODO_NAME), Some("Call"));
    assert_eq!(map.value(PREFIX_TODO_DESCRIPTION), Some("Ring back"));
}

#[test]
fn tokenizing_twice_gives_the_same_map() {
    let prefixes = [PREFIX_NAME, PREFIX_TODO_NAME, PREFIX_TODO_DESCRIPTION];
    let args = " 3 tn/Call venue td/Confirm  booking n/ n/Alex";

    let first = tokenize(args, &prefixes).unwrap();
    let second = tokenize(args, &prefixes).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.preamble(), "3");
    assert_eq!(first.all_values(PREFIX_NAME), ["", "Alex"]);
    assert_eq!(first.value(PREFIX_TODO_DESCRIPTION), Some("Confirm  booking"));
}

#[test]
fn missing_required_prefix_reports_command_usage() {
    let err = parse_command("add-event en/Concert ea/TSC2025 st/2025-09-19 19:30").unwrap_err();
    assert_eq!(err, ParseError::InvalidFormat { usage: ADD_EVENT_USAGE });
    assert!(err.to_string().starts_with("Invalid command format!"));
}

#[test]
fn slash_in_value_names_the_prefix() {
    let err = parse_command("add-todo tn/Call td/Ring a/b").unwrap_err();
    assert_eq!(
        err,
        ParseError::Tokenize {
            prefix: Some(PREFIX_TODO_DESCRIPTION)
        }
    );
}

#[test]
fn repeated_single_valued_prefix_is_rejected() {
    let err = parse_command(
        "add-event en/A en/B ea/X st/2025-01-01 10:00 et/2025-01-01 11:00 d/Y",
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::DuplicatePrefixes(_)));
    assert!(err.to_string().contains("en/"));
}

#[test]
fn field_validators_run_at_parse_time() {
    let err = parse_command("add-contact n/Alex p/12 e/alex@example.com a/Home").unwrap_err();
    assert_eq!(err.to_string(), PHONE_CONSTRAINTS);

    let err = parse_command(
        "add-event en/Concert ea/TSC st/19-09-2025 19:30 et/2025-09-19 23:30 d/Tour",
    )
    .unwrap_err();
    assert_eq!(err.to_string(), DATE_TIME_CONSTRAINTS);

    let err = parse_command(
        "add-event en/Concert ea/TSC st/2025-9-19 9:30 et/2025-09-19 23:30 d/Tour",
    )
    .unwrap_err();
    assert_eq!(err.to_string(), DATE_TIME_CONSTRAINTS);
}

#[test]
fn trailing_comma_on_date_is_tolerated() {
    let command = parse_command(
        "add-event en/Concert ea/TSC st/2025-09-19 19:30, et/2025-09-19 23:30 d/Tour",
    )
    .unwrap();
    assert!(matches!(command, Command::AddEvent(_)));
}

#[test]
fn reversed_event_window_fails_before_execution() {
    let err = parse_command(
        "add-event en/Concert ea/TSC st/2025-09-19 23:30 et/2025-09-19 19:30 d/Tour",
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::EventWindow(_)));
}

#[test]
fn malformed_index_reports_usage_and_duplicate_index_is_caught() {
    assert_eq!(
        parse_command("delete-todo 0").unwrap_err(),
        ParseError::InvalidFormat {
            usage: DELETE_TODO_USAGE
        }
    );
    assert_eq!(
        parse_command("delete-todo one").unwrap_err(),
        ParseError::InvalidFormat {
            usage: DELETE_TODO_USAGE
        }
    );
    assert_eq!(
        parse_command("mark-todo 3 1 3").unwrap_err(),
        ParseError::DuplicateIndex
    );
}

#[test]
fn edit_without_fields_is_rejected() {
    let err = parse_command("edit-todo 1").unwrap_err();
    assert!(matches!(err, ParseError::NotEdited(_)));
}

#[test]
fn every_command_word_is_recognised() {
    let lines = [
        "add-event en/A ea/A st/2025-01-01 10:00 et/2025-01-01 11:00 d/D",
        "edit-event ea/A en/B",
        "delete-event ea/A",
        "find-event ea/A",
        "list-events",
        "link-event 1 ea/A",
        "unlink-event 1",
        "find-by-event ea/A",
        "add-todo tn/T td/D",
        "edit-todo 1 tn/U",
        "delete-todo 1",
        "mark-todo 1",
        "unmark-todo 1",
        "find-todo T",
        "list-todos",
        "add-contact n/A p/123 e/a@example.com a/Home",
        "edit-contact 1 p/456",
        "delete-contact 1",
        "find-contact A",
        "list-contacts",
        "help",
        "exit",
    ];
    for line in lines {
        let command = parse_command(line).unwrap_or_else(|err| panic!("`{line}`: {err}"));
        assert!(line.starts_with(command.word()), "`{line}` parsed as {}", command.word());
    }
}
