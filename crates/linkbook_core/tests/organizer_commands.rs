use linkbook_core::command::link::MESSAGE_NOTHING_TO_UNLINK;
use linkbook_core::{CommandError, DisplayTag, Logic, LogicError, ParseError};

const ADD_ALEX: &str =
    "add-contact n/Alex Yeoh p/87438807 e/alexyeoh@example.com a/Blk 30 Geylang Street 29 t/friends";
const ADD_BERNICE: &str =
    "add-contact n/Bernice Yu p/99272758 e/berniceyu@example.com a/Blk 30 Lorong 3 Serangoon Gardens";
const ADD_CONCERT: &str =
    "add-event en/Concert ea/TSC2025 st/2025-09-19 19:30 et/2025-09-19 23:30 d/Tour";

fn run(logic: &mut Logic, line: &str) {
    if let Err(err) = logic.execute(line) {
        panic!("`{line}` failed: {err}");
    }
}

fn seeded() -> Logic {
    let mut logic = Logic::default();
    run(&mut logic, ADD_ALEX);
    run(&mut logic, ADD_BERNICE);
    run(&mut logic, ADD_CONCERT);
    logic
}

#[test]
fn event_alias_collision_is_case_insensitive() {
    let mut logic = seeded();

    let err = logic
        .execute("add-event en/Other ea/tsc2025 st/2025-01-01 10:00 et/2025-01-01 11:00 d/X")
        .unwrap_err();

    assert!(matches!(err, LogicError::Command(CommandError::DuplicateEvent(_))));
    assert_eq!(logic.model().organizer().events().len(), 1);
    assert_eq!(
        logic.model().organizer().events().as_slice()[0].name().as_str(),
        "Concert"
    );
}

#[test]
fn deleting_event_unlinks_contacts_and_unlink_stays_successful() {
    let mut logic = seeded();
    run(&mut logic, "link-event 1 ea/TSC2025");
    assert!(logic.model().organizer().contacts().as_slice()[0]
        .event()
        .is_some());

    let deleted = logic.execute("delete-event ea/tsc2025").unwrap();
    assert!(deleted.data_changed);
    assert!(deleted.message.contains("Unlinked 1 contact(s)"));
    assert!(logic.model().organizer().contacts().as_slice()[0]
        .event()
        .is_none());

    let unlinked = logic.execute("unlink-event 1").unwrap();
    assert_eq!(unlinked.message, MESSAGE_NOTHING_TO_UNLINK);
    assert!(!unlinked.data_changed);
}

#[test]
fn todo_with_unknown_contact_is_rejected_without_side_effects() {
    let mut logic = seeded();

    let err = logic
        .execute("add-todo tn/Call td/Followup n/Ghost")
        .unwrap_err();

    assert_eq!(err.to_string(), "Contact not found: Ghost");
    assert_eq!(logic.model().organizer().todos().len(), 0);
}

#[test]
fn todo_contact_is_resolved_case_insensitively_to_stored_name() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup n/alex yeoh");

    let todo = &logic.model().organizer().todos().as_slice()[0];
    assert_eq!(todo.contact().map(|name| name.as_str()), Some("Alex Yeoh"));
}

#[test]
fn marking_twice_succeeds_and_keeps_completion() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup");

    let first = logic.execute("mark-todo 1").unwrap();
    assert!(first.data_changed);
    let second = logic.execute("mark-todo 1").unwrap();
    assert!(!second.data_changed);
    assert_eq!(second.display, DisplayTag::Todos);
    assert!(logic.model().organizer().todos().as_slice()[0].is_completed());

    run(&mut logic, "unmark-todo 1");
    assert!(!logic.model().organizer().todos().as_slice()[0].is_completed());
}

#[test]
fn batch_with_one_bad_index_changes_nothing() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup");
    run(&mut logic, "add-todo tn/Book td/Tickets");

    let err = logic.execute("delete-todo 1 5").unwrap_err();
    assert!(matches!(err, LogicError::Command(CommandError::InvalidTodoIndex)));
    assert_eq!(logic.model().organizer().todos().len(), 2);

    let err = logic.execute("delete-todo 2 2").unwrap_err();
    assert_eq!(err, LogicError::Parse(ParseError::DuplicateIndex));
    assert_eq!(logic.model().organizer().todos().len(), 2);
}

#[test]
fn renaming_contact_relinks_todos_and_deleting_clears_them() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup n/Alex Yeoh");

    run(&mut logic, "edit-contact 1 n/Alexandra Yeoh");
    let todo = &logic.model().organizer().todos().as_slice()[0];
    assert_eq!(todo.contact().map(|name| name.as_str()), Some("Alexandra Yeoh"));

    run(&mut logic, "delete-contact 1");
    let todo = &logic.model().organizer().todos().as_slice()[0];
    assert_eq!(todo.contact(), None);
    assert_eq!(logic.model().organizer().contacts().len(), 1);
}

#[test]
fn indices_address_the_filtered_view() {
    let mut logic = seeded();

    let found = logic.execute("find-contact bernice").unwrap();
    assert_eq!(found.message, "1 contacts listed!");
    assert!(!found.data_changed);

    run(&mut logic, "link-event 1 ea/TSC2025");
    let contacts = logic.model().organizer().contacts().as_slice();
    assert!(contacts[0].event().is_none());
    assert_eq!(
        contacts[1].event().map(|alias| alias.as_str()),
        Some("TSC2025")
    );

    run(&mut logic, "list-contacts");
    run(&mut logic, "link-event 1 ea/tsc2025");
    let found = logic.execute("find-by-event ea/tsc2025").unwrap();
    assert_eq!(found.message, "2 contacts listed!");
    assert_eq!(logic.shown_contacts().len(), 2);
}

#[test]
fn editing_event_into_reversed_window_is_rejected() {
    let mut logic = seeded();

    let err = logic
        .execute("edit-event ea/TSC2025 st/2025-09-20 10:00")
        .unwrap_err();

    assert!(matches!(
        err,
        LogicError::Command(CommandError::InvalidEventWindow(_))
    ));
    let event = &logic.model().organizer().events().as_slice()[0];
    assert_eq!(event.start().to_string(), "2025-09-19 19:30:00");
}

#[test]
fn find_commands_filter_by_their_own_rules() {
    let mut logic = seeded();
    run(
        &mut logic,
        "add-event en/Meetup ea/MEET st/2025-10-01 18:00 et/2025-10-01 20:00 d/Drinks",
    );
    run(&mut logic, "add-todo tn/Buy tickets td/Early bird");
    run(&mut logic, "add-todo tn/Call venue td/Confirm");

    let events = logic.execute("find-event ea/tsc").unwrap();
    assert_eq!(events.display, DisplayTag::Events);
    assert_eq!(logic.shown_events().len(), 1);
    assert_eq!(logic.shown_events()[0].alias().as_str(), "TSC2025");

    let events = logic.execute("find-event ea/2025").unwrap();
    assert_eq!(events.message, "0 events listed!");
    assert!(logic.shown_events().is_empty());

    let todos = logic.execute("find-todo TICK").unwrap();
    assert_eq!(todos.display, DisplayTag::Todos);
    assert_eq!(logic.shown_todos().len(), 1);

    run(&mut logic, "list-events");
    assert_eq!(logic.shown_events().len(), 2);
}

#[test]
fn help_and_exit_do_not_change_data() {
    let mut logic = Logic::default();

    let help = logic.execute("help").unwrap();
    assert_eq!(help.display, DisplayTag::NoChange);
    assert!(help.message.contains("add-event"));
    assert!(!help.exit);

    let exit = logic.execute("exit").unwrap();
    assert!(exit.exit);
    assert!(!exit.data_changed);
}

#[test]
fn edit_into_another_identity_is_rejected_but_own_case_change_is_not() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup");
    run(&mut logic, "add-todo tn/Book td/Tickets");

    let err = logic.execute("edit-todo 2 tn/CALL td/followup").unwrap_err();
    assert!(matches!(err, LogicError::Command(CommandError::DuplicateTodo)));
    assert_eq!(logic.model().organizer().todos().as_slice()[1].name().as_str(), "Book");

    let err = logic.execute("edit-contact 2 n/Alex Yeoh").unwrap_err();
    assert!(matches!(err, LogicError::Command(CommandError::DuplicateContact)));
    assert_eq!(
        logic.model().organizer().contacts().as_slice()[1].name().as_str(),
        "Bernice Yu"
    );

    run(&mut logic, "edit-todo 1 tn/CALL");
    assert_eq!(logic.model().organizer().todos().as_slice()[0].name().as_str(), "CALL");
    run(&mut logic, "edit-contact 1 n/ALEX YEOH");
    assert_eq!(
        logic.model().organizer().contacts().as_slice()[0].name().as_str(),
        "ALEX YEOH"
    );
}

#[test]
fn editing_todo_contact_link_resolves_or_clears() {
    let mut logic = seeded();
    run(&mut logic, "add-todo tn/Call td/Followup n/Bernice Yu");

    let err = logic.execute("edit-todo 1 n/Ghost").unwrap_err();
    assert!(matches!(
        err,
        LogicError::Command(CommandError::ContactNotFound(_))
    ));
    let todo = &logic.model().organizer().todos().as_slice()[0];
    assert_eq!(todo.contact().map(|name| name.as_str()), Some("Bernice Yu"));

    run(&mut logic, "edit-todo 1 n/");
    let todo = &logic.model().organizer().todos().as_slice()[0];
    assert_eq!(todo.contact(), None);
    assert_eq!(todo.name().as_str(), "Call");
}

#[test]
fn linking_to_unknown_alias_relinks_nobody() {
    let mut logic = seeded();
    run(&mut logic, "link-event 1 ea/TSC2025");

    let err = logic.execute("link-event 1 2 ea/NOPE").unwrap_err();

    assert!(matches!(err, LogicError::Command(CommandError::EventNotFound(_))));
    let contacts = logic.model().organizer().contacts().as_slice();
    assert_eq!(
        contacts[0].event().map(|alias| alias.as_str()),
        Some("TSC2025")
    );
    assert!(contacts[1].event().is_none());
}
