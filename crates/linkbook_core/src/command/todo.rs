//! Todo commands: add, edit, delete, mark/unmark, find and list.
//!
//! # Invariants
//! - A supplied contact name must resolve (ignoring case) to a stored
//!   contact; the link keeps the stored casing.
//! - Marking is idempotent.

use crate::command::{
    ensure_distinct, list_lines, CommandError, CommandOutcome, CommandResult, DisplayTag,
};
use crate::index::Index;
use crate::model::fields::{Description, Name, TodoName};
use crate::model::filter::TodoFilter;
use crate::model::organizer::{Model, Organizer};
use crate::model::todo::Todo;
use crate::model::unique_list::ModelError;

pub const ADD_TODO_WORD: &str = "add-todo";
pub const EDIT_TODO_WORD: &str = "edit-todo";
pub const DELETE_TODO_WORD: &str = "delete-todo";
pub const MARK_TODO_WORD: &str = "mark-todo";
pub const UNMARK_TODO_WORD: &str = "unmark-todo";
pub const FIND_TODO_WORD: &str = "find-todo";
pub const LIST_TODOS_WORD: &str = "list-todos";

pub const ADD_TODO_USAGE: &str = "add-todo: Adds a todo to the organizer.\n\
Parameters: tn/TODO_NAME td/DESCRIPTION [n/CONTACT_NAME]\n\
Example: add-todo tn/Call for TSC2025 td/Call Taylor Swift's manager n/Alex Yeoh";
pub const EDIT_TODO_USAGE: &str = "edit-todo: Edits the todo identified by the index number \
used in the displayed todo list. Existing values will be overwritten by the input values; \
an empty n/ removes the contact.\n\
Parameters: INDEX [tn/TODO_NAME] [td/DESCRIPTION] [n/CONTACT_NAME]\n\
Example: edit-todo 1 td/Meet John regarding events plan";
pub const DELETE_TODO_USAGE: &str = "delete-todo: Deletes the todo(s) identified by the index \
numbers used in the displayed todo list.\n\
Parameters: INDEX [MORE_INDEXES]...\n\
Example: delete-todo 1";
pub const MARK_TODO_USAGE: &str = "mark-todo: Marks the todo(s) identified by the index numbers \
used in the displayed todo list as completed.\n\
Parameters: INDEX [MORE_INDEXES]...\n\
Example: mark-todo 1";
pub const UNMARK_TODO_USAGE: &str = "unmark-todo: Marks the todo(s) identified by the index \
numbers used in the displayed todo list as incomplete.\n\
Parameters: INDEX [MORE_INDEXES]...\n\
Example: unmark-todo 1";
pub const FIND_TODO_USAGE: &str = "find-todo: Finds all todos whose names contain any of the \
keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-todo call venue";
pub const LIST_TODOS_USAGE: &str = "list-todos: Lists all todos.\nExample: list-todos";

pub const MESSAGE_TODO_NOT_EDITED: &str = "At least one field to edit must be provided.";

fn resolve_contact(organizer: &Organizer, name: &Name) -> Result<Name, CommandError> {
    organizer
        .find_contact_ignore_case(name.as_str())
        .map(|contact| contact.name().clone())
        .ok_or_else(|| CommandError::ContactNotFound(name.clone()))
}

fn shown_todos_at(model: &Model, indices: &[Index]) -> Result<Vec<Todo>, CommandError> {
    ensure_distinct(indices)?;
    indices
        .iter()
        .map(|index| {
            model
                .shown_todo(index.zero_based())
                .cloned()
                .ok_or(CommandError::InvalidTodoIndex)
        })
        .collect()
}

fn duplicate_as_todo(err: ModelError) -> CommandError {
    match err {
        ModelError::Duplicate(_) => CommandError::DuplicateTodo,
        other => CommandError::Model(other),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoCommand {
    name: TodoName,
    description: Description,
    contact: Option<Name>,
}

impl AddTodoCommand {
    pub fn new(name: TodoName, description: Description, contact: Option<Name>) -> Self {
        Self {
            name,
            description,
            contact,
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let unlinked = Todo::new(self.name.clone(), self.description.clone(), None);
        if model.has_todo(&unlinked) {
            return Err(CommandError::DuplicateTodo);
        }
        let contact = self
            .contact
            .as_ref()
            .map(|name| resolve_contact(model.organizer(), name))
            .transpose()?;

        let todo = unlinked.with_contact(contact);
        model.add_todo(todo.clone()).map_err(duplicate_as_todo)?;
        Ok(CommandResult::changed(
            format!("New todo added: {todo}"),
            DisplayTag::Todos,
        ))
    }
}

/// Requested change to a todo's contact link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactLinkEdit {
    #[default]
    Unchanged,
    /// Explicit empty `n/`.
    Clear,
    Set(Name),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEdit {
    pub name: Option<TodoName>,
    pub description: Option<Description>,
    pub contact: ContactLinkEdit,
}

impl TodoEdit {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.contact != ContactLinkEdit::Unchanged
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTodoCommand {
    index: Index,
    edit: TodoEdit,
}

impl EditTodoCommand {
    pub fn new(index: Index, edit: TodoEdit) -> Self {
        Self { index, edit }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = model
            .shown_todo(self.index.zero_based())
            .cloned()
            .ok_or(CommandError::InvalidTodoIndex)?;
        let contact = match &self.edit.contact {
            ContactLinkEdit::Unchanged => target.contact().cloned(),
            ContactLinkEdit::Clear => None,
            ContactLinkEdit::Set(name) => Some(resolve_contact(model.organizer(), name)?),
        };
        let edited = Todo::with_status(
            self.edit
                .name
                .clone()
                .unwrap_or_else(|| target.name().clone()),
            self.edit
                .description
                .clone()
                .unwrap_or_else(|| target.description().clone()),
            contact,
            target.is_completed(),
        );

        model
            .set_todo(&target, edited.clone())
            .map_err(duplicate_as_todo)?;
        model.update_todo_filter(TodoFilter::ShowAll);

        Ok(CommandResult::changed(
            format!("Edited todo: {edited}"),
            DisplayTag::Todos,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoCommand {
    indices: Vec<Index>,
}

impl DeleteTodoCommand {
    pub fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let targets = shown_todos_at(model, &self.indices)?;
        model.apply(|organizer| -> Result<(), CommandError> {
            for target in &targets {
                organizer.todos_mut().remove(target)?;
            }
            Ok(())
        })?;

        Ok(CommandResult::changed(
            format!("Deleted todo(s):\n{}", list_lines(&targets)),
            DisplayTag::Todos,
        ))
    }
}

/// `mark-todo` and `unmark-todo`: set the completion flag on shown todos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTodoCommand {
    indices: Vec<Index>,
    completed: bool,
}

impl MarkTodoCommand {
    pub fn mark(indices: Vec<Index>) -> Self {
        Self {
            indices,
            completed: true,
        }
    }

    pub fn unmark(indices: Vec<Index>) -> Self {
        Self {
            indices,
            completed: false,
        }
    }

    pub fn word(&self) -> &'static str {
        if self.completed {
            MARK_TODO_WORD
        } else {
            UNMARK_TODO_WORD
        }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        let targets = shown_todos_at(model, &self.indices)?;
        let updated: Vec<Todo> = targets
            .iter()
            .map(|target| target.with_completed(self.completed))
            .collect();
        let changed: Vec<(&Todo, &Todo)> = targets
            .iter()
            .zip(updated.iter())
            .filter(|(target, marked)| target != marked)
            .collect();

        if !changed.is_empty() {
            model.apply(|organizer| -> Result<(), CommandError> {
                for (target, marked) in &changed {
                    organizer.todos_mut().set(target, (*marked).clone())?;
                }
                Ok(())
            })?;
        }

        let label = if self.completed {
            "Marked todo as completed"
        } else {
            "Marked todo as incomplete"
        };
        let message = updated
            .iter()
            .map(|todo| format!("{label}: {todo}"))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(if changed.is_empty() {
            CommandResult::viewed(message, DisplayTag::Todos)
        } else {
            CommandResult::changed(message, DisplayTag::Todos)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTodoCommand {
    keywords: Vec<String>,
}

impl FindTodoCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.update_todo_filter(TodoFilter::NameContains(self.keywords.clone()));
        Ok(CommandResult::viewed(
            format!("{} todos listed!", model.shown_todo_count()),
            DisplayTag::Todos,
        ))
    }
}

pub fn list_todos(model: &mut Model) -> CommandOutcome {
    model.update_todo_filter(TodoFilter::ShowAll);
    Ok(CommandResult::viewed("Listed all todos", DisplayTag::Todos))
}
