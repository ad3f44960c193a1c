//! Todo entity.
//!
//! # Invariants
//! - Identity is `(name, description)`, both compared case-insensitively.
//! - The contact link holds the stored casing of the contact it resolved to.

use crate::model::entity::{Entity, EntityKind};
use crate::model::fields::{Description, Name, TodoName};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    name: TodoName,
    description: Description,
    contact: Option<Name>,
    completed: bool,
}

impl Todo {
    /// Creates an open (not completed) todo.
    pub fn new(name: TodoName, description: Description, contact: Option<Name>) -> Self {
        Self::with_status(name, description, contact, false)
    }

    /// Creates a todo with an explicit completion flag (storage load path).
    pub fn with_status(
        name: TodoName,
        description: Description,
        contact: Option<Name>,
        completed: bool,
    ) -> Self {
        Self {
            name,
            description,
            contact,
            completed,
        }
    }

    pub fn name(&self) -> &TodoName {
        &self.name
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn contact(&self) -> Option<&Name> {
        self.contact.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    pub fn with_contact(&self, contact: Option<Name>) -> Self {
        Self {
            contact,
            ..self.clone()
        }
    }
}

impl Entity for Todo {
    const KIND: EntityKind = EntityKind::Todo;

    fn same_identity(&self, other: &Self) -> bool {
        self.name.as_str().eq_ignore_ascii_case(other.name.as_str())
            && self
                .description
                .as_str()
                .eq_ignore_ascii_case(other.description.as_str())
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = if self.completed { "X" } else { " " };
        write!(f, "[{status}] {}; Description: {}", self.name, self.description)?;
        match &self.contact {
            Some(name) => write!(f, "; Contact: {name}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(name: &str, description: &str) -> Todo {
        Todo::new(
            TodoName::parse(name).unwrap(),
            Description::parse(description).unwrap(),
            None,
        )
    }

    #[test]
    fn identity_ignores_case_and_link_state() {
        let open = todo("Call venue", "Confirm booking");
        let done = todo("call VENUE", "confirm booking").with_completed(true);
        assert!(open.same_identity(&done));
        assert_ne!(open, done);
    }

    #[test]
    fn different_description_is_a_different_todo() {
        assert!(!todo("Call", "Venue").same_identity(&todo("Call", "Caterer")));
    }

    #[test]
    fn with_completed_leaves_original_untouched() {
        let open = todo("Call", "Venue");
        let done = open.with_completed(true);
        assert!(!open.is_completed());
        assert!(done.is_completed());
    }
}
