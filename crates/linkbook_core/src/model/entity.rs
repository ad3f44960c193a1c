//! Identity contract shared by all entity kinds.

use std::fmt::{Display, Formatter};

/// Entity kinds held by the organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Contact,
    Event,
    Todo,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Event => "event",
            Self::Todo => "todo",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value object stored in a uniqueness-checked collection.
///
/// `same_identity` is the minimal duplicate-detection relation; `PartialEq`
/// stays full structural equality.
pub trait Entity: Clone + PartialEq {
    const KIND: EntityKind;

    fn same_identity(&self, other: &Self) -> bool;
}
