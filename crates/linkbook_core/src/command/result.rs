//! Result descriptor handed to the display layer.

use std::fmt::{Display, Formatter};

/// Which list the display layer should re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTag {
    NoChange,
    Contacts,
    Events,
    Todos,
}

impl DisplayTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoChange => "none",
            Self::Contacts => "contacts",
            Self::Events => "events",
            Self::Todos => "todos",
        }
    }
}

impl Display for DisplayTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub display: DisplayTag,
    /// The session should end after this result is shown.
    pub exit: bool,
    /// Organizer state changed and should be persisted.
    pub data_changed: bool,
}

impl CommandResult {
    /// A committed mutation.
    pub fn changed(message: impl Into<String>, display: DisplayTag) -> Self {
        Self {
            message: message.into(),
            display,
            exit: false,
            data_changed: true,
        }
    }

    /// A view-only outcome (filters, listings, no-op updates).
    pub fn viewed(message: impl Into<String>, display: DisplayTag) -> Self {
        Self {
            message: message.into(),
            display,
            exit: false,
            data_changed: false,
        }
    }

    pub fn exiting(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            display: DisplayTag::NoChange,
            exit: true,
            data_changed: false,
        }
    }
}
