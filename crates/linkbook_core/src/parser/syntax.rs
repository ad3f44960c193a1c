//! Prefix markers recognized by the command parsers.

use std::fmt::{Display, Formatter};

/// Slash-terminated field marker such as `n/` or `ea/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_EVENT_NAME: Prefix = Prefix::new("en/");
pub const PREFIX_EVENT_ALIAS: Prefix = Prefix::new("ea/");
pub const PREFIX_START: Prefix = Prefix::new("st/");
pub const PREFIX_END: Prefix = Prefix::new("et/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("d/");
pub const PREFIX_TODO_NAME: Prefix = Prefix::new("tn/");
pub const PREFIX_TODO_DESCRIPTION: Prefix = Prefix::new("td/");
