//! Core domain logic for the linkbook organizer.
//! This crate is the single source of truth for contact, event and todo
//! invariants; the CLI only reads lines and renders results.

pub mod command;
pub mod db;
pub mod index;
pub mod logging;
pub mod logic;
pub mod model;
pub mod parser;
pub mod repo;

pub use command::{Command, CommandError, CommandResult, DisplayTag};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use index::Index;
pub use logging::{default_log_level, init_logging, logging_status};
pub use logic::{Logic, LogicError};
pub use model::organizer::{Model, Organizer};
pub use parser::{parse_command, ParseError, ParseResult};
pub use repo::{
    OrganizerRepository, OrganizerSnapshot, RepoError, RepoResult, SqliteOrganizerRepository,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
