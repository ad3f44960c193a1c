//! Organizer database: one SQLite file holding a full snapshot.
//!
//! # Schema
//! - `contacts`, `events` and `todos` hold one row per entity, keyed by
//!   `position` so load returns lists in saved order.
//! - `contact_tags` keeps a contact's tags and is removed with its contact
//!   (`ON DELETE CASCADE`).
//! - Columns are nullable text; field rules are enforced on load, not by
//!   SQLite, so a bad row reports which field is wrong.
//! - Contact-event and todo-contact links are stored by alias and name,
//!   not by foreign key.
//!
//! # Invariants
//! - `PRAGMA user_version` holds the version of the last applied migration.
//! - A file with a newer `user_version` is refused.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Connection or schema failure.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "organizer database is at schema version {db_version}, \
                 this build supports up to {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
