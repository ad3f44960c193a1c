//! Storage boundary: flat records in, validated organizer out.
//!
//! # Responsibility
//! - Define the repository contract used by the CLI to load and save.
//! - Validate every stored record with the same field rules the parsers
//!   use before it reaches the model.
//!
//! # Invariants
//! - A load either yields a fully valid organizer or a typed error naming
//!   the offending field. Nothing partial reaches the model.
//! - A save replaces all stored rows atomically.

pub mod organizer_repo;
pub mod records;

use crate::db::DbError;
use crate::model::entity::EntityKind;
use crate::model::fields::FieldError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use organizer_repo::SqliteOrganizerRepository;
pub use records::{ContactRecord, EventRecord, OrganizerSnapshot, TodoRecord};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection was not migrated to the schema this build expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// A stored record lacks a required field.
    MissingField {
        kind: EntityKind,
        field: &'static str,
    },
    /// A stored value fails its field validator.
    IllegalValue {
        field: &'static str,
        message: &'static str,
    },
    /// Stored records of one kind share identity.
    Duplicate(EntityKind),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected \
                 {expected_version}; open it through db::open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
            Self::MissingField { kind, field } => {
                write!(f, "{}'s {field} field is missing!", title_case(*kind))
            }
            Self::IllegalValue { message, .. } => f.write_str(message),
            Self::Duplicate(kind) => {
                write!(f, "{kind} list contains duplicate {kind}(s).")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<FieldError> for RepoError {
    fn from(value: FieldError) -> Self {
        Self::IllegalValue {
            field: value.field(),
            message: value.message(),
        }
    }
}

/// Load/save contract for the whole organizer.
pub trait OrganizerRepository {
    fn load(&self) -> RepoResult<OrganizerSnapshot>;
    fn save(&mut self, snapshot: &OrganizerSnapshot) -> RepoResult<()>;
}

fn title_case(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Contact => "Contact",
        EntityKind::Event => "Event",
        EntityKind::Todo => "Todo",
    }
}
