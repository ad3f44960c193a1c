//! SQLite-backed organizer repository.
//!
//! # Responsibility
//! - Read all stored rows into an [`OrganizerSnapshot`] in list order.
//! - Replace all stored rows with a snapshot in one write transaction.
//!
//! # Invariants
//! - The connection must be migrated to the latest schema version.
//! - `position` columns are rewritten densely from 0 on every save.

use crate::db::migrations::latest_version;
use crate::repo::records::{ContactRecord, EventRecord, OrganizerSnapshot, TodoRecord};
use crate::repo::{OrganizerRepository, RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection, TransactionBehavior};
use std::time::Instant;

pub struct SqliteOrganizerRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteOrganizerRepository<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when the schema version differs.
    /// - [`RepoError::MissingRequiredTable`] / [`RepoError::MissingRequiredColumn`]
    ///   when the schema shape is incomplete.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_organizer_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl OrganizerRepository for SqliteOrganizerRepository<'_> {
    fn load(&self) -> RepoResult<OrganizerSnapshot> {
        let started_at = Instant::now();
        let result = load_snapshot(&*self.conn);
        match &result {
            Ok(snapshot) => info!(
                "event=organizer_load module=repo status=ok contacts={} events={} todos={} duration_ms={}",
                snapshot.contacts.len(),
                snapshot.events.len(),
                snapshot.todos.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=organizer_load module=repo status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }

    fn save(&mut self, snapshot: &OrganizerSnapshot) -> RepoResult<()> {
        let started_at = Instant::now();
        let result = save_snapshot(&mut *self.conn, snapshot);
        match &result {
            Ok(()) => info!(
                "event=organizer_save module=repo status=ok contacts={} events={} todos={} duration_ms={}",
                snapshot.contacts.len(),
                snapshot.events.len(),
                snapshot.todos.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=organizer_save module=repo status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
        result
    }
}

fn load_snapshot(conn: &Connection) -> RepoResult<OrganizerSnapshot> {
    let mut tag_stmt = conn.prepare(
        "SELECT tag
         FROM contact_tags
         WHERE contact_position = ?1
         ORDER BY tag ASC;",
    )?;
    let mut contact_stmt = conn.prepare(
        "SELECT position, name, phone, email, address, event_alias
         FROM contacts
         ORDER BY position ASC;",
    )?;
    let mut rows = contact_stmt.query([])?;
    let mut contacts = Vec::new();
    while let Some(row) = rows.next()? {
        let position: i64 = row.get(0)?;
        let tags = tag_stmt
            .query_map([position], |tag_row| tag_row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        contacts.push(ContactRecord {
            name: row.get(1)?,
            phone: row.get(2)?,
            email: row.get(3)?,
            address: row.get(4)?,
            tags,
            event_alias: row.get(5)?,
        });
    }

    let mut event_stmt = conn.prepare(
        "SELECT name, alias, start_at, end_at, description
         FROM events
         ORDER BY position ASC;",
    )?;
    let events = event_stmt
        .query_map([], |row| {
            Ok(EventRecord {
                name: row.get(0)?,
                alias: row.get(1)?,
                start: row.get(2)?,
                end: row.get(3)?,
                description: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut todo_stmt = conn.prepare(
        "SELECT name, description, contact_name, completed
         FROM todos
         ORDER BY position ASC;",
    )?;
    let todos = todo_stmt
        .query_map([], |row| {
            Ok(TodoRecord {
                name: row.get(0)?,
                description: row.get(1)?,
                contact_name: row.get(2)?,
                completed: row.get::<_, i64>(3)? != 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrganizerSnapshot {
        contacts,
        events,
        todos,
    })
}

fn save_snapshot(conn: &mut Connection, snapshot: &OrganizerSnapshot) -> RepoResult<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    tx.execute_batch(
        "DELETE FROM contact_tags;
         DELETE FROM contacts;
         DELETE FROM events;
         DELETE FROM todos;",
    )?;

    {
        let mut insert_contact = tx.prepare(
            "INSERT INTO contacts (position, name, phone, email, address, event_alias)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        let mut insert_tag = tx.prepare(
            "INSERT OR IGNORE INTO contact_tags (contact_position, tag)
             VALUES (?1, ?2);",
        )?;
        for (position, contact) in snapshot.contacts.iter().enumerate() {
            let position = position as i64;
            insert_contact.execute(params![
                position,
                contact.name,
                contact.phone,
                contact.email,
                contact.address,
                contact.event_alias,
            ])?;
            for tag in &contact.tags {
                insert_tag.execute(params![position, tag])?;
            }
        }

        let mut insert_event = tx.prepare(
            "INSERT INTO events (position, name, alias, start_at, end_at, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
        )?;
        for (position, event) in snapshot.events.iter().enumerate() {
            insert_event.execute(params![
                position as i64,
                event.name,
                event.alias,
                event.start,
                event.end,
                event.description,
            ])?;
        }

        let mut insert_todo = tx.prepare(
            "INSERT INTO todos (position, name, description, contact_name, completed)
             VALUES (?1, ?2, ?3, ?4, ?5);",
        )?;
        for (position, todo) in snapshot.todos.iter().enumerate() {
            insert_todo.execute(params![
                position as i64,
                todo.name,
                todo.description,
                todo.contact_name,
                i64::from(todo.completed),
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

fn ensure_organizer_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let required: [(&'static str, &[&'static str]); 4] = [
        (
            "contacts",
            &["position", "name", "phone", "email", "address", "event_alias"],
        ),
        ("contact_tags", &["contact_position", "tag"]),
        (
            "events",
            &["position", "name", "alias", "start_at", "end_at", "description"],
        ),
        (
            "todos",
            &["position", "name", "description", "contact_name", "completed"],
        ),
    ];

    for (table, columns) in required {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
