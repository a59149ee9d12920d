//! Contact repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the create/get/list/update/delete statements over `contacts`.
//! - Own the boolean <-> 0/1 coercion of the `favorite` column.
//!
//! # Invariants
//! - Every read path decodes `favorite` through `favorite_from_storage`.
//! - Every write path encodes `favorite` through `favorite_to_storage`.
//! - Each operation issues exactly one SQL statement.
//! - A missing row is `Ok(None)` / zero rows affected, never an error.

use crate::db::schema::{table_columns, table_exists, CONTACTS_TABLE, REQUIRED_COLUMNS};
use crate::db::DbError;
use crate::model::contact::{Contact, ContactId, ContactPatch};
use rusqlite::{named_params, params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    first,
    last,
    twitter,
    notes,
    favorite,
    avatar
FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage fault raised by contact persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_)
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. } => None,
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

/// Result of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationOutcome {
    /// Rows matched by the statement's `WHERE` clause.
    pub rows_affected: usize,
}

impl MutationOutcome {
    /// Returns whether the statement matched no row.
    pub fn is_noop(&self) -> bool {
        self.rows_affected == 0
    }
}

/// Repository interface for contact persistence.
pub trait ContactRepository {
    fn create_empty(&self) -> RepoResult<Contact>;
    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    fn list(&self) -> RepoResult<Vec<Contact>>;
    fn update(&self, id: ContactId, patch: &ContactPatch) -> RepoResult<MutationOutcome>;
    fn delete(&self, id: ContactId) -> RepoResult<MutationOutcome>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps `conn` without shape checks.
    ///
    /// Use only for connections that already passed `try_new` or came from
    /// `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps `conn` after checking that it carries a usable `contacts` table.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `contacts` does not exist.
    /// - `MissingRequiredColumn` when any expected column is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, CONTACTS_TABLE)? {
            return Err(RepoError::MissingRequiredTable(CONTACTS_TABLE));
        }

        let columns = table_columns(conn, CONTACTS_TABLE)?;
        for &required in REQUIRED_COLUMNS {
            if !columns.iter().any(|column| column == required) {
                return Err(RepoError::MissingRequiredColumn {
                    table: CONTACTS_TABLE,
                    column: required,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_empty(&self) -> RepoResult<Contact> {
        let mut contact = Contact::placeholder(0);

        contact.id = self.conn.query_row(
            "INSERT INTO contacts (
                first,
                last,
                twitter,
                notes,
                favorite,
                avatar
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id;",
            params![
                contact.first.as_str(),
                contact.last.as_str(),
                contact.twitter.as_str(),
                contact.notes.as_str(),
                favorite_to_storage(contact.favorite),
                contact.avatar.as_str(),
            ],
            |row| row.get(0),
        )?;

        Ok(contact)
    }

    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn update(&self, id: ContactId, patch: &ContactPatch) -> RepoResult<MutationOutcome> {
        let rows_affected = self.conn.execute(
            "UPDATE contacts
             SET
                first = COALESCE(:first, first),
                last = COALESCE(:last, last),
                twitter = COALESCE(:twitter, twitter),
                notes = COALESCE(:notes, notes),
                favorite = COALESCE(:favorite, favorite),
                avatar = COALESCE(:avatar, avatar)
             WHERE id = :id;",
            named_params! {
                ":first": patch.first.as_deref(),
                ":last": patch.last.as_deref(),
                ":twitter": patch.twitter.as_deref(),
                ":notes": patch.notes.as_deref(),
                ":favorite": patch.favorite.map(favorite_to_storage),
                ":avatar": patch.avatar.as_deref(),
                ":id": id,
            },
        )?;

        Ok(MutationOutcome { rows_affected })
    }

    fn delete(&self, id: ContactId) -> RepoResult<MutationOutcome> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id])?;

        Ok(MutationOutcome { rows_affected })
    }
}

/// Encodes the `favorite` flag for storage.
pub fn favorite_to_storage(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

/// Decodes a stored `favorite` value, rejecting anything other than 0/1.
pub fn favorite_from_storage(value: i64) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid favorite value `{other}` in contacts.favorite"
        ))),
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    Ok(Contact {
        id: row.get("id")?,
        first: row.get("first")?,
        last: row.get("last")?,
        twitter: row.get("twitter")?,
        notes: row.get("notes")?,
        favorite: favorite_from_storage(row.get("favorite")?)?,
        avatar: row.get("avatar")?,
    })
}
