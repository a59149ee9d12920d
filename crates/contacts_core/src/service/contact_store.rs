//! Contact store: the single entry point for contact data.
//!
//! # Responsibility
//! - Own the SQLite connection from open to close.
//! - Translate external (string) ids into storage ids.
//! - Surface storage faults in the log before returning them.
//!
//! # Invariants
//! - Every operation runs exactly one repository call.
//! - Not-found and no-op mutations are `Ok`, never logged as errors.
//! - Log lines carry ids and counts only, never field contents.

use crate::config::StoreConfig;
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::contact::{parse_contact_id, Contact, ContactPatch};
use crate::repo::contact_repo::{
    ContactRepository, MutationOutcome, RepoError, RepoResult, SqliteContactRepository,
};
use log::{debug, error, info};
use rusqlite::Connection;
use std::time::Instant;

/// Explicitly constructed store instance owning its connection.
pub struct ContactStore {
    conn: Connection,
}

impl ContactStore {
    /// Opens the database at `config.db_path`, creating the file and table
    /// when absent.
    pub fn open(config: &StoreConfig) -> RepoResult<Self> {
        let conn = open_db(config.db_path())?;
        Self::from_connection(conn)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        let conn = open_db_in_memory()?;
        Self::from_connection(conn)
    }

    /// Adopts an already-open connection after checking the table shape.
    pub fn from_connection(conn: Connection) -> RepoResult<Self> {
        SqliteContactRepository::try_new(&conn)?;
        Ok(Self { conn })
    }

    /// Closes the underlying connection.
    pub fn close(self) -> RepoResult<()> {
        self.conn.close().map_err(|(_, err)| {
            error!("event=store_close module=store status=error error={err}");
            RepoError::Db(DbError::Sqlite(err))
        })?;
        info!("event=store_close module=store status=ok");
        Ok(())
    }

    /// Inserts a placeholder contact and returns it with its assigned id.
    pub fn create_empty(&self) -> RepoResult<Contact> {
        let started_at = Instant::now();
        let result = self.repo().create_empty();
        if let Ok(contact) = &result {
            info!(
                "event=contact_create module=store status=ok id={} duration_ms={}",
                contact.id,
                started_at.elapsed().as_millis()
            );
        }
        surface_fault("contact_create", started_at, result)
    }

    /// Loads one contact; unknown or malformed ids yield `Ok(None)`.
    pub fn get(&self, id: &str) -> RepoResult<Option<Contact>> {
        let Some(contact_id) = parse_contact_id(id) else {
            debug!("event=contact_get module=store status=not_found reason=unparseable_id");
            return Ok(None);
        };

        let started_at = Instant::now();
        let result = self.repo().get(contact_id);
        if let Ok(found) = &result {
            debug!(
                "event=contact_get module=store status={} id={contact_id} duration_ms={}",
                if found.is_some() { "ok" } else { "not_found" },
                started_at.elapsed().as_millis()
            );
        }
        surface_fault("contact_get", started_at, result)
    }

    /// Lists every contact in insertion order.
    pub fn list(&self) -> RepoResult<Vec<Contact>> {
        let started_at = Instant::now();
        let result = self.repo().list();
        if let Ok(contacts) = &result {
            debug!(
                "event=contact_list module=store status=ok count={} duration_ms={}",
                contacts.len(),
                started_at.elapsed().as_millis()
            );
        }
        surface_fault("contact_list", started_at, result)
    }

    /// Applies `patch` to the contact with `id`.
    ///
    /// Returns the statement outcome; callers reload with `get` when they
    /// need the merged record.
    pub fn update(&self, id: &str, patch: &ContactPatch) -> RepoResult<MutationOutcome> {
        let Some(contact_id) = parse_contact_id(id) else {
            debug!("event=contact_update module=store status=noop reason=unparseable_id");
            return Ok(MutationOutcome::default());
        };

        let started_at = Instant::now();
        let result = self.repo().update(contact_id, patch);
        if let Ok(outcome) = &result {
            info!(
                "event=contact_update module=store status=ok id={contact_id} rows_affected={} duration_ms={}",
                outcome.rows_affected,
                started_at.elapsed().as_millis()
            );
        }
        surface_fault("contact_update", started_at, result)
    }

    /// Deletes the contact with `id`; missing ids affect zero rows.
    pub fn delete(&self, id: &str) -> RepoResult<MutationOutcome> {
        let Some(contact_id) = parse_contact_id(id) else {
            debug!("event=contact_delete module=store status=noop reason=unparseable_id");
            return Ok(MutationOutcome::default());
        };

        let started_at = Instant::now();
        let result = self.repo().delete(contact_id);
        if let Ok(outcome) = &result {
            info!(
                "event=contact_delete module=store status=ok id={contact_id} rows_affected={} duration_ms={}",
                outcome.rows_affected,
                started_at.elapsed().as_millis()
            );
        }
        surface_fault("contact_delete", started_at, result)
    }

    /// Borrows the underlying connection, e.g. for diagnostics.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn repo(&self) -> SqliteContactRepository<'_> {
        SqliteContactRepository::new(&self.conn)
    }
}

fn surface_fault<T>(event: &str, started_at: Instant, result: RepoResult<T>) -> RepoResult<T> {
    if let Err(err) = &result {
        error!(
            "event={event} module=store status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        );
    }
    result
}
