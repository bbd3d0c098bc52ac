// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot store for the timetable planner.
//!
//! Each academic period has at most one stored timetable snapshot. Saving
//! a period replaces what was stored for it; loading a period that was
//! never saved yields `None`.
//!
//! ## Backend
//!
//! `SQLite` through Diesel, with migrations embedded at compile time from
//! `migrations/`. In-memory databases are used by tests; file databases
//! run in WAL mode.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use horario::Snapshot;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::SnapshotRow;
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for timetable snapshots.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:memdb_horario_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Retrieves the stored snapshot for `period`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored snapshot is
    /// unreadable.
    pub fn load_snapshot(&mut self, period: &str) -> Result<Option<Snapshot>, PersistenceError> {
        let snapshot: Option<Snapshot> = queries::find_snapshot(&mut self.conn, period)?;
        info!(period, found = snapshot.is_some(), "Loaded snapshot");
        Ok(snapshot)
    }

    /// Stores `snapshot` under its period, replacing any earlier save.
    ///
    /// Returns the RFC 3339 timestamp recorded for the save.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    pub fn save_snapshot(&mut self, snapshot: &Snapshot) -> Result<String, PersistenceError> {
        let row: SnapshotRow = mutations::upsert_snapshot(&mut self.conn, snapshot)?;
        info!(period = %row.period, saved_at = %row.saved_at, "Saved snapshot");
        Ok(row.saved_at)
    }

    /// Lists the periods that have a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_periods(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::list_periods(&mut self.conn)
    }
}
