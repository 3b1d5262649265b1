//! Database connection management with pragma configuration.
//!
//! This module handles opening the SQLite database and applying required
//! pragmas for performance and concurrency (WAL mode). Schema creation is
//! deliberately separate: [`MileageDb::open`] refuses a database that was
//! never provisioned, while [`MileageDb::provision`] runs migrations first.

use super::migrations;
use crate::Error;
use std::path::Path;
use tokio_rusqlite::Connection;

/// Mileage database handle.
///
/// Wraps a tokio-rusqlite Connection that runs database operations
/// on a background thread. All calls on one handle are serialized on
/// that thread, which is what keeps increments from interleaving.
#[derive(Clone, Debug)]
pub struct MileageDb {
    pub(crate) conn: Connection,
}

impl MileageDb {
    /// Open an existing database at the specified path.
    ///
    /// Applies performance pragmas, then verifies the miles table is
    /// present. The store never creates its own schema; fails with
    /// `SchemaMissing` when the database was not provisioned.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let conn = Connection::open(path).await.map_err(|e| Error::Database(e.into()))?;
        apply_pragmas(&conn).await?;
        migrations::verify(&conn).await?;
        Ok(Self { conn })
    }

    /// Open a database at the specified path, creating any missing schema.
    ///
    /// Creates the file if it doesn't exist, applies performance pragmas,
    /// and runs any pending migrations.
    pub async fn provision(path: impl AsRef<Path>) -> Result<Self, Error> {
        let conn = Connection::open(path).await.map_err(|e| Error::Database(e.into()))?;
        apply_pragmas(&conn).await?;
        migrations::run(&conn).await?;
        Ok(Self { conn })
    }

    /// Open a provisioned in-memory database for testing.
    ///
    /// Creates a temporary in-memory SQLite database with the same
    /// pragma configuration as file-based databases.
    pub async fn open_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| Error::Database(e.into()))?;
        apply_pragmas(&conn).await?;
        migrations::run(&conn).await?;
        Ok(Self { conn })
    }
}

async fn apply_pragmas(conn: &Connection) -> Result<(), Error> {
    conn.call(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA temp_store=MEMORY;
             PRAGMA foreign_keys=ON;",
        )?;
        Ok(())
    })
    .await
    .map_err(Error::Database)
}
