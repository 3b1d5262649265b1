//! Unified error types for the mileage ledger.
//!
//! Validation failures and storage failures are separate variants so
//! callers can branch on kind instead of parsing message text.

use tokio_rusqlite::rusqlite;

/// Unified error types for the mileage store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Vehicle name canonicalized to the empty string.
    #[error("INVALID_VEHICLE: {0}")]
    InvalidVehicle(String),

    /// Mileage delta is negative or not a finite number.
    #[error("INVALID_MILEAGE: {0}")]
    InvalidMileage(String),

    /// Database operation failed.
    #[error("STORAGE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// The opened database has no miles table.
    #[error("STORAGE_ERROR: missing table: {0}")]
    SchemaMissing(String),

    /// Migration failed to apply.
    #[error("STORAGE_ERROR: migration failed: {0}")]
    MigrationFailed(String),
}

impl Error {
    /// True for input-validation failures, false for storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidVehicle(_) | Error::InvalidMileage(_))
    }
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}
