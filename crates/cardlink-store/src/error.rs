use thiserror::Error;

/// Errors produced by the local cache store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A query expected exactly one row but found none.
    #[error("Record not found")]
    NotFound,

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// A JSON column failed to serialize.
    #[error("JSON column error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the storage medium itself is unusable (missing data dir,
    /// disk full, database locked or unopenable), as opposed to a per-record
    /// outcome like [`StoreError::NotFound`]. Callers treat these writes as
    /// best-effort and carry on.
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::NoDataDir | StoreError::Io(_) => true,
            StoreError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => matches!(
                err.code,
                rusqlite::ErrorCode::CannotOpen
                    | rusqlite::ErrorCode::DiskFull
                    | rusqlite::ErrorCode::DatabaseBusy
                    | rusqlite::ErrorCode::DatabaseLocked
                    | rusqlite::ErrorCode::ReadOnly
            ),
            _ => false,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
