//! # cardlink-store
//!
//! Local cache storage for cardlink, backed by SQLite.
//!
//! Cards written here act as an offline fallback and write-through backup for
//! the remote backend. The crate exposes a synchronous [`Database`] handle
//! that wraps a `rusqlite::Connection` and provides typed CRUD helpers keyed
//! by card id.

pub mod cards;
pub mod database;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::StoreError;
