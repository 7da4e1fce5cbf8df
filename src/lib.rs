//! # Namebook - a name-to-id ledger
//!
//! Namebook keeps a single SQLite table of names and hands back the row id
//! the database assigned on insert. The whole tool is two operations:
//! store a name, look a name up.
//!
//! Namebook provides:
//! - A record store facade over a local SQLite file (`storage`)
//! - Config-file and flag based database path resolution (`config`)
//! - A CLI front end (`namebook` binary) that prints one line per record

pub mod config;
pub mod record;
pub mod storage;

// Re-exports for convenient access
pub use record::UserRecord;
pub use storage::SqliteStore;

/// Result type alias for namebook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for namebook operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}
