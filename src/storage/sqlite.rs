//! SQLite storage implementation

use super::schema;
use crate::Result;
use crate::record::UserRecord;
use rusqlite::Connection;
use std::path::Path;

/// SQLite-backed storage for user records
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert a name, letting the database assign the id
    pub fn insert_user(&self, name: &str) -> Result<UserRecord> {
        let id: i64 = self.conn.query_row(
            "INSERT INTO user (name) VALUES (?1) RETURNING id",
            [name],
            |row| row.get(0),
        )?;
        Ok(UserRecord::new(id, name))
    }

    /// Find all records with the given name, oldest first.
    ///
    /// Exact, case-sensitive match. Zero matches is an empty vec, not an
    /// error.
    pub fn find_users_by_name(&self, name: &str) -> Result<Vec<UserRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM user WHERE name = ?1 ORDER BY id")?;

        let records = stmt
            .query_map([name], |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(records)
    }
}
