//! User record - the single entity namebook persists

use serde::{Deserialize, Serialize};

/// A stored name with its database-assigned id.
///
/// Ids are handed out by SQLite on insert and are unique per database file.
/// Names carry no uniqueness constraint, so one name may map to many ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Row id assigned by the database
    pub id: i64,
    /// Stored name, arbitrary text (may be empty, may repeat)
    pub name: String,
}

impl UserRecord {
    /// Create a record from an id the database already assigned
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
