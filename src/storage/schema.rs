//! Database schema definitions

/// SQL to create the user table
pub const CREATE_USER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY,
    name TEXT
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &["CREATE INDEX IF NOT EXISTS idx_user_name ON user(name)"];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_USER_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
