//! `SQLite` schema definitions for signdesk.
//!
//! The entire persisted surface of signdesk is a single key-value table.
//! The session flag lives there, alongside a handful of bookkeeping keys.

/// SQL statement to create the state table.
pub const CREATE_STATE_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_STATE_TABLE];

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_statements_execute() {
        let conn = Connection::open_in_memory().unwrap();
        for statement in SCHEMA_STATEMENTS {
            conn.execute(statement, []).unwrap();
        }
    }

    #[test]
    fn test_schema_statements_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        for _ in 0..2 {
            for statement in SCHEMA_STATEMENTS {
                conn.execute(statement, []).unwrap();
            }
        }
    }

    #[test]
    fn test_state_table_key_is_primary() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(CREATE_STATE_TABLE, []).unwrap();

        conn.execute(
            "INSERT INTO state (key, value) VALUES ('a', '1')",
            [],
        )
        .unwrap();
        let dup = conn.execute("INSERT INTO state (key, value) VALUES ('a', '2')", []);
        assert!(dup.is_err());
    }
}
