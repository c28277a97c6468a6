//! Store operations used while seeding a fixture
//!
//! Seeding never relies on `INSERT OR IGNORE`: a row is skipped only when
//! one of its table's natural keys already matches an existing row, which
//! keeps reruns idempotent even for tables without UNIQUE constraints.

use super::schema::{SeedRow, TableDef};
use crate::core::types::FixtureResult;
use rusqlite::{params_from_iter, Connection};
use tracing::trace;

/// Creates the table if it does not exist yet
pub fn create_table(conn: &Connection, table: &TableDef) -> FixtureResult<()> {
    conn.execute_batch(table.ddl)?;
    Ok(())
}

/// Returns true if a row with the same values for `key` already exists
pub fn row_exists(
    conn: &Connection,
    table: &TableDef,
    key: &[&str],
    row: &SeedRow,
) -> FixtureResult<bool> {
    let mut values = Vec::with_capacity(key.len());
    let mut predicates = Vec::with_capacity(key.len());
    for (idx, column) in key.iter().enumerate() {
        let position = table
            .column_index(column)
            .ok_or_else(|| rusqlite::Error::InvalidColumnName(column.to_string()))?;
        values.push(&row.values()[position]);
        predicates.push(format!("{} = ?{}", column, idx + 1));
    }

    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {})",
        table.name,
        predicates.join(" AND ")
    );
    let exists: bool = conn.query_row(&sql, params_from_iter(values), |row| row.get(0))?;
    Ok(exists)
}

/// Inserts `row` unless any natural key already matches; returns whether it inserted
pub fn insert_if_absent(conn: &Connection, table: &TableDef, row: &SeedRow) -> FixtureResult<bool> {
    for key in table.natural_keys {
        if row_exists(conn, table, key, row)? {
            trace!(table = table.name, ?key, "Seed row already present");
            return Ok(false);
        }
    }

    let placeholders: Vec<String> = (1..=table.insert_columns.len())
        .map(|idx| format!("?{}", idx))
        .collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name,
        table.insert_columns.join(", "),
        placeholders.join(", ")
    );
    conn.execute(&sql, params_from_iter(row.values()))?;
    Ok(true)
}

/// Number of rows currently in the table
pub fn count_rows(conn: &Connection, table: &str) -> FixtureResult<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })?;
    Ok(count.max(0) as u64)
}

/// Column names of the table as the store reports them
pub fn table_columns(conn: &Connection, table: &str) -> FixtureResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::schema::seed_row;
    use crate::fixture::standalone::USERS;

    fn users_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_table(&conn, &USERS).unwrap();
        conn
    }

    #[test]
    fn test_create_table_is_idempotent() {
        let conn = users_store();
        create_table(&conn, &USERS).unwrap();
        assert_eq!(count_rows(&conn, "users").unwrap(), 0);
    }

    #[test]
    fn test_insert_then_skip() {
        let conn = users_store();
        let row = seed_row![1, "alice_j", "alice@example.com", "Alice", true];

        assert!(insert_if_absent(&conn, &USERS, &row).unwrap());
        assert!(!insert_if_absent(&conn, &USERS, &row).unwrap());
        assert_eq!(count_rows(&conn, "users").unwrap(), 1);
    }

    #[test]
    fn test_any_natural_key_match_skips() {
        let conn = users_store();
        insert_if_absent(
            &conn,
            &USERS,
            &seed_row![1, "alice_j", "alice@example.com", "Alice", true],
        )
        .unwrap();

        // Same email, different id and username
        let clash = seed_row![9, "someone_else", "alice@example.com", "Other", true];
        assert!(!insert_if_absent(&conn, &USERS, &clash).unwrap());

        let fresh = seed_row![2, "bob", "bob@example.com", "Bob", false];
        assert!(insert_if_absent(&conn, &USERS, &fresh).unwrap());
        assert_eq!(count_rows(&conn, "users").unwrap(), 2);
    }

    #[test]
    fn test_row_exists_by_key() {
        let conn = users_store();
        let row = seed_row![3, "carol", "carol@example.com", "Carol", true];
        assert!(!row_exists(&conn, &USERS, &["username"], &row).unwrap());
        insert_if_absent(&conn, &USERS, &row).unwrap();
        assert!(row_exists(&conn, &USERS, &["username"], &row).unwrap());
        assert!(row_exists(&conn, &USERS, &["id", "email"], &row).unwrap());
    }

    #[test]
    fn test_unknown_key_column() {
        let conn = users_store();
        let row = seed_row![3, "carol", "carol@example.com", "Carol", true];
        assert!(row_exists(&conn, &USERS, &["nickname"], &row).is_err());
    }

    #[test]
    fn test_table_columns() {
        let conn = users_store();
        assert_eq!(
            table_columns(&conn, "users").unwrap(),
            vec!["id", "username", "email", "full_name", "created_at", "is_active"]
        );
    }
}
