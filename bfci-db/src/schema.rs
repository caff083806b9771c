//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the store is created.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `sheets` - one row per parsed (workbook, family) sheet; its presence
///   is what makes the sheet cache hit
/// - `sheet_years` - year column labels in sheet order
/// - `sheet_rows` - department key of every data row, in sheet order
/// - `index_values` - one cell per (row, year); `value` is NULL when missing
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS sheets (
        workbook TEXT NOT NULL,
        family TEXT NOT NULL,
        row_count INTEGER NOT NULL,
        PRIMARY KEY (workbook, family)
    );

    CREATE TABLE IF NOT EXISTS sheet_years (
        workbook TEXT NOT NULL,
        family TEXT NOT NULL,
        position INTEGER NOT NULL,
        year TEXT NOT NULL,
        PRIMARY KEY (workbook, family, year)
    );

    CREATE TABLE IF NOT EXISTS sheet_rows (
        workbook TEXT NOT NULL,
        family TEXT NOT NULL,
        row_position INTEGER NOT NULL,
        department TEXT NOT NULL,
        PRIMARY KEY (workbook, family, row_position)
    );
    CREATE INDEX IF NOT EXISTS idx_rows_department ON sheet_rows(workbook, family, department);

    CREATE TABLE IF NOT EXISTS index_values (
        workbook TEXT NOT NULL,
        family TEXT NOT NULL,
        row_position INTEGER NOT NULL,
        year TEXT NOT NULL,
        value REAL,
        PRIMARY KEY (workbook, family, row_position, year)
    );
    CREATE INDEX IF NOT EXISTS idx_values_year ON index_values(workbook, family, year);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = ["sheets", "sheet_years", "sheet_rows", "index_values"];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
