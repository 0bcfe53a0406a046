//! Database schema initialization and migrations.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

/// Columns added after the first schema revision, with their definitions.
const ADDED_COLUMNS: [(&str, &str); 2] = [("performers", "TEXT"), ("completed_at", "TEXT")];

impl super::Database {
    /// Initializes the database schema using the embedded SQL files.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases before views reference the
        // newer columns
        self.apply_migrations()?;

        let views_sql = include_str!("../../assets/views.sql");
        self.connection
            .execute_batch(views_sql)
            .db_context("Failed to create database views")?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (column, definition) in ADDED_COLUMNS {
            let exists: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('tasks') WHERE name = ?1",
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect tasks table")?;

            if !exists {
                debug!("Adding missing column '{column}' to tasks table");
                self.connection
                    .execute(
                        &format!("ALTER TABLE tasks ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .db_context("Failed to migrate tasks table")?;
            }
        }

        Ok(())
    }
}
