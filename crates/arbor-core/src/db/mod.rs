//! Database operations and SQLite management for tasks.
//!
//! This module owns the SQLite connection, schema management and every query
//! the tracker runs. Mutations that touch more than one row (creation under a
//! parent, status changes with their completion cascade, deletion) each run
//! inside a single `IMMEDIATE` transaction, so a partially cascaded tree is
//! never visible to another connection.

use std::path::Path;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod lifecycle;
pub mod migrations;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Starts a write transaction that takes the database lock up front.
    fn write_transaction(&mut self) -> Result<Transaction<'_>> {
        self.connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")
    }
}
