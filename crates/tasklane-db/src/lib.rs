//! # tasklane-db
//!
//! libSQL database operations for Tasklane.
//!
//! Handles the relational state for the task-management backend slice:
//! users, todos, managers, comments, and the append-only audit log.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) — embedded local
//! databases with a stable async API.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Tasklane state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation;
/// repository methods live on [`service::TaskService`].
pub struct TaskDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TaskDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let task_db = Self { db, conn };
        task_db.run_migrations().await?;
        Ok(task_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tdo-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> TaskDb {
        TaskDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["users", "todos", "managers", "comments", "logs"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn open_local_file_backed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasklane.db");
        let db = TaskDb::open_local(path.to_str().unwrap()).await.unwrap();

        db.conn()
            .execute(
                "INSERT INTO users (id, nickname, created_at, updated_at)
                 VALUES ('usr-t1', 'alice', '2026-01-01T00:00:00+00:00', '2026-01-01T00:00:00+00:00')",
                (),
            )
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("tdo").await.unwrap();
        assert!(id.starts_with("tdo-"), "ID should start with 'tdo-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        // Verify hex characters
        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in tasklane_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enforced() {
        let db = test_db().await;

        let result = db
            .conn()
            .execute(
                "INSERT INTO todos (id, user_id, title, created_at, updated_at)
                 VALUES ('tdo-t1', 'usr-missing', 'Orphan', '2026-01-01T00:00:00+00:00', '2026-01-01T00:00:00+00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "FK violation should be rejected");
    }
}
