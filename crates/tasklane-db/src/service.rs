//! Service layer exposing the repository methods.
//!
//! `TaskService` wraps `TaskDb` (raw database access) plus query defaults
//! resolved from configuration. All repo methods are implemented as
//! `impl TaskService` blocks in the `repos` modules.

use tasklane_config::TasklaneConfig;
use tasklane_core::page::PageRequest;

use crate::TaskDb;
use crate::error::DatabaseError;

/// Orchestrates database operations for the task-management slice.
pub struct TaskService {
    db: TaskDb,
    default_page_size: u32,
}

impl TaskService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = TaskDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service from loaded configuration (database path and
    /// general defaults).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &TasklaneConfig) -> Result<Self, DatabaseError> {
        let db = TaskDb::open_local(&config.database.path).await?;
        Ok(Self {
            db,
            default_page_size: config.general.default_page_size,
        })
    }

    /// Create from an existing `TaskDb` (for testing).
    #[must_use]
    pub fn from_db(db: TaskDb) -> Self {
        Self {
            db,
            default_page_size: PageRequest::default().size,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TaskDb {
        &self.db
    }

    /// First page at the configured default page size.
    #[must_use]
    pub const fn default_page_request(&self) -> PageRequest {
        PageRequest::new(0, self.default_page_size)
    }
}
