//! Audit log repository.
//!
//! Append-only: records are created once and never updated or deleted.
//! The 50-character bound on `log_type` is enforced by the schema CHECK,
//! not validated here — callers are responsible for conforming, and an
//! over-length value surfaces as a storage error.

use chrono::Utc;

use tasklane_core::entities::LogRecord;
use tasklane_core::ids::PREFIX_LOG;

use crate::error::DatabaseError;
use crate::service::TaskService;

impl TaskService {
    /// Append an audit log record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails, including schema
    /// constraint violations (`log_type` longer than 50 characters).
    pub async fn create_log(
        &self,
        log_type: &str,
        message: &str,
    ) -> Result<LogRecord, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_LOG).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO logs (id, log_type, message, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    log_type,
                    message,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(LogRecord {
            id,
            log_type: log_type.to_string(),
            message: message.to_string(),
            created_at: now,
            updated_at: now,
        })
    }
}
