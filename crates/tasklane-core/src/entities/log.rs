use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An append-only audit log record.
///
/// Immutable after creation: the store exposes no update or delete
/// operations. `log_type` is bounded to 50 characters by the schema,
/// not validated in memory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LogRecord {
    pub id: String,
    pub log_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
