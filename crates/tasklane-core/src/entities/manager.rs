use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An assignment linking a user to a todo as responsible party.
///
/// Unique per (user, todo) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Manager {
    pub id: String,
    pub user_id: String,
    pub todo_id: String,
    pub created_at: DateTime<Utc>,
}
