use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A task item with a title, owning user, and zero or more managers
/// and comments (stored in their own tables).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub contents: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
