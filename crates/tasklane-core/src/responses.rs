//! Query result projections returned by search operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single row from the todo search: the todo title annotated with
/// distinct counts of its managers and comments.
///
/// Derived per query execution; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TodoSearchResult {
    pub title: String,
    pub manager_count: u64,
    pub comment_count: u64,
}
