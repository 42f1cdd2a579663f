//! Repository modules implementing the operations for all Tasklane entities.
//!
//! Each module adds methods to `TaskService` via `impl TaskService` blocks.

pub mod comment;
pub mod log;
pub mod manager;
pub mod todo;
pub mod user;
