//! Entity structs for all Tasklane domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod comment;
mod log;
mod manager;
mod todo;
mod user;

pub use comment::Comment;
pub use log::LogRecord;
pub use manager::Manager;
pub use todo::Todo;
pub use user::User;
