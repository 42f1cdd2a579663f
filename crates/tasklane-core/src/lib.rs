//! # tasklane-core
//!
//! Core types shared across all Tasklane crates:
//! - Entity structs for the domain objects (log records, todos, users,
//!   managers, comments)
//! - ID prefix constants
//! - Pagination types (`PageRequest`, `Page`)
//! - Search result projections

pub mod entities;
pub mod ids;
pub mod page;
pub mod responses;
