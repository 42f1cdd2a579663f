//! ID prefix constants for all entity tables.
//!
//! IDs have the form `pfx-xxxxxxxx` where the suffix is 8 hex chars
//! generated by the database (`randomblob(4)`).

pub const PREFIX_LOG: &str = "log";
pub const PREFIX_USER: &str = "usr";
pub const PREFIX_TODO: &str = "tdo";
pub const PREFIX_MANAGER: &str = "mgr";
pub const PREFIX_COMMENT: &str = "cmt";

/// All known prefixes, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_LOG,
    PREFIX_USER,
    PREFIX_TODO,
    PREFIX_MANAGER,
    PREFIX_COMMENT,
];
