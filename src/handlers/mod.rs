// handlers/mod.rs - HTTP handlers
//
// Public:    GET /, GET /v1/healthz, POST /v1/users
// API key:   GET /v1/users, GET /v1/notes, POST /v1/notes

pub mod health;
pub mod notes;
pub mod users;

pub use health::{healthz, root};
pub use notes::{notes_create, notes_get};
pub use users::{users_create, users_get};

use chrono::{SecondsFormat, Utc};

/// Current time in the RFC3339 form stored in timestamp columns
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
