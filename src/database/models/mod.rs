//! Rows as they are stored. Timestamps stay as the TEXT written to the
//! database; `crate::models` validates them on the way out.

pub mod note;
pub mod user;

pub use note::Note;
pub use user::User;
