pub mod manager;
pub mod models;
pub mod queries;

pub use manager::{Database, DatabaseError};
pub use models::note::CreateNoteParams;
pub use models::user::CreateUserParams;
