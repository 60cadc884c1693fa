pub mod auth;
pub mod response;

pub use auth::api_key_auth_middleware;
pub use response::{ApiResponse, ApiResult};
