use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::get_api_key;
use crate::database::{Database, DatabaseError};
use crate::error::ApiError;
use crate::models::User;

/// Resolve the caller from `Authorization: ApiKey <key>` and insert the
/// validated `User` into request extensions for downstream handlers.
pub async fn api_key_auth_middleware(
    State(db): State<Database>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = get_api_key(request.headers()).map_err(|err| {
        tracing::debug!("Rejecting request: {}", err);
        ApiError::from(err)
    })?;

    let row = db.get_user_by_api_key(&api_key).await.map_err(|err| match err {
        DatabaseError::NotFound(_) => ApiError::not_found("Couldn't get user"),
        other => ApiError::internal("Couldn't get user", other),
    })?;

    let user = User::try_from(row)?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
