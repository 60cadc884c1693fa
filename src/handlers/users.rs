use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::now_rfc3339;
use crate::auth::generate_random_sha256_hash;
use crate::database::{CreateUserParams, Database};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::User;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// POST /v1/users - register a user and issue a fresh API key
pub async fn users_create(
    State(db): State<Database>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<User> {
    let Json(params) = payload?;

    let api_key = generate_random_sha256_hash();
    let now = now_rfc3339();

    db.create_user(CreateUserParams {
        id: Uuid::new_v4().to_string(),
        created_at: now.clone(),
        updated_at: now,
        name: params.name,
        api_key: api_key.clone(),
    })
    .await
    .map_err(|e| ApiError::internal("Couldn't create user", e))?;

    let row = db
        .get_user_by_api_key(&api_key)
        .await
        .map_err(|e| ApiError::internal("Couldn't get user", e))?;

    let user = User::try_from(row).map_err(|e| ApiError::internal("Couldn't convert user", e))?;
    tracing::info!("Created user {}", user.id);

    Ok(ApiResponse::created(user))
}

/// GET /v1/users - the authenticated user
pub async fn users_get(Extension(user): Extension<User>) -> ApiResponse<User> {
    ApiResponse::ok(user)
}
