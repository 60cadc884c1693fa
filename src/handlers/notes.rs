use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use super::now_rfc3339;
use crate::database::{CreateNoteParams, Database};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::models::{convert_records, Note, User};

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub note: String,
}

/// POST /v1/notes - create a note owned by the caller
pub async fn notes_create(
    State(db): State<Database>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<Note> {
    let Json(params) = payload?;

    let id = Uuid::new_v4().to_string();
    let now = now_rfc3339();

    db.create_note(CreateNoteParams {
        id: id.clone(),
        created_at: now.clone(),
        updated_at: now,
        note: params.note,
        user_id: user.id,
    })
    .await
    .map_err(|e| ApiError::internal("Couldn't create note", e))?;

    let row = db
        .get_note(&id)
        .await
        .map_err(|e| ApiError::internal("Couldn't get note", e))?;

    let note = Note::try_from(row).map_err(|e| ApiError::internal("Couldn't convert note", e))?;
    Ok(ApiResponse::created(note))
}

/// GET /v1/notes - every note owned by the caller, oldest first
pub async fn notes_get(
    State(db): State<Database>,
    Extension(user): Extension<User>,
) -> ApiResult<Vec<Note>> {
    let rows = db
        .get_notes_for_user(&user.id)
        .await
        .map_err(|e| ApiError::internal("Couldn't get notes for user", e))?;

    let notes = convert_records(rows).map_err(|e| ApiError::internal("Couldn't convert notes", e))?;
    Ok(ApiResponse::ok(notes))
}
