use super::manager::{Database, DatabaseError};
use super::models::note::CreateNoteParams;
use super::models::user::CreateUserParams;
use super::models::{Note, User};

impl Database {
    pub async fn create_user(&self, params: CreateUserParams) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO users (id, created_at, updated_at, name, api_key) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(params.id)
        .bind(params.created_at)
        .bind(params.updated_at)
        .bind(params.name)
        .bind(params.api_key)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_user_by_api_key(&self, api_key: &str) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "SELECT id, created_at, updated_at, name, api_key FROM users WHERE api_key = ?",
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("user".to_string()))
    }

    pub async fn create_note(&self, params: CreateNoteParams) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO notes (id, created_at, updated_at, note, user_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(params.id)
        .bind(params.created_at)
        .bind(params.updated_at)
        .bind(params.note)
        .bind(params.user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get_note(&self, id: &str) -> Result<Note, DatabaseError> {
        sqlx::query_as::<_, Note>(
            "SELECT id, created_at, updated_at, note, user_id FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("note".to_string()))
    }

    /// Notes owned by `user_id`, oldest first; same-second rows keep insertion order
    pub async fn get_notes_for_user(&self, user_id: &str) -> Result<Vec<Note>, DatabaseError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, created_at, updated_at, note, user_id FROM notes \
             WHERE user_id = ? ORDER BY created_at, rowid",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }
}
