use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub note: String,
    pub user_id: String,
}

/// Input for `Database::create_note`
#[derive(Debug, Clone)]
pub struct CreateNoteParams {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub note: String,
    pub user_id: String,
}
