use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub api_key: String,
}

/// Input for `Database::create_user`
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub api_key: String,
}
