use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{parse_timestamp, ConvertError};
use crate::database::models as db;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub api_key: String,
}

impl TryFrom<db::User> for User {
    type Error = ConvertError;

    fn try_from(row: db::User) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp("created_at", &row.created_at)?;
        let updated_at = parse_timestamp("updated_at", &row.updated_at)?;

        Ok(Self {
            id: row.id,
            created_at,
            updated_at,
            name: row.name,
            api_key: row.api_key,
        })
    }
}
