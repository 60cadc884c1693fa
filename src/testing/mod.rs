use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use crate::config::{AppConfig, Environment};
use crate::database::{CreateNoteParams, CreateUserParams, Database};

pub const FIXED_TIMESTAMP: &str = "2023-10-24T12:00:00Z";

/// Fresh migrated in-memory database, private to the caller
pub async fn memory_database() -> Database {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    let db = Database::from_pool(pool);
    db.migrate().await.expect("failed to migrate in-memory database");
    db
}

/// Development defaults, independent of the shell environment and `.env`
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::defaults(Environment::Development);
    config.api.enable_request_logging = false;
    config
}

pub fn user_params(id: &str, name: &str, api_key: &str) -> CreateUserParams {
    CreateUserParams {
        id: id.to_string(),
        created_at: FIXED_TIMESTAMP.to_string(),
        updated_at: FIXED_TIMESTAMP.to_string(),
        name: name.to_string(),
        api_key: api_key.to_string(),
    }
}

pub fn note_params(id: &str, user_id: &str, note: &str) -> CreateNoteParams {
    CreateNoteParams {
        id: id.to_string(),
        created_at: FIXED_TIMESTAMP.to_string(),
        updated_at: FIXED_TIMESTAMP.to_string(),
        note: note.to_string(),
        user_id: user_id.to_string(),
    }
}

/// Send one request through the router and decode the JSON body
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    api_key: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header(header::AUTHORIZATION, format!("ApiKey {}", key));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is not JSON")
    };

    (status, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_ignores_shell_environment() {
        std::env::set_var("PORT", "1234");
        std::env::set_var("DATABASE_URL", "sqlite://from-shell.db");

        let config = test_config();

        assert_eq!(config.server.port, 8080);
        assert!(config.database.url.is_none());
        assert!(!config.api.enable_request_logging);
    }
}
