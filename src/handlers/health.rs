use axum::response::Json;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Notely",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /v1/healthz (public)",
            "users": "POST /v1/users (public), GET /v1/users (ApiKey)",
            "notes": "GET /v1/notes, POST /v1/notes (ApiKey)",
        }
    }))
}

/// GET /v1/healthz - readiness probe
pub async fn healthz() -> ApiResponse<Value> {
    ApiResponse::ok(json!({ "status": "ok" }))
}
