use std::time::Duration;

use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::Database;
use crate::handlers;
use crate::middleware::api_key_auth_middleware;

/// Build the application router. CRUD routes are only mounted with a database.
pub fn app(config: &AppConfig, db: Option<Database>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/v1/healthz", get(handlers::healthz));

    match db {
        Some(db) => router = router.merge(v1_routes(db)),
        None => tracing::warn!("Running without CRUD endpoints"),
    }

    let router = router.layer(cors_layer(config));

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn v1_routes(db: Database) -> Router {
    let auth = from_fn_with_state(db.clone(), api_key_auth_middleware);

    // route_layer only wraps the methods registered before it: POST /v1/users stays public
    Router::new()
        .route("/v1/users", get(handlers::users_get).route_layer(auth.clone()).post(handlers::users_create))
        .route("/v1/notes", get(handlers::notes_get).post(handlers::notes_create).route_layer(auth))
        .with_state(db)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([header::LINK])
        .allow_credentials(false)
        .max_age(Duration::from_secs(config.security.cors_max_age_secs))
}
