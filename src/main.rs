use anyhow::Context;
use tracing_subscriber::EnvFilter;

use notely::config;
use notely::database::Database;
use notely::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("notely=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Notely in {:?} mode", config.environment);

    let db = match &config.database.url {
        Some(url) => {
            let db = Database::connect(&config.database, url)
                .await
                .context("failed to connect to database")?;
            db.migrate().await.context("failed to migrate database")?;
            Some(db)
        }
        None => {
            tracing::warn!("DATABASE_URL environment variable is not set");
            None
        }
    };

    let app = routes::app(config, db.clone());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Serving on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(db) = db {
        db.close().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
