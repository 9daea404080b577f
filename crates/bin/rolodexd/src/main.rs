//! # rolodexd — rolodex daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + environment variable overrides)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository and the person service
//! - Build the axum router, bind a TCP port, and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use rolodex_adapter_http_axum::router;
use rolodex_adapter_http_axum::state::AppState;
use rolodex_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqlitePersonRepository};
use rolodex_app::services::person_service::PersonService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(config.logging.filter.as_str())?)
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_owned(),
    }
    .build()
    .await?;

    // Repository and service
    let person_repo = SqlitePersonRepository::new(db.pool().clone());
    let person_service = PersonService::new(person_repo);

    // HTTP
    let state = AppState::new(person_service);
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "rolodexd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
