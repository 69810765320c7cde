//! Bistro backend entry point
//!
//! Loads `config/{env}.yaml` (env defaults to "dev"), initializes logging,
//! connects PostgreSQL, applies migrations when configured, and serves the
//! REST gateway.

use std::sync::Arc;

use bistro::auth::AuthService;
use bistro::gateway::{self, state::AppState};
use bistro::{AppConfig, Database, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::args().nth(1).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load(&env)?;

    let _log_guard = logging::init_logging(&config);
    tracing::info!(env, "Starting bistro backend");

    let db = Arc::new(
        Database::connect(&config.database.url, config.database.max_connections).await?,
    );
    if config.database.run_migrations {
        db.migrate().await?;
    }

    let auth = Arc::new(AuthService::new(
        db.pool().clone(),
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    ));
    let state = Arc::new(AppState::new(db, auth));

    gateway::run_server(&config.gateway.host, config.gateway.port, state).await
}
