use std::time::Instant;

use tracing::info;

use jotter_api::{app, logging, AppState, ServerConfig};
use jotter_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    let _file_guard = logging::init_tracing(&config.log);

    info!(
        log_format = ?config.log.format,
        log_file = %config
            .log
            .file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(stdout)".to_string()),
        "Logging initialized"
    );

    let start = Instant::now();
    let db = Database::connect_with_config(&config.database_path, config.pool_config()).await?;
    db.migrate().await?;
    info!(
        subsystem = "api",
        component = "startup",
        db_path = %config.database_path.display(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Database ready"
    );

    let app = app(AppState::from_database(&db), &config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
