use anyhow::Context;
use student_registry::config::AppConfig;
use student_registry::database::DatabaseManager;
use student_registry::services::seed;
use student_registry::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    student_registry::init_tracing();

    let config = AppConfig::from_env();
    tracing::info!("Starting student registry in {:?} mode", config.environment);

    let database = DatabaseManager::connect(&config.database).await?;
    database.migrate().await?;

    let bind_addr = config.bind_addr();
    let seed_sample_data = config.database.seed_sample_data;
    let state = AppState::new(config, database.clone());

    if seed_sample_data {
        seed::seed_if_empty(&state.students).await?;
    }

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Student registry listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
