use eyre::Result;

use certa_server::config;
use certa_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    certa_server::logging::init();

    let path = config::config_path()?;
    let first_run = !path.exists();
    let mut config = config::load_config(&path)?;
    if first_run {
        // Leave a file the operator can edit.
        if let Err(e) = config::save_config(&path, &config) {
            tracing::warn!(error = %e, "could not write default config");
        }
    }
    config.apply_env();

    let state = AppState::from_config(&config).await?;
    let desk = state.desk.clone();
    let app = certa_server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| eyre::eyre!("failed to bind {}: {e}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "certa listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Last chance for records whose write failed earlier.
    let mut desk = desk.lock().await;
    if desk.is_dirty() {
        desk.flush().await?;
    }
    tracing::info!("certa stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
