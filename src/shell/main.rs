use tracing_subscriber::{EnvFilter, fmt};

use employees::shell::config::{Config, tolerate_missing_env_file};
use employees::shell::http::router;
use employees::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file = tolerate_missing_env_file(dotenvy::dotenv());

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employees=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = env_file {
        tracing::warn!("Failed to load .env file: {e}");
    }

    let config = Config::from_env()?;
    tracing::info!(storage = ?config.storage, "Starting employees service");

    let state = AppState::from_config(&config).await?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Employees endpoint: http://{}/api/employees", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Employees service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
