use anyhow::Context;
use tracing::{info, warn};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use smart_goals_backend::config::ServerConfig;
use smart_goals_backend::domain::events::GoalEvent;
use smart_goals_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Starting SMART goals backend with {:?}", config);
    let app_state = initialize_backend(&config);

    let mut celebrations = app_state.celebrations.subscribe();
    tokio::spawn(async move {
        loop {
            match celebrations.recv().await {
                Ok(GoalEvent::Completed { goal_id, text }) => {
                    info!("🎉 Celebrating goal {}: {}", goal_id, text);
                }
                Err(RecvError::Lagged(skipped)) => warn!("Missed {} celebrations", skipped),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let app = create_router(app_state, &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_target())
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
