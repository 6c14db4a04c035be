// ============================
// auth-server/src/main.rs
// ============================
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use auth_server::{config::Settings, router, store::MemoryStore, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);

    let app = router::create_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
