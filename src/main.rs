use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use voice_ordering_backend::cart::AppState;
use voice_ordering_backend::config::Settings;
use voice_ordering_backend::router::create_app_router;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    // Configuration is loaded once and immutable afterwards.
    let settings = Settings::from_env()?;
    let bind_addr = settings.bind_addr.clone();

    // Initialize application state
    let state = Arc::new(AppState::new(settings));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    tracing::info!(%bind_addr, "server listening");
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
