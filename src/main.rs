use anyhow::Context;
use beer_cart::catalog::load_from_path;
use beer_cart::config::Config;
use beer_cart::logger::init_logger;
use beer_cart::router::create_app_router;
use beer_cart::state::AppState;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logger(config.verbose, config.log_json);

    // The service cannot run without its catalog
    let catalog = load_from_path(&config.catalog)
        .with_context(|| format!("failed to load catalog from {}", config.catalog.display()))?;

    // Initialize application state
    let state = Arc::new(AppState::new(catalog));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
