//! Egg Timer - A state-managed HTTP daemon that times boiled eggs
//!
//! This is the main entry point for the egg-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use egg_timer::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::alarm_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("egg_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting egg-timer v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, alarm={:?}",
          config.host, config.port, config.alarm());

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Start the alarm task before any countdown can complete
    let alarm_events = state.subscribe_events();
    let alarm = config.alarm();
    tokio::spawn(async move {
        let sounded = alarm_task(alarm_events, alarm).await;
        info!("Alarm task finished after {} alarms", sounded);
    });

    if let Some(option) = config.select {
        state.select(option).map_err(anyhow::Error::msg)?;
    }

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /select/:hardness - Start a soft, medium or hard countdown");
    info!("  POST /cancel           - Stop the running countdown");
    info!("  GET  /status           - Check progress and label");
    info!("  GET  /health           - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.cancel() {
        tracing::warn!("Failed to stop countdown on shutdown: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
