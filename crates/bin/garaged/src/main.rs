//! # garaged: garage door accessory daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the Fibaro device client (adapter)
//! - Construct the door service, command handler and accessory, injecting
//!   the client and the event bus via port traits
//! - Start the sensor poller
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use garage_adapter_fibaro::FibaroClient;
use garage_adapter_http_axum::state::AppState;
use garage_app::event_bus::InProcessEventBus;
use garage_app::services::accessory::Accessory;
use garage_app::services::command_handler::CommandHandler;
use garage_app::services::door_service::DoorService;
use garage_app::services::poller::Poller;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let settings = config.door_settings();
    let info = config.accessory_info()?;

    // Device
    let client = Arc::new(FibaroClient::new(&config.fibaro())?);

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(64));

    // Services
    let door = Arc::new(DoorService::new(Arc::clone(&event_bus)));
    let commands = CommandHandler::new(
        Arc::clone(&door),
        Arc::clone(&client),
        settings.opening_duration,
    );
    let accessory = Arc::new(Accessory::new(info, Arc::clone(&door), commands));

    // Poller
    let poller = Poller::new(Arc::clone(&door), client, settings.polling_interval);
    let poll_task = poller.start().await;

    // HTTP
    let state = AppState::new(accessory, event_bus);
    let app = garage_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "garaged listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(task) = poll_task {
        task.abort();
    }
    tracing::info!("garaged stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
