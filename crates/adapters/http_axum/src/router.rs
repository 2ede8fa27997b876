//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use garage_app::ports::{DeviceClient, StateNotifier};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the accessory API under `/api` next to a `/health` endpoint.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<D, N>(state: AppState<D, N>) -> Router
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
