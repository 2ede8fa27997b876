//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accessory;
#[allow(clippy::missing_errors_doc)]
pub mod door;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use garage_app::ports::{DeviceClient, StateNotifier};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<D, N>() -> Router<AppState<D, N>>
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    Router::new()
        // Accessory
        .route("/accessory", get(accessory::info::<D, N>))
        .route("/identify", post(accessory::identify::<D, N>))
        // Door characteristics
        .route("/door", get(door::snapshot::<D, N>))
        .route("/door/current", get(door::current::<D, N>))
        .route(
            "/door/target",
            get(door::target::<D, N>).put(door::set_target::<D, N>),
        )
        // Push notifications
        .route("/events/stream", get(sse::stream::<D, N>))
}
