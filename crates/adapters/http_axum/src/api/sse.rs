//! Server-Sent Events (SSE) stream of door state changes.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use garage_app::ports::{DeviceClient, StateNotifier};

use crate::state::AppState;

/// `GET /api/events/stream`: SSE stream of door state changes.
///
/// Each change from the sensor or from a command is sent as a JSON
/// `DoorEvent` in a `door` SSE frame. The stream continues until the client
/// disconnects or the event bus is closed.
pub async fn stream<D, N>(
    State(state): State<AppState<D, N>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    let event_rx = state.event_bus.subscribe();
    let event_stream = BroadcastStream::new(event_rx).filter_map(|result| match result {
        Ok(event) => match serde_json::to_string(&event) {
            Ok(json) => Some(Ok(Event::default().event("door").data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize door event for SSE stream");
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some events were dropped");
            None
        }
    });

    Sse::new(event_stream).keep_alive(KeepAlive::default())
}
