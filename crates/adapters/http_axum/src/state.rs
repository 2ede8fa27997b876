//! Shared application state for axum handlers.

use std::sync::Arc;

use garage_app::event_bus::InProcessEventBus;
use garage_app::ports::{DeviceClient, StateNotifier};
use garage_app::services::accessory::Accessory;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so the device client and notifier do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<D, N> {
    /// The exposed garage door accessory.
    pub accessory: Arc<Accessory<D, N>>,
    /// Broadcast channel feeding the SSE stream.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<D, N> Clone for AppState<D, N> {
    fn clone(&self) -> Self {
        Self {
            accessory: Arc::clone(&self.accessory),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<D, N> AppState<D, N>
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    pub fn new(accessory: Arc<Accessory<D, N>>, event_bus: Arc<InProcessEventBus>) -> Self {
        Self {
            accessory,
            event_bus,
        }
    }
}
