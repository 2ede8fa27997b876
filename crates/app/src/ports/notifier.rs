//! Notifier port: push door state changes to the accessory surface.

use std::future::Future;

use garage_domain::event::DoorEvent;

/// Pushes state-changed notifications so observers see transitions without
/// polling the core.
pub trait StateNotifier: Send + Sync {
    /// Deliver `event` to all current observers. Never fails the caller.
    ///
    /// Callers invoke this while holding the door lock and await the
    /// returned future after releasing it. Implementations must enqueue
    /// `event` before returning so delivery order matches call order.
    fn notify(&self, event: DoorEvent) -> impl Future<Output = ()> + Send;
}

impl<T: StateNotifier> StateNotifier for std::sync::Arc<T> {
    fn notify(&self, event: DoorEvent) -> impl Future<Output = ()> + Send {
        (**self).notify(event)
    }
}
