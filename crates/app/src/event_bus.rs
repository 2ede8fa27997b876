//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use garage_domain::event::DoorEvent;

use crate::ports::StateNotifier;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Notifying succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<DoorEvent>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to door events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DoorEvent> {
        self.sender.subscribe()
    }
}

impl StateNotifier for InProcessEventBus {
    fn notify(&self, event: DoorEvent) -> impl Future<Output = ()> + Send {
        // send only fails when nobody listens
        let _ = self.sender.send(event);
        async {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_domain::door::{DoorSnapshot, DoorState, TargetState};
    use garage_domain::event::ChangeSource;

    fn opening_event() -> DoorEvent {
        DoorEvent::new(
            DoorSnapshot::default(),
            DoorSnapshot::new(DoorState::Opening, TargetState::Open),
            ChangeSource::Command,
        )
    }

    #[tokio::test]
    async fn should_deliver_event_to_subscriber() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();

        let event = opening_event();
        bus.notify(event.clone()).await;

        let received = rx.recv().await.unwrap();
        assert_eq!(received, event);
    }

    #[tokio::test]
    async fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.notify(opening_event()).await;

        assert_eq!(rx1.recv().await.unwrap().source, ChangeSource::Command);
        assert_eq!(rx2.recv().await.unwrap().source, ChangeSource::Command);
    }

    #[tokio::test]
    async fn should_not_fail_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        bus.notify(opening_event()).await;
    }
}
