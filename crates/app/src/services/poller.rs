//! Poller: periodic sensor refresh feeding the door machine.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use garage_domain::door::{DoorSnapshot, SensorOutcome};

use crate::ports::{DeviceClient, StateNotifier};
use crate::services::door_service::DoorService;

/// What one poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The pause window was active; the device was not contacted.
    Skipped,
    /// The reading arrived after a command armed the pause and was dropped.
    Discarded,
    /// The reading matched the current state.
    Unchanged,
    /// The reading moved the door to a new snapshot.
    Changed(DoorSnapshot),
    /// The sensor could not be read; state left untouched.
    Failed,
}

/// Periodically reads the contact sensor and applies it to the door.
pub struct Poller<D, N> {
    door: Arc<DoorService<N>>,
    client: D,
    interval: Option<Duration>,
}

impl<D, N> Poller<D, N>
where
    D: DeviceClient + 'static,
    N: StateNotifier + 'static,
{
    /// Create a poller. `interval == None` means a single immediate poll.
    pub fn new(door: Arc<DoorService<N>>, client: D, interval: Option<Duration>) -> Self {
        Self {
            door,
            client,
            interval,
        }
    }

    /// Run one refresh cycle.
    pub async fn poll_once(&self) -> PollOutcome {
        if self.door.is_paused() {
            tracing::debug!("poll skipped, door updates on hold");
            return PollOutcome::Skipped;
        }

        let closed = match self.client.read_sensor().await {
            Ok(closed) => closed,
            Err(err) => {
                tracing::warn!(%err, "sensor read failed, retrying next interval");
                return PollOutcome::Failed;
            }
        };
        tracing::trace!(closed, "sensor read");

        match self.door.apply_sensor(closed).await {
            SensorOutcome::Ignored => {
                tracing::debug!(closed, "sensor reading dropped, pause armed mid-read");
                PollOutcome::Discarded
            }
            SensorOutcome::Unchanged(_) => PollOutcome::Unchanged,
            SensorOutcome::Changed { to, .. } => PollOutcome::Changed(to),
        }
    }

    /// Start polling.
    ///
    /// With an interval, spawns the recurring loop and returns its handle;
    /// the first cycle runs immediately. Without one, polls exactly once
    /// inline and returns `None`.
    pub async fn start(self) -> Option<JoinHandle<()>> {
        match self.interval {
            Some(interval) => {
                tracing::info!(interval_secs = interval.as_secs_f64(), "door poller started");
                Some(tokio::spawn(self.run(interval)))
            }
            None => {
                tracing::info!("polling interval disabled, running a single poll");
                self.poll_once().await;
                None
            }
        }
    }

    async fn run(self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.poll_once().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_bus::InProcessEventBus;
    use crate::services::testing::StubDevice;
    use garage_domain::door::{DoorState, TargetState};

    fn door() -> Arc<DoorService<Arc<InProcessEventBus>>> {
        Arc::new(DoorService::new(Arc::new(InProcessEventBus::new(16))))
    }

    #[tokio::test]
    async fn should_apply_open_reading() {
        let door = door();
        let device = Arc::new(StubDevice::with_sensor(false));
        let poller = Poller::new(Arc::clone(&door), Arc::clone(&device), None);

        let outcome = poller.poll_once().await;

        assert_eq!(
            outcome,
            PollOutcome::Changed(DoorSnapshot::new(DoorState::Open, TargetState::Open))
        );
        assert_eq!(device.reads(), 1);
    }

    #[tokio::test]
    async fn should_report_unchanged_for_matching_reading() {
        let door = door();
        let poller = Poller::new(door, StubDevice::with_sensor(true), None);
        assert_eq!(poller.poll_once().await, PollOutcome::Unchanged);
    }

    #[tokio::test]
    async fn should_leave_state_untouched_when_read_fails() {
        let door = door();
        door.apply_sensor(false).await;
        let device = Arc::new(StubDevice::with_sensor(true));
        device.fail_reads(true);
        let poller = Poller::new(Arc::clone(&door), Arc::clone(&device), None);

        assert_eq!(poller.poll_once().await, PollOutcome::Failed);
        assert_eq!(door.snapshot(), DoorSnapshot::from_sensor(false));
        assert!(!door.is_paused());
    }

    #[tokio::test(start_paused = true)]
    async fn should_skip_device_call_while_paused() {
        let door = door();
        door.apply_toggle(Duration::from_secs(30)).await;
        let device = Arc::new(StubDevice::with_sensor(true));
        let poller = Poller::new(Arc::clone(&door), Arc::clone(&device), None);

        for _ in 0..3 {
            assert_eq!(poller.poll_once().await, PollOutcome::Skipped);
        }
        assert_eq!(device.reads(), 0);
        assert_eq!(door.current_state(), DoorState::Opening);
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_once_inline_without_interval() {
        let door = door();
        let device = Arc::new(StubDevice::with_sensor(false));
        let poller = Poller::new(Arc::clone(&door), Arc::clone(&device), None);

        let handle = poller.start().await;

        assert!(handle.is_none());
        assert_eq!(device.reads(), 1);
        assert_eq!(door.current_state(), DoorState::Open);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(device.reads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_on_every_tick() {
        let door = door();
        let device = Arc::new(StubDevice::with_sensor(true));
        let poller = Poller::new(door, Arc::clone(&device), Some(Duration::from_secs(1)));

        let handle = poller.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(3500)).await;
        handle.abort();

        // ticks at t=0, 1, 2, 3
        assert_eq!(device.reads(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_looping_after_failures() {
        let door = door();
        let device = Arc::new(StubDevice::with_sensor(false));
        device.fail_reads(true);
        let poller = Poller::new(
            Arc::clone(&door),
            Arc::clone(&device),
            Some(Duration::from_secs(1)),
        );

        let handle = poller.start().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        device.fail_reads(false);
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.abort();

        assert_eq!(device.reads(), 3);
        assert_eq!(door.current_state(), DoorState::Open);
    }
}
