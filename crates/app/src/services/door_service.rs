//! Door service: the single shared [`DoorMachine`] plus change
//! notification.
//!
//! The poller and the command handler are the only writers. Each performs
//! one read-modify-write inside a single lock scope; the lock is never held
//! across an `.await`. The notification is handed to the notifier inside
//! that scope, so observers see events in the order they were applied.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use garage_domain::door::{DoorMachine, DoorSnapshot, DoorState, SensorOutcome, TargetState};
use garage_domain::event::{ChangeSource, DoorEvent};

use crate::ports::StateNotifier;

/// Application service owning the door machine.
pub struct DoorService<N> {
    machine: Mutex<DoorMachine>,
    notifier: N,
}

impl<N: StateNotifier> DoorService<N> {
    /// Create a service with a fresh `(Closed, Closed)` machine.
    pub fn new(notifier: N) -> Self {
        Self {
            machine: Mutex::new(DoorMachine::new()),
            notifier,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DoorSnapshot {
        self.lock().snapshot()
    }

    #[must_use]
    pub fn current_state(&self) -> DoorState {
        self.lock().current()
    }

    #[must_use]
    pub fn target_state(&self) -> TargetState {
        self.lock().target()
    }

    /// Whether sensor-driven updates are currently suppressed.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.lock().is_paused(now())
    }

    /// Time left in the pause window, `None` when not paused.
    #[must_use]
    pub fn pause_remaining(&self) -> Option<Duration> {
        let now = now();
        self.lock()
            .paused_until()
            .and_then(|until| until.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }

    /// Feed a sensor reading to the machine and notify on change.
    ///
    /// The pause is re-checked under the lock, so a reading that lands after
    /// a command armed the window is discarded.
    pub async fn apply_sensor(&self, closed: bool) -> SensorOutcome {
        let (outcome, pending) = {
            let mut machine = self.lock();
            let outcome = machine.apply_sensor(closed, now());
            let pending = match outcome {
                SensorOutcome::Changed { from, to } => {
                    tracing::info!(
                        current = %to.current,
                        target = %to.target,
                        "door state updated from sensor"
                    );
                    Some(self.notifier.notify(DoorEvent::new(from, to, ChangeSource::Sensor)))
                }
                SensorOutcome::Ignored | SensorOutcome::Unchanged(_) => None,
            };
            (outcome, pending)
        };

        if let Some(pending) = pending {
            pending.await;
        }

        outcome
    }

    /// Apply the optimistic toggle transition, arm the pause window of
    /// length `window`, and notify observers.
    pub async fn apply_toggle(&self, window: Duration) -> DoorSnapshot {
        let (to, pending) = {
            let mut machine = self.lock();
            let from = machine.snapshot();
            let to = machine.apply_toggle(now(), window);
            let pending = self
                .notifier
                .notify(DoorEvent::new(from, to, ChangeSource::Command));
            (to, pending)
        };

        pending.await;
        to
    }

    /// Lift the pause window if it has elapsed. Returns `true` when cleared.
    pub fn resume(&self) -> bool {
        self.lock().resume(now())
    }

    fn lock(&self) -> MutexGuard<'_, DoorMachine> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runtime clock, so paused tokio time drives the pause window in tests.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}
