//! Command handler: turns a user toggle request into one actuator pulse,
//! one optimistic transition, and a fresh pause window.

use std::sync::Arc;
use std::time::Duration;

use garage_domain::door::{DoorSnapshot, TargetState};
use garage_domain::error::CommandError;

use crate::pause::PauseTimer;
use crate::ports::{DeviceClient, StateNotifier};
use crate::services::door_service::DoorService;

/// Application service handling user toggle requests.
pub struct CommandHandler<D, N> {
    door: Arc<DoorService<N>>,
    client: D,
    pause_window: Duration,
    timer: PauseTimer,
}

impl<D, N> CommandHandler<D, N>
where
    D: DeviceClient,
    N: StateNotifier + 'static,
{
    /// Create a handler arming `pause_window` after every successful pulse.
    pub fn new(door: Arc<DoorService<N>>, client: D, pause_window: Duration) -> Self {
        Self {
            door,
            client,
            pause_window,
            timer: PauseTimer::new(),
        }
    }

    /// Handle a "set target state" request.
    ///
    /// `requested` is logged only: the next state comes from the transition
    /// table applied to the door's current state. Returns as soon as the
    /// optimistic transition is applied, without waiting for the window or
    /// for the door to finish moving.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the actuator pulse fails. The door
    /// state and the pause window are left exactly as they were.
    pub async fn toggle(&self, requested: TargetState) -> Result<DoorSnapshot, CommandError> {
        tracing::debug!(
            %requested,
            current = %self.door.current_state(),
            "toggle requested"
        );

        if let Err(err) = self.client.trigger_actuator().await {
            tracing::error!(%err, "actuator pulse failed, door state left untouched");
            return Err(CommandError(err));
        }

        let snapshot = self.door.apply_toggle(self.pause_window).await;

        let door = Arc::clone(&self.door);
        self.timer.arm(self.pause_window, move || {
            if door.resume() {
                tracing::debug!("pause window elapsed, sensor updates resumed");
            }
        });

        tracing::info!(
            current = %snapshot.current,
            target = %snapshot.target,
            pause_secs = self.pause_window.as_secs(),
            "door toggled, sensor updates on hold"
        );

        Ok(snapshot)
    }

    /// Whether a pause expiry is still scheduled.
    #[must_use]
    pub fn is_pause_armed(&self) -> bool {
        self.timer.is_armed()
    }
}
