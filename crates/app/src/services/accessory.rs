//! Accessory: the get/set/identify surface an accessory bridge calls.
//!
//! Reads go straight to the shared door state; writes are routed through the
//! [`CommandHandler`]. State changes reach observers through the notifier the
//! [`DoorService`] was built with.

use std::sync::Arc;

use garage_domain::accessory::AccessoryInfo;
use garage_domain::door::{DoorSnapshot, DoorState, TargetState};
use garage_domain::error::CommandError;

use crate::ports::{DeviceClient, StateNotifier};
use crate::services::command_handler::CommandHandler;
use crate::services::door_service::DoorService;

/// Exposed garage door accessory.
pub struct Accessory<D, N> {
    info: AccessoryInfo,
    door: Arc<DoorService<N>>,
    commands: CommandHandler<D, N>,
}

impl<D, N> Accessory<D, N>
where
    D: DeviceClient,
    N: StateNotifier + 'static,
{
    pub fn new(
        info: AccessoryInfo,
        door: Arc<DoorService<N>>,
        commands: CommandHandler<D, N>,
    ) -> Self {
        tracing::info!(
            name = %info.name,
            manufacturer = %info.manufacturer,
            model = %info.model,
            "garage door accessory ready"
        );
        Self {
            info,
            door,
            commands,
        }
    }

    #[must_use]
    pub fn info(&self) -> &AccessoryInfo {
        &self.info
    }

    /// Current door state as last set by the sensor or a command.
    #[must_use]
    pub fn current_state(&self) -> DoorState {
        let state = self.door.current_state();
        tracing::debug!(%state, "get current door state");
        state
    }

    /// Target door state as last set by the sensor or a command.
    #[must_use]
    pub fn target_state(&self) -> TargetState {
        let state = self.door.target_state();
        tracing::debug!(%state, "get target door state");
        state
    }

    #[must_use]
    pub fn snapshot(&self) -> DoorSnapshot {
        self.door.snapshot()
    }

    /// Whole seconds left before sensor updates resume, rounded up. `None`
    /// when not paused.
    #[must_use]
    pub fn pause_remaining_secs(&self) -> Option<u64> {
        self.door
            .pause_remaining()
            .map(|left| left.as_secs() + u64::from(left.subsec_nanos() > 0))
    }

    /// Handle a user "set target" request.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the actuator could not be pulsed.
    pub async fn set_target(&self, requested: TargetState) -> Result<DoorSnapshot, CommandError> {
        self.commands.toggle(requested).await
    }

    /// Identify request from the bridge. Nothing to blink, so it only logs.
    pub fn identify(&self) {
        tracing::info!(name = %self.info.name, "identify requested");
    }
}
