//! Shared fixtures for handler tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::response::Response;
use http_body_util::BodyExt;

use garage_app::event_bus::InProcessEventBus;
use garage_app::ports::DeviceClient;
use garage_app::services::accessory::Accessory;
use garage_app::services::command_handler::CommandHandler;
use garage_app::services::door_service::DoorService;
use garage_domain::accessory::AccessoryInfo;
use garage_domain::error::TransportError;

use crate::state::AppState;

#[derive(Default)]
pub(crate) struct StubDevice {
    fail_pulses: AtomicBool,
    pulses: AtomicUsize,
}

impl StubDevice {
    pub(crate) fn fail_pulses(&self, fail: bool) {
        self.fail_pulses.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn pulses(&self) -> usize {
        self.pulses.load(Ordering::SeqCst)
    }
}

impl DeviceClient for StubDevice {
    async fn read_sensor(&self) -> Result<bool, TransportError> {
        Ok(true)
    }

    async fn trigger_actuator(&self) -> Result<(), TransportError> {
        self.pulses.fetch_add(1, Ordering::SeqCst);
        if self.fail_pulses.load(Ordering::SeqCst) {
            return Err(TransportError::Status { status: 503 });
        }
        Ok(())
    }
}

pub(crate) type TestState = AppState<Arc<StubDevice>, Arc<InProcessEventBus>>;

pub(crate) fn test_state() -> (TestState, Arc<StubDevice>) {
    let bus = Arc::new(InProcessEventBus::new(16));
    let device = Arc::new(StubDevice::default());
    let door = Arc::new(DoorService::new(Arc::clone(&bus)));
    let commands = CommandHandler::new(
        Arc::clone(&door),
        Arc::clone(&device),
        Duration::from_secs(30),
    );
    let info = AccessoryInfo::new("Garage Door", "Custom Manufacturer", "Custom Model").unwrap();
    let accessory = Arc::new(Accessory::new(info, door, commands));
    (AppState::new(accessory, bus), device)
}

pub(crate) async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
