//! Device port: the two calls the core makes against the remote device API.

use std::future::Future;

use garage_domain::error::TransportError;

/// Request/response access to the sensor and actuator devices.
///
/// Implementations keep no door state. Both calls are the only suspension
/// points of the core; everything else is synchronous.
pub trait DeviceClient: Send + Sync {
    /// Read the contact sensor. `true` means the door reports closed.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network/HTTP failure or when the
    /// payload cannot be interpreted.
    fn read_sensor(&self) -> impl Future<Output = Result<bool, TransportError>> + Send;

    /// Fire one actuator pulse. The physical door toggles on every pulse, so
    /// this is **not** idempotent on the device.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on network/HTTP failure.
    fn trigger_actuator(&self) -> impl Future<Output = Result<(), TransportError>> + Send;
}

impl<T: DeviceClient> DeviceClient for std::sync::Arc<T> {
    fn read_sensor(&self) -> impl Future<Output = Result<bool, TransportError>> + Send {
        (**self).read_sensor()
    }

    fn trigger_actuator(&self) -> impl Future<Output = Result<(), TransportError>> + Send {
        (**self).trigger_actuator()
    }
}
