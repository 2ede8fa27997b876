//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into these at the
//! port boundaries via `#[from]` or an explicit `into_domain()`.

/// Failure talking to the remote device API.
///
/// Raised by a `DeviceClient` for network failures, non-2xx responses and
/// payloads that cannot be interpreted. Callers treat it as "status
/// unknown" and leave the door state untouched.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (connection, DNS, timeout, …).
    #[error("device request failed")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device API answered with a non-success status code.
    #[error("device API responded with HTTP {status}")]
    Status {
        /// HTTP status code returned by the device API.
        status: u16,
    },

    /// The response body could not be interpreted.
    #[error("malformed device payload: {0}")]
    Payload(String),
}

/// A user-initiated toggle could not be applied because the actuator pulse
/// never reached the device.
#[derive(Debug, thiserror::Error)]
#[error("actuator pulse failed")]
pub struct CommandError(#[from] pub TransportError);

/// Domain invariant violations (configuration, request payloads, …).
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A value could not be mapped to a known target state.
    #[error("unknown door state {0:?}")]
    UnknownState(String),
}

/// Umbrella error crossing layer boundaries.
///
/// Sensor transport failures stay inside the poller, so only command and
/// validation failures reach callers.
#[derive(Debug, thiserror::Error)]
pub enum GarageError {
    #[error("command error")]
    Command(#[from] CommandError),

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error_with_code() {
        let err = TransportError::Status { status: 503 };
        assert_eq!(err.to_string(), "device API responded with HTTP 503");
    }

    #[test]
    fn should_keep_transport_error_as_command_error_source() {
        let err = CommandError::from(TransportError::Status { status: 401 });
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("device API responded with HTTP 401"));
    }

    #[test]
    fn should_convert_command_error_into_garage_error() {
        let err: GarageError = CommandError(TransportError::Payload("x".into())).into();
        assert!(matches!(err, GarageError::Command(_)));
    }

    #[test]
    fn should_display_empty_field_validation_error() {
        let err = ValidationError::Empty { field: "sensor_id" };
        assert_eq!(err.to_string(), "sensor_id must not be empty");
    }
}
