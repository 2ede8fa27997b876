//! Fibaro HC3 connection settings.

use std::time::Duration;

use secrecy::SecretString;

/// Default per-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection settings for one HC3 controller and the two devices driving
/// the door.
#[derive(Debug, Clone)]
pub struct FibaroConfig {
    /// Controller address, `192.168.1.10` or a full base URL such as
    /// `http://hc3.local:8080`.
    pub host: String,
    /// Pre-encoded Basic auth token (`base64(user:password)`).
    pub token: SecretString,
    /// Device id of the relay wired to the opener button.
    pub switch_id: String,
    /// Device id of the door contact sensor.
    pub sensor_id: String,
    pub request_timeout: Duration,
}

impl FibaroConfig {
    pub fn new(
        host: impl Into<String>,
        token: impl Into<String>,
        switch_id: impl Into<String>,
        sensor_id: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            token: SecretString::from(token.into()),
            switch_id: switch_id.into(),
            sensor_id: sensor_id.into(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Base URL of the controller API, defaulting to plain `http`.
    pub(crate) fn base_url(&self) -> Result<url::Url, url::ParseError> {
        let host = self.host.trim().trim_end_matches('/');
        if host.contains("://") {
            url::Url::parse(&format!("{host}/"))
        } else {
            url::Url::parse(&format!("http://{host}/"))
        }
    }
}
