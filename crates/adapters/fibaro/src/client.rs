//! HTTP client for the HC3 REST API.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use url::Url;

use garage_app::ports::DeviceClient;
use garage_domain::error::TransportError;

use crate::config::FibaroConfig;
use crate::error::FibaroError;

const FIBARO_VERSION_HEADER: &str = "X-Fibaro-Version";

#[derive(Deserialize)]
struct DevicePayload {
    properties: DeviceProperties,
}

#[derive(Deserialize)]
struct DeviceProperties {
    value: serde_json::Value,
}

/// Talks to the contact sensor and the opener relay on one HC3 controller.
///
/// Every request carries `Authorization: Basic {token}` and
/// `X-Fibaro-Version: 2` as default headers.
#[derive(Debug, Clone)]
pub struct FibaroClient {
    http: reqwest::Client,
    base_url: Url,
    switch_id: String,
    sensor_id: String,
}

impl FibaroClient {
    /// Build a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`FibaroError`] when the host is not a valid address, the
    /// token cannot be sent as a header, or the HTTP client fails to build.
    pub fn new(config: &FibaroConfig) -> Result<Self, FibaroError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Basic {}", config.token.expose_secret()))
            .map_err(FibaroError::InvalidHeader)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(FIBARO_VERSION_HEADER, HeaderValue::from_static("2"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;
        let base_url = config.base_url().map_err(FibaroError::InvalidUrl)?;

        Ok(Self {
            http,
            base_url,
            switch_id: config.switch_id.clone(),
            sensor_id: config.sensor_id.clone(),
        })
    }

    fn device_url(&self, suffix: &str) -> Result<Url, FibaroError> {
        self.base_url
            .join(&format!("api/devices/{suffix}"))
            .map_err(FibaroError::InvalidUrl)
    }

    /// Read the contact sensor. `true` means the door reports closed.
    ///
    /// HC3 reports a truthy `properties.value` while the contact is open,
    /// so the raw value is inverted here.
    ///
    /// # Errors
    ///
    /// Returns [`FibaroError`] on network failure, non-2xx status, or a
    /// payload whose `properties.value` is not boolean-like.
    pub async fn sensor_closed(&self) -> Result<bool, FibaroError> {
        let url = self.device_url(&self.sensor_id)?;
        tracing::trace!(%url, "reading door sensor");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FibaroError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let payload: DevicePayload = serde_json::from_slice(&body).map_err(FibaroError::Payload)?;
        let open = parse_value(payload.properties.value)?;
        Ok(!open)
    }

    /// Pulse the opener relay once.
    ///
    /// # Errors
    ///
    /// Returns [`FibaroError`] on network failure or non-2xx status.
    pub async fn turn_on(&self) -> Result<(), FibaroError> {
        let url = self.device_url(&format!("{}/action/turnOn", self.switch_id))?;
        tracing::debug!(%url, "pulsing opener relay");

        let resp = self
            .http
            .post(url)
            .json(&serde_json::json!({ "args": [{}, {}], "delay": 0 }))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FibaroError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl DeviceClient for FibaroClient {
    async fn read_sensor(&self) -> Result<bool, TransportError> {
        self.sensor_closed().await.map_err(FibaroError::into_domain)
    }

    async fn trigger_actuator(&self) -> Result<(), TransportError> {
        self.turn_on().await.map_err(FibaroError::into_domain)
    }
}

/// Interpret HC3's boolean-like `properties.value`.
fn parse_value(value: serde_json::Value) -> Result<bool, FibaroError> {
    use serde_json::Value;

    match &value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(n) if n.as_u64() == Some(0) => Ok(false),
        Value::Number(n) if n.as_u64() == Some(1) => Ok(true),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(FibaroError::InvalidValue(value)),
        },
        _ => Err(FibaroError::InvalidValue(value)),
    }
}
