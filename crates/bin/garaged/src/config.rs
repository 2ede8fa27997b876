//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `garage.toml` in the working directory. Every field except the
//! controller connection has a sensible default, so the file is optional when
//! the `GARAGE_HC3_*` variables are set. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use garage_adapter_fibaro::FibaroConfig;
use garage_app::settings::DoorSettings;
use garage_domain::accessory::AccessoryInfo;

/// Pause window used when `door.opening_duration` is unset or `0`.
const DEFAULT_OPENING_DURATION_SECS: u64 = 30;

/// Upper bound for the pause window, in seconds.
const MAX_OPENING_DURATION_SECS: u64 = 24 * 60 * 60;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accessory descriptor.
    pub accessory: AccessoryConfig,
    /// HC3 controller connection.
    pub device: DeviceConfig,
    /// Door timing.
    pub door: DoorConfig,
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AccessoryConfig {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
}

/// Fibaro HC3 connection.
#[derive(Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Controller address (`192.168.1.10` or `http://host:port`).
    pub host: String,
    /// Pre-encoded Basic auth token.
    pub token: String,
    /// Relay device id.
    pub switch_id: String,
    /// Contact sensor device id.
    pub sensor_id: String,
    pub request_timeout_secs: u64,
}

/// Door timing, in seconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    /// Pause window armed after every toggle; `0` falls back to the default.
    pub opening_duration: u64,
    /// Accepted for compatibility, not used.
    pub closing_duration: u64,
    /// Poll period; `0` polls once at startup.
    pub polling_interval: u64,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `garage.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is incomplete.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("garage.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.fill_defaults();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GARAGE_HC3_HOST") {
            self.device.host = val;
        }
        if let Some(val) = var("GARAGE_HC3_TOKEN") {
            self.device.token = val;
        }
        if let Some(val) = var("GARAGE_SWITCH_ID") {
            self.device.switch_id = val;
        }
        if let Some(val) = var("GARAGE_SENSOR_ID") {
            self.device.sensor_id = val;
        }
        if let Some(val) = var("GARAGE_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("GARAGE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("GARAGE_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("GARAGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn fill_defaults(&mut self) {
        if self.door.opening_duration == 0 {
            self.door.opening_duration = DEFAULT_OPENING_DURATION_SECS;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("device.host", &self.device.host),
            ("device.token", &self.device.token),
            ("device.switch_id", &self.device.switch_id),
            ("device.sensor_id", &self.device.sensor_id),
            ("accessory.name", &self.accessory.name),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Validation(format!("{field} must not be empty")));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.door.opening_duration > MAX_OPENING_DURATION_SECS {
            return Err(ConfigError::Validation(format!(
                "door.opening_duration must be at most {MAX_OPENING_DURATION_SECS} seconds"
            )));
        }
        if self.device.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "device.request_timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn door_settings(&self) -> DoorSettings {
        DoorSettings::from_secs(
            self.door.opening_duration,
            self.door.closing_duration,
            self.door.polling_interval,
        )
    }

    #[must_use]
    pub fn fibaro(&self) -> FibaroConfig {
        FibaroConfig::new(
            self.device.host.clone(),
            self.device.token.clone(),
            self.device.switch_id.clone(),
            self.device.sensor_id.clone(),
        )
        .with_request_timeout(Duration::from_secs(self.device.request_timeout_secs))
    }

    /// # Errors
    ///
    /// Returns an error if the accessory name is blank.
    pub fn accessory_info(&self) -> Result<AccessoryInfo, ConfigError> {
        AccessoryInfo::new(
            self.accessory.name.clone(),
            self.accessory.manufacturer.clone(),
            self.accessory.model.clone(),
        )
        .map_err(|err| ConfigError::Validation(format!("accessory.{err}")))
    }
}

impl Default for AccessoryConfig {
    fn default() -> Self {
        Self {
            name: "Garage Door".to_string(),
            manufacturer: "Custom Manufacturer".to_string(),
            model: "Custom Model".to_string(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            switch_id: String::new(),
            sensor_id: String::new(),
            request_timeout_secs: 10,
        }
    }
}

impl std::fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("host", &self.host)
            .field("token", &"[REDACTED]")
            .field("switch_id", &self.switch_id)
            .field("sensor_id", &self.sensor_id)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            opening_duration: DEFAULT_OPENING_DURATION_SECS,
            closing_duration: 30,
            polling_interval: 1,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8581,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "garaged=info,garage=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
