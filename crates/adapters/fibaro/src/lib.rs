//! # garage-adapter-fibaro
//!
//! Device adapter for a Fibaro Home Center 3 controller.
//!
//! ## Responsibilities
//! - Read the door contact sensor (`GET /api/devices/{sensor_id}`)
//! - Pulse the opener relay (`POST /api/devices/{switch_id}/action/turnOn`)
//! - Implement the `DeviceClient` port from `garage-app`
//!
//! ## Dependency rule
//! Same as other adapters: depends on `garage-app` and `garage-domain`.

mod client;
pub mod config;
pub mod error;

pub use client::FibaroClient;
pub use config::FibaroConfig;
pub use error::FibaroError;
