//! # garage-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceClient`: read the contact sensor, pulse the actuator
//!   - `StateNotifier`: push door state changes to observers
//! - Define **driving/inbound** use-case structs:
//!   - `DoorService`: the shared, lock-guarded door machine
//!   - `Poller`: periodic sensor refresh, skipped while paused
//!   - `CommandHandler`: actuator pulse, optimistic transition, pause window
//!   - `Accessory`: the get/set/identify surface an accessory bridge calls
//! - Provide **in-process infrastructure** (event bus, pause timer) that
//!   doesn't need IO
//!
//! ## Dependency rule
//! Depends on `garage-domain` only (plus `tokio` for tasks, timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod pause;
pub mod ports;
pub mod services;
pub mod settings;
