//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod accessory;
pub mod command_handler;
pub mod door_service;
pub mod poller;

#[cfg(test)]
mod testing;
