//! # garage-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Expose the accessory characteristics as a small JSON API
//!   (`/api/door`, `/api/door/current`, `/api/door/target`, `/api/accessory`)
//! - Map "set target" requests onto the `Accessory` use-case (driving adapter)
//! - Push every door state change to subscribers over Server-Sent Events
//!   (`/api/events/stream`)
//!
//! ## Dependency rule
//! Depends on `garage-app` (for port traits and services) and `garage-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
