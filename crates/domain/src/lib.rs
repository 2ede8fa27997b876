//! # garage-domain
//!
//! Pure domain model for a single garage door exposed as an accessory.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define the **door states** (`DoorState`, `TargetState`) and their
//!   characteristic codes
//! - Define the **door machine**: the toggle transition table, the
//!   sensor-to-state rule, and the pause window that suppresses sensor
//!   updates after a command
//! - Define **door events** (state-change records pushed to observers)
//! - Define the **accessory information** exposed alongside the door
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod accessory;
pub mod door;
pub mod event;
