//! Door event: an immutable record of a state change, pushed to observers
//! so they see transitions without polling the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::door::DoorSnapshot;

/// UTC timestamp used for event times.
pub type Timestamp = DateTime<Utc>;

/// What caused a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    /// A poll of the contact sensor.
    Sensor,
    /// An optimistic transition after a successful actuator pulse.
    Command,
}

/// A door state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorEvent {
    pub from: DoorSnapshot,
    pub to: DoorSnapshot,
    pub source: ChangeSource,
    pub timestamp: Timestamp,
}

impl DoorEvent {
    /// Record a change happening now.
    #[must_use]
    pub fn new(from: DoorSnapshot, to: DoorSnapshot, source: ChangeSource) -> Self {
        Self {
            from,
            to,
            source,
            timestamp: Utc::now(),
        }
    }
}
