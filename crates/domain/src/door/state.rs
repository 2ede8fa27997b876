//! Door states: what the door is doing and where it is heading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Physical or reported state of the door.
///
/// The sensor only ever yields the two resting states; the transitional
/// states are produced exclusively by toggle commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorState {
    Open,
    Closed,
    Opening,
    Closing,
    Stopped,
}

/// Desired end state of the door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetState {
    Open,
    Closed,
}

impl DoorState {
    /// Numeric value of the `CurrentDoorState` characteristic.
    #[must_use]
    pub fn characteristic_code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
            Self::Opening => 2,
            Self::Closing => 3,
            Self::Stopped => 4,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Closing => "closing",
            Self::Stopped => "stopped",
        }
    }
}

impl TargetState {
    /// Numeric value of the `TargetDoorState` characteristic.
    #[must_use]
    pub fn characteristic_code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Closed => 1,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("open") {
            Ok(Self::Open)
        } else if s.eq_ignore_ascii_case("closed") {
            Ok(Self::Closed)
        } else {
            Err(ValidationError::UnknownState(s.to_string()))
        }
    }
}

/// The `(current, target)` pair observers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSnapshot {
    pub current: DoorState,
    pub target: TargetState,
}

impl Default for DoorSnapshot {
    /// Conservative startup value; the first poll reports the truth.
    fn default() -> Self {
        Self::new(DoorState::Closed, TargetState::Closed)
    }
}

impl DoorSnapshot {
    #[must_use]
    pub fn new(current: DoorState, target: TargetState) -> Self {
        Self { current, target }
    }

    /// Map a contact-sensor reading to a resting snapshot.
    ///
    /// `closed == true` means the contact reports the door closed.
    #[must_use]
    pub fn from_sensor(closed: bool) -> Self {
        if closed {
            Self::new(DoorState::Closed, TargetState::Closed)
        } else {
            Self::new(DoorState::Open, TargetState::Open)
        }
    }

    /// Next snapshot after one press of the single-button actuator.
    ///
    /// Only `current` selects the row; `target` is consulted solely to
    /// resume from [`DoorState::Stopped`].
    #[must_use]
    pub fn toggled(self) -> Self {
        match self.current {
            DoorState::Open => Self::new(DoorState::Closing, TargetState::Closed),
            DoorState::Closed => Self::new(DoorState::Opening, TargetState::Open),
            DoorState::Opening => Self::new(DoorState::Stopped, TargetState::Closed),
            DoorState::Closing => Self::new(DoorState::Stopped, TargetState::Open),
            DoorState::Stopped => {
                let current = match self.target {
                    TargetState::Open => DoorState::Opening,
                    TargetState::Closed => DoorState::Closing,
                };
                Self::new(current, self.target)
            }
        }
    }
}
