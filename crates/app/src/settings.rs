//! Timing settings injected into the poller and command handler.

use std::time::Duration;

/// Door timing, resolved from configuration by the composition root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSettings {
    /// Length of the pause window armed after every toggle.
    pub opening_duration: Duration,
    /// Reserved. Closing transitions also use `opening_duration` for the
    /// pause window.
    pub closing_duration: Duration,
    /// Poll period; `None` means a single immediate poll and no schedule.
    pub polling_interval: Option<Duration>,
}

impl Default for DoorSettings {
    fn default() -> Self {
        Self::from_secs(30, 30, 1)
    }
}

impl DoorSettings {
    /// Build settings from whole seconds. A zero polling interval disables
    /// the recurring schedule.
    #[must_use]
    pub fn from_secs(opening: u64, closing: u64, polling: u64) -> Self {
        Self {
            opening_duration: Duration::from_secs(opening),
            closing_duration: Duration::from_secs(closing),
            polling_interval: (polling > 0).then(|| Duration::from_secs(polling)),
        }
    }
}
