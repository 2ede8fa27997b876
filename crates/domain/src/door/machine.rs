//! Door machine: the aggregate holding current/target state and the pause
//! window.
//!
//! Time is passed in explicitly so the machine stays free of clocks and
//! timers; the application layer supplies `Instant`s from its runtime.

use std::time::{Duration, Instant};

use super::state::{DoorSnapshot, DoorState, TargetState};

/// Result of feeding a sensor reading to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorOutcome {
    /// The pause window is active; the reading was discarded.
    Ignored,
    /// The reading matched the state already held.
    Unchanged(DoorSnapshot),
    /// The reading moved the door to a new snapshot.
    Changed { from: DoorSnapshot, to: DoorSnapshot },
}

/// Single garage door state machine.
///
/// `current` and `target` only ever change through [`apply_sensor`] or
/// [`apply_toggle`], and always together.
///
/// [`apply_sensor`]: Self::apply_sensor
/// [`apply_toggle`]: Self::apply_toggle
#[derive(Debug, Clone, Default)]
pub struct DoorMachine {
    snapshot: DoorSnapshot,
    paused_until: Option<Instant>,
}

impl DoorMachine {
    /// Create a machine in the conservative startup state `(Closed, Closed)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> DoorSnapshot {
        self.snapshot
    }

    #[must_use]
    pub fn current(&self) -> DoorState {
        self.snapshot.current
    }

    #[must_use]
    pub fn target(&self) -> TargetState {
        self.snapshot.target
    }

    /// Deadline of the pause window, if one was armed and not yet cleared.
    #[must_use]
    pub fn paused_until(&self) -> Option<Instant> {
        self.paused_until
    }

    /// Whether sensor-driven updates are suppressed at `now`.
    #[must_use]
    pub fn is_paused(&self, now: Instant) -> bool {
        self.paused_until.is_some_and(|until| now < until)
    }

    /// Apply a sensor reading unless the pause window is active.
    pub fn apply_sensor(&mut self, closed: bool, now: Instant) -> SensorOutcome {
        if self.is_paused(now) {
            return SensorOutcome::Ignored;
        }

        let from = self.snapshot;
        let to = DoorSnapshot::from_sensor(closed);
        if from == to {
            return SensorOutcome::Unchanged(to);
        }

        self.snapshot = to;
        SensorOutcome::Changed { from, to }
    }

    /// Apply the optimistic toggle transition and arm the pause window.
    ///
    /// Any previously armed window is replaced: the new deadline is
    /// `now + window`, never an extension of the old one.
    pub fn apply_toggle(&mut self, now: Instant, window: Duration) -> DoorSnapshot {
        self.snapshot = self.snapshot.toggled();
        self.paused_until = Some(now + window);
        self.snapshot
    }

    /// Clear the pause window if it has elapsed at `now`.
    ///
    /// Returns `true` when a window was cleared. A window re-armed after the
    /// caller scheduled this check is left in place.
    pub fn resume(&mut self, now: Instant) -> bool {
        match self.paused_until {
            Some(until) if now >= until => {
                self.paused_until = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(30);

    fn at(start: Instant, secs: u64) -> Instant {
        start + Duration::from_secs(secs)
    }

    #[test]
    fn should_start_closed_and_unpaused() {
        let machine = DoorMachine::new();
        assert_eq!(machine.current(), DoorState::Closed);
        assert_eq!(machine.target(), TargetState::Closed);
        assert!(machine.paused_until().is_none());
        assert!(!machine.is_paused(Instant::now()));
    }

    #[test]
    fn should_update_from_sensor_when_not_paused() {
        let mut machine = DoorMachine::new();
        let outcome = machine.apply_sensor(false, Instant::now());
        assert_eq!(
            outcome,
            SensorOutcome::Changed {
                from: DoorSnapshot::new(DoorState::Closed, TargetState::Closed),
                to: DoorSnapshot::new(DoorState::Open, TargetState::Open),
            }
        );
        assert_eq!(machine.current(), DoorState::Open);
    }

    #[test]
    fn should_report_unchanged_when_sensor_agrees() {
        let mut machine = DoorMachine::new();
        let outcome = machine.apply_sensor(true, Instant::now());
        assert_eq!(outcome, SensorOutcome::Unchanged(DoorSnapshot::default()));
    }

    #[test]
    fn should_ignore_any_sensor_reading_while_paused() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();
        let after_toggle = machine.apply_toggle(start, WINDOW);

        for (secs, reading) in [(0, true), (5, false), (29, true), (29, false)] {
            assert_eq!(
                machine.apply_sensor(reading, at(start, secs)),
                SensorOutcome::Ignored
            );
            assert_eq!(machine.snapshot(), after_toggle);
        }
    }

    #[test]
    fn should_accept_sensor_exactly_when_window_elapses() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();
        machine.apply_toggle(start, WINDOW);

        assert!(machine.is_paused(at(start, 29)));
        assert!(!machine.is_paused(at(start, 30)));
        assert!(matches!(
            machine.apply_sensor(false, at(start, 30)),
            SensorOutcome::Changed { .. }
        ));
    }

    #[test]
    fn should_rearm_window_instead_of_extending_it() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();
        machine.apply_toggle(start, WINDOW);
        machine.apply_toggle(at(start, 10), WINDOW);

        assert_eq!(machine.paused_until(), Some(at(start, 40)));
        assert!(machine.is_paused(at(start, 30)));
        assert!(machine.is_paused(at(start, 39)));
        assert!(!machine.is_paused(at(start, 40)));
    }

    #[test]
    fn should_not_resume_before_deadline() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();
        machine.apply_toggle(start, WINDOW);

        assert!(!machine.resume(at(start, 10)));
        assert!(machine.paused_until().is_some());
        assert!(machine.resume(at(start, 30)));
        assert!(machine.paused_until().is_none());
    }

    #[test]
    fn should_keep_rearmed_window_when_stale_resume_fires() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();
        machine.apply_toggle(start, WINDOW);
        machine.apply_toggle(at(start, 10), WINDOW);

        // the first timer would have fired at t=30
        assert!(!machine.resume(at(start, 30)));
        assert!(machine.is_paused(at(start, 30)));
    }

    #[test]
    fn should_walk_full_button_cycle() {
        let start = Instant::now();
        let mut machine = DoorMachine::new();

        let steps = [
            (DoorState::Opening, TargetState::Open),
            (DoorState::Stopped, TargetState::Closed),
            (DoorState::Closing, TargetState::Closed),
            (DoorState::Stopped, TargetState::Open),
            (DoorState::Opening, TargetState::Open),
        ];
        for (current, target) in steps {
            let snapshot = machine.apply_toggle(start, WINDOW);
            assert_eq!(snapshot, DoorSnapshot::new(current, target));
        }
    }
}
