//! Door: the states a garage door can be in and the machine that moves
//! between them.

mod machine;
mod state;

pub use machine::{DoorMachine, SensorOutcome};
pub use state::{DoorSnapshot, DoorState, TargetState};
