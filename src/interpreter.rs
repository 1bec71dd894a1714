//! Interpreter that drives a mower's instruction string over the lawn.
//!
//! The entry point is [`MowerSimulator`]. Construct it with the shared
//! [`Lawn`] bounds, then call [`MowerSimulator::run`] once per mower
//! with its starting [`MowerState`] and instruction string. The
//! per-symbol transition is exposed as [`step`] for callers that want
//! to drive a mower one command at a time.

use crate::lawn::Lawn;
use crate::mower::{Command, MowerState};

/// Applies one command to a mower state and returns the next state.
///
/// Turns rotate in place, an advance moves one unit along the current
/// heading, and [`Command::Ignore`] leaves the state untouched. An
/// advance whose destination falls outside `lawn` is rejected: the
/// mower holds its pre-move position and its heading is unaffected.
pub fn step(state: MowerState, command: Command, lawn: &Lawn) -> MowerState {
    match command {
        Command::TurnLeft => MowerState {
            heading: state.heading.turned_left(),
            ..state
        },
        Command::TurnRight => MowerState {
            heading: state.heading.turned_right(),
            ..state
        },
        Command::Advance => {
            let destination = state.position + state.heading.step();
            if lawn.contains(destination) {
                MowerState {
                    position: destination,
                    ..state
                }
            } else {
                state
            }
        }
        Command::Ignore => state,
    }
}

/// Drives full instruction strings through [`step`].
///
/// One simulator serves every mower of a batch; it only reads the lawn
/// bounds it was built with.
pub struct MowerSimulator {
    lawn: Lawn,
}

impl MowerSimulator {
    /// Creates a simulator for mowers sharing `lawn`.
    pub fn new(lawn: Lawn) -> Self {
        Self { lawn }
    }

    /// The bounds every advance is validated against.
    pub fn lawn(&self) -> &Lawn {
        &self.lawn
    }

    /// Runs `commands` left to right from `initial` and returns the
    /// final state.
    ///
    /// Each symbol's output state feeds the next symbol's input; no
    /// symbol is skipped or reordered, and an empty string returns
    /// `initial` unchanged. The fold is pure (no I/O, no shared mutable
    /// state), so independent mowers can run on any thread.
    pub fn run(&self, initial: MowerState, commands: &str) -> MowerState {
        commands
            .chars()
            .map(Command::from_symbol)
            .fold(initial, |state, command| step(state, command, &self.lawn))
    }
}
