//! Line codecs for the flat mower record format.
//!
//! Input records are whitespace-delimited lines of the form
//! `<x> <y> <heading> <instructions>`, e.g. `1 2 N GAGAGAGAA`. Output
//! records are `<x> <y> <heading>` lines, e.g. `1 3 N`.

use crate::error::{Error, Result};
use crate::mower::{Heading, MowerState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One input record: a mower's starting state and instruction string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerRecord {
    /// Starting column.
    pub x: i32,
    /// Starting row.
    pub y: i32,
    /// Starting compass heading.
    pub heading: Heading,
    /// Instruction symbols, applied left to right.
    pub commands: String,
}

impl MowerRecord {
    /// Parses one record line.
    ///
    /// A line carrying only the three initial-state tokens denotes an
    /// empty instruction string. Fewer than three tokens, more than
    /// four, or unparsable tokens are a [`Error::MalformedMowerRecord`].
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();

        let x = Self::coordinate(tokens.next(), line)?;
        let y = Self::coordinate(tokens.next(), line)?;
        let heading = Self::heading(tokens.next(), line)?;
        let commands = tokens.next().unwrap_or("").to_string();

        if tokens.next().is_some() {
            return Err(Error::MalformedMowerRecord(format!(
                "trailing tokens in {line:?}"
            )));
        }

        Ok(Self {
            x,
            y,
            heading,
            commands,
        })
    }

    fn coordinate(token: Option<&str>, line: &str) -> Result<i32> {
        let token = token.ok_or_else(|| {
            Error::MalformedMowerRecord(format!("missing coordinate in {line:?}"))
        })?;
        token
            .parse()
            .map_err(|_| Error::MalformedMowerRecord(format!("{token:?} is not an integer")))
    }

    fn heading(token: Option<&str>, line: &str) -> Result<Heading> {
        let token = token
            .ok_or_else(|| Error::MalformedMowerRecord(format!("missing heading in {line:?}")))?;
        let mut codes = token.chars();
        match (codes.next(), codes.next()) {
            (Some(code), None) => Heading::from_code(code).ok_or_else(|| {
                Error::MalformedMowerRecord(format!("unknown heading {token:?}"))
            }),
            _ => Err(Error::MalformedMowerRecord(format!(
                "unknown heading {token:?}"
            ))),
        }
    }

    /// Starting state for simulation.
    pub fn initial_state(&self) -> MowerState {
        MowerState::new(self.x, self.y, self.heading)
    }
}

/// One output record: a mower's final position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerResult {
    /// Final column.
    pub x: i32,
    /// Final row.
    pub y: i32,
    /// Final compass heading.
    pub heading: Heading,
}

impl From<MowerState> for MowerResult {
    fn from(state: MowerState) -> Self {
        Self {
            x: state.position.x,
            y: state.position.y,
            heading: state.heading,
        }
    }
}

impl fmt::Display for MowerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading.code())
    }
}
