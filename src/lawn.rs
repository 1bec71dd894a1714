//! Lawn bounds shared by every mower in a run.

use crate::error::{Error, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Rectangular simulation boundary, inclusive on both ends.
///
/// A position is on the lawn iff `0 <= x <= width && 0 <= y <= height`,
/// so a mower may legally sit exactly on the far corner.
///
/// The bounds are parsed once from the first input line, before any
/// mower is simulated, and never change for the rest of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lawn {
    width: i32,
    height: i32,
}

impl Lawn {
    /// Creates lawn bounds. Both dimensions are expected non-negative;
    /// [`Lawn::parse`] enforces that for file input.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Parses the first line of an input file: two whitespace-separated
    /// non-negative integers, width then height.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let width = Self::dimension(tokens.next(), line)?;
        let height = Self::dimension(tokens.next(), line)?;
        Ok(Self { width, height })
    }

    fn dimension(token: Option<&str>, line: &str) -> Result<i32> {
        let token = token.ok_or_else(|| {
            Error::MalformedLawnSpec(format!("expected two dimensions in {line:?}"))
        })?;
        let value: i32 = token
            .parse()
            .map_err(|_| Error::MalformedLawnSpec(format!("{token:?} is not an integer")))?;
        if value < 0 {
            return Err(Error::MalformedLawnSpec(format!("{token:?} is negative")));
        }
        Ok(value)
    }

    /// Easternmost column a mower may occupy.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Northernmost row a mower may occupy.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `position` lies on the lawn.
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.x <= self.width && position.y >= 0 && position.y <= self.height
    }
}
