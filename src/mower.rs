//! Mower state and the instruction vocabulary of the flat-file format.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Compass heading of a mower.
///
/// Rotation is always by exactly 90 degrees, so the four cardinal
/// directions form a closed cycle in both turn directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Heading after a 90-degree counter-clockwise turn.
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Heading after a 90-degree clockwise turn.
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit grid vector of one advance along this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::new(0, 1),
            Self::East => IVec2::new(1, 0),
            Self::South => IVec2::new(0, -1),
            Self::West => IVec2::new(-1, 0),
        }
    }

    /// Parses the single-letter compass code used by the record format.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Single-letter compass code used by the record format.
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }
}

/// One instruction symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rotate 90 degrees counter-clockwise (`G`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`D`).
    TurnRight,
    /// Move one unit along the current heading (`A`).
    Advance,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

impl Command {
    /// Maps one symbol of an instruction string to its command.
    ///
    /// Symbols outside the `G`/`D`/`A` vocabulary map to
    /// [`Command::Ignore`]; they are skipped, never rejected.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'G' => Self::TurnLeft,
            'D' => Self::TurnRight,
            'A' => Self::Advance,
            _ => Self::Ignore,
        }
    }
}

/// The state of one mower: grid position plus heading.
///
/// States are plain values. Transitions produce a new state instead of
/// mutating in place, so independent mowers never share anything
/// mutable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MowerState {
    /// Current grid position (column, row).
    pub position: IVec2,

    /// Current compass heading.
    pub heading: Heading,
}

impl MowerState {
    /// Creates a state from raw record coordinates.
    ///
    /// The coordinates are taken as-is; only the advance transition
    /// checks positions against the lawn.
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}
