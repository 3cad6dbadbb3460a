use serde::{Deserialize, Serialize};
use std::fmt;

/// Cardinal and intercardinal compass directions.
///
/// The ordinal order is fixed (`N` = 0 through `NW` = 7) and is used to
/// index neighbor arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Direction {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Ordinal position of this direction.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an ordinal, if it is within `0..8`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_types::Direction;
    ///
    /// assert_eq!(Direction::from_index(2), Some(Direction::E));
    /// assert_eq!(Direction::from_index(8), None);
    /// ```
    pub const fn from_index(index: usize) -> Option<Direction> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Sign of the (latitude, longitude) step for one cell in this direction.
    pub const fn unit_step(self) -> (i8, i8) {
        match self {
            Direction::N => (1, 0),
            Direction::NE => (1, 1),
            Direction::E => (0, 1),
            Direction::SE => (-1, 1),
            Direction::S => (-1, 0),
            Direction::SW => (-1, -1),
            Direction::W => (0, -1),
            Direction::NW => (1, -1),
        }
    }

    /// Compass abbreviation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
