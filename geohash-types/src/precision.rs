use serde::{Deserialize, Serialize};
use std::fmt;

/// Geohash precision levels.
///
/// Each level is a hash length in characters; every character contributes
/// five bits of combined latitude/longitude resolution. The approximate cell
/// size is given for cells near the equator.
///
/// # Examples
///
/// ```
/// use geohash_types::Precision;
///
/// assert_eq!(Precision::Street.len(), 6);
/// assert_eq!(Precision::Street.bits(), 30);
/// assert_eq!(Precision::from_len(12), Some(Precision::SubPoint));
/// assert_eq!(Precision::from_len(13), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Precision {
    /// ~5000 km × 5000 km
    Global = 1,
    /// ~1250 km × 625 km
    Country = 2,
    /// ~156 km × 156 km
    State = 3,
    /// ~39 km × 19.5 km
    Region = 4,
    /// ~4.9 km × 4.9 km
    City = 5,
    /// ~1.2 km × 0.61 km
    Street = 6,
    /// ~152 m × 152 m
    #[default]
    Building = 7,
    /// ~38 m × 19 m
    Block = 8,
    /// ~4.8 m × 4.8 m
    House = 9,
    /// ~1.2 m × 0.6 m
    Room = 10,
    /// ~15 cm × 15 cm
    Point = 11,
    /// ~1.9 cm × 1.9 cm
    SubPoint = 12,
}

impl Precision {
    /// Bits encoded by each base-32 character.
    pub const BITS_PER_CHAR: usize = 5;

    /// Shortest supported precision.
    pub const MIN: Precision = Precision::Global;

    /// Longest supported precision.
    pub const MAX: Precision = Precision::SubPoint;

    /// All levels in ascending order.
    pub const ALL: [Precision; 12] = [
        Precision::Global,
        Precision::Country,
        Precision::State,
        Precision::Region,
        Precision::City,
        Precision::Street,
        Precision::Building,
        Precision::Block,
        Precision::House,
        Precision::Room,
        Precision::Point,
        Precision::SubPoint,
    ];

    /// Hash length in characters.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self as usize
    }

    /// Total interleaved bits for this precision.
    pub const fn bits(self) -> usize {
        self.len() * Self::BITS_PER_CHAR
    }

    /// Bits assigned to the latitude axis (the smaller half).
    pub const fn latitude_bits(self) -> usize {
        self.bits() / 2
    }

    /// Bits assigned to the longitude axis.
    ///
    /// Longitude occupies the even bit positions, so it receives the extra
    /// bit whenever the total is odd.
    pub const fn longitude_bits(self) -> usize {
        self.bits().div_ceil(2)
    }

    /// Look up the level for a hash length, if it is within `1..=12`.
    pub const fn from_len(len: usize) -> Option<Precision> {
        if len < Self::MIN.len() || len > Self::MAX.len() {
            return None;
        }
        Some(Self::ALL[len - 1])
    }

    /// Human readable level name.
    pub const fn name(self) -> &'static str {
        match self {
            Precision::Global => "global",
            Precision::Country => "country",
            Precision::State => "state",
            Precision::Region => "region",
            Precision::City => "city",
            Precision::Street => "street",
            Precision::Building => "building",
            Precision::Block => "block",
            Precision::House => "house",
            Precision::Room => "room",
            Precision::Point => "point",
            Precision::SubPoint => "sub_point",
        }
    }
}

impl From<Precision> for usize {
    fn from(precision: Precision) -> Self {
        precision.len()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.len())
    }
}
