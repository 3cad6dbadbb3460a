//! Interval bisection for a single coordinate axis.
//!
//! Each bit narrows the axis interval by half: a `1` keeps the upper half,
//! a `0` the lower. Bits are produced and consumed most-significant first.

/// Valid latitude interval.
pub const LATITUDE_RANGE: Interval = Interval::new(-90.0, 90.0);

/// Valid longitude interval.
pub const LONGITUDE_RANGE: Interval = Interval::new(-180.0, 180.0);

/// A closed `[min, max]` interval on one axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Width of the interval.
    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Half the width, the distance from the center to either edge.
    #[inline]
    pub fn half_span(&self) -> f64 {
        self.span() / 2.0
    }
}

/// Bisect `[left, right]` towards `value` for `bit_count` rounds.
///
/// Returns the chosen halves as a bitset, first round in the highest
/// position. A value sitting exactly on a midpoint goes to the upper half.
/// The caller guarantees `left <= value <= right` and `bit_count <= 64`.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::bisect::encode_axis;
///
/// // 37.7749 is in the upper half of [-90, 90], then the lower half of [0, 90]
/// assert_eq!(encode_axis(-90.0, 90.0, 37.7749, 2), 0b10);
/// ```
pub fn encode_axis(mut left: f64, mut right: f64, value: f64, bit_count: usize) -> u64 {
    debug_assert!(bit_count <= u64::BITS as usize);

    let mut bits: u64 = 0;
    for _ in 0..bit_count {
        let mid = (left + right) / 2.0;
        bits <<= 1;

        if value >= mid {
            bits |= 1;
            left = mid;
        } else {
            right = mid;
        }
    }

    bits
}

/// Replay the bisection recorded in the low `bit_count` bits of `bits`.
///
/// Returns the final interval; its [`Interval::center`] is the decoded
/// coordinate.
pub fn decode_axis(bits: u64, bit_count: usize, range: Interval) -> Interval {
    debug_assert!(bit_count <= u64::BITS as usize);

    let Interval {
        min: mut left,
        max: mut right,
    } = range;

    for i in 0..bit_count {
        let bit = (bits >> (bit_count - 1 - i)) & 1;
        let mid = (left + right) / 2.0;

        if bit == 1 {
            left = mid;
        } else {
            right = mid;
        }
    }

    Interval::new(left, right)
}
