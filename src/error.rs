//! Error types for geohash operations.

use thiserror::Error;

/// Geohash errors.
///
/// Every variant is an input validation failure. They are deterministic for
/// a given input, so retrying never helps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Latitude outside [-90, 90] or not finite.
    #[error("latitude out of range [-90.0, 90.0]: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180] or not finite.
    #[error("longitude out of range [-180.0, 180.0]: {0}")]
    LongitudeOutOfRange(f64),

    /// Precision outside 1..=12.
    #[error("precision out of range [1, 12]: {0}")]
    PrecisionOutOfRange(usize),

    /// Hash length outside 1..=12.
    #[error("invalid hash length, expected 1 to 12 characters: {0}")]
    InvalidHashLength(usize),

    /// Hash contains a character outside the geohash alphabet.
    #[error("invalid hash format, unexpected character: {0:?}")]
    InvalidHashFormat(char),

    /// Direction ordinal outside 0..8.
    #[error("direction out of range [0, 7]: {0}")]
    DirectionOutOfRange(usize),
}

/// Result type for geohash operations.
pub type Result<T> = std::result::Result<T, GeohashError>;
