//! Validation for geohash inputs.

use crate::compute::bisect::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error::{GeohashError, Result};
use geohash_types::{Direction, Precision};

/// Validates a latitude lies within [-90.0, 90.0].
///
/// NaN and infinities are rejected as out of range.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_latitude;
///
/// assert!(validate_latitude(40.7128).is_ok());
/// assert!(validate_latitude(90.0).is_ok());
/// assert!(validate_latitude(95.0).is_err());
/// assert!(validate_latitude(f64::NAN).is_err());
/// ```
pub fn validate_latitude(latitude: f64) -> Result<()> {
    if !latitude.is_finite() {
        log::warn!("Rejecting non-finite latitude: {}", latitude);
        return Err(GeohashError::LatitudeOutOfRange(latitude));
    }

    if !(LATITUDE_RANGE.min..=LATITUDE_RANGE.max).contains(&latitude) {
        log::debug!("Latitude out of range [-90.0, 90.0]: {}", latitude);
        return Err(GeohashError::LatitudeOutOfRange(latitude));
    }

    Ok(())
}

/// Validates a longitude lies within [-180.0, 180.0].
///
/// NaN and infinities are rejected as out of range.
pub fn validate_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        log::warn!("Rejecting non-finite longitude: {}", longitude);
        return Err(GeohashError::LongitudeOutOfRange(longitude));
    }

    if !(LONGITUDE_RANGE.min..=LONGITUDE_RANGE.max).contains(&longitude) {
        log::debug!("Longitude out of range [-180.0, 180.0]: {}", longitude);
        return Err(GeohashError::LongitudeOutOfRange(longitude));
    }

    Ok(())
}

/// Validates a coordinate pair, latitude first.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)
}

/// Resolves a requested hash length to its [`Precision`] level.
///
/// # Examples
///
/// ```
/// use spatio_geohash::compute::validation::validate_precision;
/// use spatio_geohash::{GeohashError, Precision};
///
/// assert_eq!(validate_precision(5), Ok(Precision::City));
/// assert_eq!(validate_precision(0), Err(GeohashError::PrecisionOutOfRange(0)));
/// assert_eq!(validate_precision(13), Err(GeohashError::PrecisionOutOfRange(13)));
/// ```
pub fn validate_precision(precision: usize) -> Result<Precision> {
    Precision::from_len(precision).ok_or_else(|| {
        log::debug!("Precision out of range [1, 12]: {}", precision);
        GeohashError::PrecisionOutOfRange(precision)
    })
}

/// Validates a hash is 1 to 12 bytes long and returns its precision.
///
/// Only the length is checked; the alphabet is checked while decoding.
pub fn validate_hash_length(hash: &str) -> Result<Precision> {
    let len = hash.len();
    Precision::from_len(len).ok_or_else(|| {
        log::debug!("Hash length out of range [1, 12]: {}", len);
        GeohashError::InvalidHashLength(len)
    })
}

/// Resolves a direction ordinal (`0` = N through `7` = NW).
pub fn validate_direction(index: usize) -> Result<Direction> {
    Direction::from_index(index).ok_or_else(|| {
        log::debug!("Direction out of range [0, 7]: {}", index);
        GeohashError::DirectionOutOfRange(index)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        // NYC, London, Tokyo
        assert!(validate_coordinates(40.7128, -74.0060).is_ok());
        assert!(validate_coordinates(51.5074, -0.1278).is_ok());
        assert!(validate_coordinates(35.6895, 139.6917).is_ok());

        // Edge cases
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
        assert!(validate_coordinates(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert_eq!(
            validate_latitude(90.1),
            Err(GeohashError::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            validate_latitude(-91.0),
            Err(GeohashError::LatitudeOutOfRange(-91.0))
        );
    }

    #[test]
    fn test_invalid_longitude() {
        assert_eq!(
            validate_longitude(180.1),
            Err(GeohashError::LongitudeOutOfRange(180.1))
        );
        assert_eq!(
            validate_longitude(-200.0),
            Err(GeohashError::LongitudeOutOfRange(-200.0))
        );
    }

    #[test]
    fn test_latitude_checked_before_longitude() {
        assert_eq!(
            validate_coordinates(91.0, 181.0),
            Err(GeohashError::LatitudeOutOfRange(91.0))
        );
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(matches!(
            validate_latitude(f64::NAN),
            Err(GeohashError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            validate_longitude(f64::NAN),
            Err(GeohashError::LongitudeOutOfRange(_))
        ));
        assert!(validate_latitude(f64::INFINITY).is_err());
        assert!(validate_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(validate_precision(1), Ok(Precision::Global));
        assert_eq!(validate_precision(12), Ok(Precision::SubPoint));
        assert!(validate_precision(0).is_err());
        assert!(validate_precision(13).is_err());
    }

    #[test]
    fn test_hash_length_bounds() {
        assert_eq!(validate_hash_length("9"), Ok(Precision::Global));
        assert_eq!(validate_hash_length("9q8yyk8ytpxr"), Ok(Precision::SubPoint));
        assert_eq!(
            validate_hash_length(""),
            Err(GeohashError::InvalidHashLength(0))
        );
        assert_eq!(
            validate_hash_length("9q8yyk8ytpxrs"),
            Err(GeohashError::InvalidHashLength(13))
        );
    }

    #[test]
    fn test_direction_bounds() {
        assert_eq!(validate_direction(0), Ok(Direction::N));
        assert_eq!(validate_direction(7), Ok(Direction::NW));
        assert_eq!(
            validate_direction(8),
            Err(GeohashError::DirectionOutOfRange(8))
        );
    }
}
