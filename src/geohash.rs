//! Geohash encoding, decoding and neighbor lookup.
//!
//! A geohash names a latitude/longitude cell with a short base-32 string.
//! Each axis is bisected independently, the two codes are interleaved
//! (longitude first) and the result is written five bits per character.
//! Longer hashes denote smaller cells.
//!
//! ```rust
//! use spatio_geohash::{Direction, Precision, decode, encode, neighbor};
//!
//! let hash = encode(37.7749, -122.4194, Precision::City.into())?;
//! assert_eq!(hash, "9q8yy");
//!
//! let (lat, lon) = decode(&hash)?;
//! assert!((lat - 37.770996).abs() < 1e-6);
//! assert!((lon + 122.409667).abs() < 1e-6);
//!
//! assert_eq!(neighbor(&hash, Direction::N)?, "9q8zn");
//! # Ok::<(), spatio_geohash::GeohashError>(())
//! ```

use crate::compute::base32::{from_base32, to_base32};
use crate::compute::bisect::{Interval, LATITUDE_RANGE, LONGITUDE_RANGE, decode_axis, encode_axis};
use crate::compute::interleave::{interlace, split};
use crate::compute::validation::{
    validate_coordinates, validate_direction, validate_hash_length, validate_precision,
};
use crate::error::Result;
use geo::Point;
use geohash_types::{BBox, Direction, Precision};

/// A decoded hash: its precision and the interval on each axis.
#[derive(Debug, Clone, Copy)]
struct Cell {
    precision: Precision,
    latitude: Interval,
    longitude: Interval,
}

impl Cell {
    fn bbox(&self) -> BBox {
        BBox::new(
            self.latitude.min,
            self.latitude.max,
            self.longitude.min,
            self.longitude.max,
        )
    }
}

/// Encode a coordinate as a geohash of `precision` characters.
///
/// # Errors
///
/// - [`GeohashError::LatitudeOutOfRange`] if latitude is outside [-90, 90]
/// - [`GeohashError::LongitudeOutOfRange`] if longitude is outside [-180, 180]
/// - [`GeohashError::PrecisionOutOfRange`] if precision is outside 1..=12
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{GeohashError, encode};
///
/// assert_eq!(encode(0.0, 0.0, 5)?, "s0000");
/// assert_eq!(encode(-90.0, -180.0, 5)?, "00000");
/// assert_eq!(encode(90.0, 180.0, 5)?, "zzzzz");
/// assert_eq!(encode(0.0, 0.0, 13), Err(GeohashError::PrecisionOutOfRange(13)));
/// # Ok::<(), GeohashError>(())
/// ```
///
/// [`GeohashError::LatitudeOutOfRange`]: crate::GeohashError::LatitudeOutOfRange
/// [`GeohashError::LongitudeOutOfRange`]: crate::GeohashError::LongitudeOutOfRange
/// [`GeohashError::PrecisionOutOfRange`]: crate::GeohashError::PrecisionOutOfRange
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String> {
    validate_coordinates(latitude, longitude)?;
    let precision = validate_precision(precision)?;
    Ok(encode_unchecked(latitude, longitude, precision))
}

/// Encode a `geo::Point` (x = longitude, y = latitude).
pub fn encode_point(point: &Point, precision: usize) -> Result<String> {
    encode(point.y(), point.x(), precision)
}

/// Encode a coordinate already known to be in range.
pub(crate) fn encode_unchecked(latitude: f64, longitude: f64, precision: Precision) -> String {
    let lon_bits = encode_axis(
        LONGITUDE_RANGE.min,
        LONGITUDE_RANGE.max,
        longitude,
        precision.longitude_bits(),
    );
    let lat_bits = encode_axis(
        LATITUDE_RANGE.min,
        LATITUDE_RANGE.max,
        latitude,
        precision.latitude_bits(),
    );

    let hash = to_base32(interlace(lat_bits, lon_bits, precision.bits()), precision.len());
    log::trace!("encoded ({}, {}) -> {}", latitude, longitude, hash);
    hash
}

fn decode_cell(hash: &str) -> Result<Cell> {
    let precision = validate_hash_length(hash)?;
    let (bits, _) = from_base32(hash)?;
    let (lat_bits, lon_bits) = split(bits, precision.bits());

    Ok(Cell {
        precision,
        latitude: decode_axis(lat_bits, precision.latitude_bits(), LATITUDE_RANGE),
        longitude: decode_axis(lon_bits, precision.longitude_bits(), LONGITUDE_RANGE),
    })
}

/// Decode a geohash to the `(latitude, longitude)` center of its cell.
///
/// # Errors
///
/// - [`GeohashError::InvalidHashLength`] if the hash is empty or longer than 12
/// - [`GeohashError::InvalidHashFormat`] on a character outside the alphabet
///
/// [`GeohashError::InvalidHashLength`]: crate::GeohashError::InvalidHashLength
/// [`GeohashError::InvalidHashFormat`]: crate::GeohashError::InvalidHashFormat
pub fn decode(hash: &str) -> Result<(f64, f64)> {
    let cell = decode_cell(hash)?;
    log::trace!("decoded {} -> {:?}", hash, cell);
    Ok((cell.latitude.center(), cell.longitude.center()))
}

/// Decode a geohash to the center of its cell as a `geo::Point`.
pub fn decode_point(hash: &str) -> Result<Point> {
    let (latitude, longitude) = decode(hash)?;
    Ok(Point::new(longitude, latitude))
}

/// Decode a geohash to its cell center and bounds.
///
/// The center is the same coordinate [`decode`] returns.
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{BBox, decode_bbox};
///
/// let (lat, lon, bbox) = decode_bbox("9")?;
/// assert_eq!((lat, lon), (22.5, -112.5));
/// assert_eq!(bbox, BBox::new(0.0, 45.0, -135.0, -90.0));
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn decode_bbox(hash: &str) -> Result<(f64, f64, BBox)> {
    let cell = decode_cell(hash)?;
    Ok((
        cell.latitude.center(),
        cell.longitude.center(),
        cell.bbox(),
    ))
}

/// Size of one cell at `precision`, as `(latitude degrees, longitude degrees)`.
///
/// ```rust
/// use spatio_geohash::{Precision, cell_dimensions};
///
/// assert_eq!(cell_dimensions(Precision::Global), (45.0, 45.0));
/// assert_eq!(cell_dimensions(Precision::Country), (5.625, 11.25));
/// ```
pub fn cell_dimensions(precision: Precision) -> (f64, f64) {
    let lat_cells = (1u64 << precision.latitude_bits()) as f64;
    let lon_cells = (1u64 << precision.longitude_bits()) as f64;
    (LATITUDE_RANGE.span() / lat_cells, LONGITUDE_RANGE.span() / lon_cells)
}

/// Hash of the cell one step from `cell`'s center in `direction`.
///
/// The center is shifted by one cell width, wrapped back into range and
/// re-encoded at the same precision.
fn step(cell: &Cell, direction: Direction) -> String {
    let (delta_lat, delta_lon) = cell_dimensions(cell.precision);
    let (lat_sign, lon_sign) = direction.unit_step();

    let (latitude, longitude) = wrap_coordinates(
        cell.latitude.center() + f64::from(lat_sign) * delta_lat,
        cell.longitude.center() + f64::from(lon_sign) * delta_lon,
    );

    encode_unchecked(latitude, longitude, cell.precision)
}

/// The adjacent hash in `direction`, at the same precision as `hash`.
///
/// Cells on the antimeridian wrap around in longitude. Cells on a pole wrap
/// to the opposite pole in latitude, without flipping longitude.
///
/// # Errors
///
/// Fails like [`decode`] when `hash` is invalid.
pub fn neighbor(hash: &str, direction: Direction) -> Result<String> {
    let cell = decode_cell(hash)?;
    Ok(step(&cell, direction))
}

/// Like [`neighbor`], with the direction given by its ordinal (`0` = N through `7` = NW).
///
/// The hash is checked before the direction.
///
/// # Errors
///
/// Fails like [`decode`] when `hash` is invalid, then with
/// [`GeohashError::DirectionOutOfRange`] for an ordinal of 8 or more.
///
/// [`GeohashError::DirectionOutOfRange`]: crate::GeohashError::DirectionOutOfRange
pub fn neighbor_at(hash: &str, direction: usize) -> Result<String> {
    let cell = decode_cell(hash)?;
    let direction = validate_direction(direction)?;
    Ok(step(&cell, direction))
}

/// All eight neighbors of `hash`, indexed by [`Direction::index`]
/// (N, NE, E, SE, S, SW, W, NW).
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::neighbors;
///
/// assert_eq!(neighbors("9")?, ["c", "f", "d", "6", "3", "2", "8", "b"]);
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
pub fn neighbors(hash: &str) -> Result<[String; 8]> {
    let cell = decode_cell(hash)?;
    Ok(Direction::ALL.map(|direction| step(&cell, direction)))
}

/// Wrap a coordinate back into [-90, 90) x [-180, 180).
///
/// Both axes wrap modulo their full span. Latitude therefore runs past a
/// pole onto the opposite pole rather than reflecting.
///
/// ```rust
/// use spatio_geohash::wrap_coordinates;
///
/// assert_eq!(wrap_coordinates(10.0, 190.0), (10.0, -170.0));
/// assert_eq!(wrap_coordinates(100.0, 0.0), (-80.0, 0.0));
/// ```
pub fn wrap_coordinates(latitude: f64, longitude: f64) -> (f64, f64) {
    (
        wrap_axis(latitude, LATITUDE_RANGE),
        wrap_axis(longitude, LONGITUDE_RANGE),
    )
}

fn wrap_axis(value: f64, range: Interval) -> f64 {
    let half = range.half_span();
    let full = range.span();

    let mut wrapped = (value + half) % full;
    if wrapped < 0.0 {
        wrapped += full;
    }
    wrapped - half
}

/// [`encode`], panicking on invalid input.
///
/// # Panics
///
/// Panics with the [`GeohashError`](crate::GeohashError) `encode` would return.
pub fn must_encode(latitude: f64, longitude: f64, precision: usize) -> String {
    encode(latitude, longitude, precision).unwrap_or_else(|err| panic!("{err}"))
}

/// [`decode`], panicking on an invalid hash.
///
/// # Panics
///
/// Panics with the [`GeohashError`](crate::GeohashError) `decode` would return.
pub fn must_decode(hash: &str) -> (f64, f64) {
    decode(hash).unwrap_or_else(|err| panic!("{err}"))
}

/// [`decode_bbox`], panicking on an invalid hash.
///
/// # Panics
///
/// Panics with the [`GeohashError`](crate::GeohashError) `decode_bbox` would return.
pub fn must_decode_bbox(hash: &str) -> (f64, f64, BBox) {
    decode_bbox(hash).unwrap_or_else(|err| panic!("{err}"))
}

/// [`neighbor`], panicking on an invalid hash.
///
/// # Panics
///
/// Panics with the [`GeohashError`](crate::GeohashError) `neighbor` would return.
pub fn must_neighbor(hash: &str, direction: Direction) -> String {
    neighbor(hash, direction).unwrap_or_else(|err| panic!("{err}"))
}

/// [`neighbors`], panicking on an invalid hash.
///
/// # Panics
///
/// Panics with the [`GeohashError`](crate::GeohashError) `neighbors` would return.
pub fn must_neighbors(hash: &str) -> [String; 8] {
    neighbors(hash).unwrap_or_else(|err| panic!("{err}"))
}
