//! Compute layer for the geohash codec.
//!
//! The codec is built from three bit-level stages, leaves first:
//! - Interval bisection of a single axis
//! - Interleaving of the latitude and longitude codes
//! - Base-32 rendering of the interleaved code
//!
//! plus the range checks applied at every public entry point. The facade in
//! [`crate::geohash`] composes these stages.

pub mod base32;
pub mod bisect;
pub mod interleave;
pub mod validation;

pub use base32::{ALPHABET, BITS_PER_CHAR, MAX_HASH_LEN};
pub use bisect::{Interval, LATITUDE_RANGE, LONGITUDE_RANGE};
