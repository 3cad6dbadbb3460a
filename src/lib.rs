//! Geohash encoding for Spatio: coordinates to base-32 cells and back,
//! cell bounding boxes, and neighbor lookup.
//!
//! ```rust
//! use spatio_geohash::{Direction, Precision, decode_bbox, encode, neighbors};
//!
//! let hash = encode(37.7749, -122.4194, Precision::City.into())?;
//! assert_eq!(hash, "9q8yy");
//!
//! let (_lat, _lon, cell) = decode_bbox(&hash)?;
//! assert!(cell.min_latitude < 37.7749 && 37.7749 < cell.max_latitude);
//!
//! let around = neighbors(&hash)?;
//! assert_eq!(around[Direction::N.index()], "9q8zn");
//! # Ok::<(), spatio_geohash::GeohashError>(())
//! ```

pub mod compute;
pub mod config;
pub mod encoder;
pub mod error;
pub mod geohash;

pub use config::Config;
pub use encoder::Encoder;
pub use error::{GeohashError, Result};

pub use geohash::{
    cell_dimensions, decode, decode_bbox, decode_point, encode, encode_point, must_decode,
    must_decode_bbox, must_encode, must_neighbor, must_neighbors, neighbor, neighbor_at,
    neighbors, wrap_coordinates,
};

pub use geohash_types::{BBox, Direction, Precision};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, Encoder, GeohashError, Result};

    pub use crate::{BBox, Direction, Precision};

    pub use crate::{decode, decode_bbox, encode, neighbor, neighbors};

    pub use geo::{Point, Rect};
}
