//! # geohash-types
//!
//! Core value types for geohash encoding in Spatio.
//!
//! This crate provides the closed sets and derived geometry the encoder works with:
//!
//! - **Precision**: the twelve named hash lengths, `Global` through `SubPoint`
//! - **Direction**: the eight compass directions used for neighbor lookup
//! - **BBox**: the latitude/longitude rectangle a hash denotes
//!
//! All types are serializable with Serde. `BBox` converts into the `geo`
//! crate's `Rect` and `Point` primitives.
//!
//! ## Examples
//!
//! ```rust
//! use geohash_types::{BBox, Direction, Precision};
//!
//! assert_eq!(Precision::City.len(), 5);
//! assert_eq!(Direction::NE.opposite(), Direction::SW);
//!
//! let cell = BBox::new(0.0, 45.0, -135.0, -90.0);
//! assert_eq!(cell.center().y(), 22.5);
//! ```

pub mod bbox;
pub mod direction;
pub mod precision;

pub use bbox::BBox;
pub use direction::Direction;
pub use precision::Precision;
