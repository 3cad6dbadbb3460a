use geo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// The latitude/longitude rectangle denoted by a geohash.
///
/// Bounds are in degrees. A decoded cell always satisfies
/// `min_latitude <= max_latitude` and `min_longitude <= max_longitude`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BBox {
    /// Southern edge
    pub min_latitude: f64,
    /// Northern edge
    pub max_latitude: f64,
    /// Western edge
    pub min_longitude: f64,
    /// Eastern edge
    pub max_longitude: f64,
}

impl BBox {
    /// Create a cell from its latitude and longitude bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_types::BBox;
    ///
    /// let cell = BBox::new(0.0, 45.0, -135.0, -90.0);
    /// assert_eq!(cell.height(), 45.0);
    /// assert_eq!(cell.width(), 45.0);
    /// ```
    pub const fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// Center of the cell as a `geo::Point` (x = longitude, y = latitude).
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_longitude + self.max_longitude) / 2.0,
            (self.min_latitude + self.max_latitude) / 2.0,
        )
    }

    /// Longitude span in degrees.
    pub fn width(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    /// Latitude span in degrees.
    pub fn height(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    /// Check if a point lies within this cell, edges included.
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= self.min_longitude
            && point.x() <= self.max_longitude
            && point.y() >= self.min_latitude
            && point.y() <= self.max_latitude
    }

    /// Convert to a `geo::Rect`.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.min_longitude, y: self.min_latitude },
            geo::coord! { x: self.max_longitude, y: self.max_latitude },
        )
    }
}

impl From<BBox> for Rect {
    fn from(bbox: BBox) -> Self {
        bbox.to_rect()
    }
}
