//! An encoder with a fixed precision.

use crate::compute::bisect::{LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::compute::validation::validate_precision;
use crate::config::Config;
use crate::error::Result;
use crate::geohash;
use geo::Point;
use geohash_types::{BBox, Precision};

/// Encodes coordinates at the precision chosen in its [`Config`].
///
/// # Examples
///
/// ```rust
/// use spatio_geohash::{Config, Encoder};
///
/// let encoder = Encoder::new(Config::default().with_precision(5))?;
/// assert_eq!(encoder.encode(37.7749, -122.4194)?, "9q8yy");
///
/// // Clamping keeps slightly out-of-range input usable
/// let clamping = Encoder::new(Config::default().with_clamp_coordinates(true))?;
/// assert_eq!(clamping.encode(90.5, 180.5)?, "zzzzzzz");
/// # Ok::<(), spatio_geohash::GeohashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    config: Config,
    precision: Precision,
}

impl Encoder {
    /// Create an encoder, validating the configuration.
    pub fn new(config: Config) -> Result<Self> {
        let precision = validate_precision(config.precision)?;
        Ok(Self { config, precision })
    }

    /// Create an encoder for `precision` with otherwise default settings.
    pub fn with_precision(precision: Precision) -> Self {
        Self {
            config: Config::default().with_precision(precision.len()),
            precision,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Encode a coordinate at the configured precision.
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<String> {
        if self.config.clamp_coordinates && latitude.is_finite() && longitude.is_finite() {
            let lat = latitude.clamp(LATITUDE_RANGE.min, LATITUDE_RANGE.max);
            let lon = longitude.clamp(LONGITUDE_RANGE.min, LONGITUDE_RANGE.max);
            if lat != latitude || lon != longitude {
                log::debug!(
                    "Clamped ({}, {}) to ({}, {})",
                    latitude,
                    longitude,
                    lat,
                    lon
                );
            }
            return Ok(geohash::encode_unchecked(lat, lon, self.precision));
        }

        geohash::encode(latitude, longitude, self.precision.len())
    }

    /// Encode a `geo::Point` (x = longitude, y = latitude).
    pub fn encode_point(&self, point: &Point) -> Result<String> {
        self.encode(point.y(), point.x())
    }

    /// Decode any valid hash; its length sets the precision.
    pub fn decode(&self, hash: &str) -> Result<(f64, f64)> {
        geohash::decode(hash)
    }

    pub fn decode_bbox(&self, hash: &str) -> Result<(f64, f64, BBox)> {
        geohash::decode_bbox(hash)
    }

    pub fn neighbors(&self, hash: &str) -> Result<[String; 8]> {
        geohash::neighbors(hash)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::with_precision(Precision::default())
    }
}
