//! Configuration for the configured [`Encoder`](crate::Encoder).
//!
//! The free functions in [`crate::geohash`] take every setting per call and
//! need no configuration. `Config` only captures defaults for callers that
//! encode many points the same way.
use crate::compute::validation::validate_precision;
use crate::error::Result;
use serde::de::Error;
use serde::{Deserialize, Serialize};

/// Encoder configuration
///
/// Serializable so it can be embedded in a larger JSON or TOML settings file.
///
/// # Example
///
/// ```rust
/// use spatio_geohash::Config;
///
/// // Create default config
/// let config = Config::default();
/// assert_eq!(config.precision, 7);
///
/// // Load from JSON
/// let json = r#"{
///     "precision": 9,
///     "clamp_coordinates": true
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.precision, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geohash length in characters (1-12, default: 7)
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    /// Clamp out-of-range coordinates into range instead of rejecting them.
    /// Non-finite coordinates are always rejected.
    #[serde(default)]
    pub clamp_coordinates: bool,
}

impl Config {
    const fn default_precision() -> usize {
        7
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_clamp_coordinates(mut self, clamp: bool) -> Self {
        self.clamp_coordinates = clamp;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_precision(self.precision)?;
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            clamp_coordinates: false,
        }
    }
}
