//! Bridge configuration
//!
//! Loads configuration from a TOML file with the few parameters the bridge
//! needs; everything else (transform source, estimator) is injected at
//! construction.

use crate::error::{Error, Result};
use crate::sensors::CloudFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Construction-time configuration for a [`crate::bridge::SensorBridge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Number of sub-clouds one 2D sweep is split into (≥ 1)
    pub num_subdivisions_per_laser_scan: usize,
    /// Name of the tracking frame all data is expressed in
    pub tracking_frame: String,
    /// Maximum time a transform lookup may block, in seconds
    pub lookup_transform_timeout_sec: f64,
    /// Per-point time encoding of the configured 3D cloud source
    pub point_cloud_format: CloudFormat,
}

impl BridgeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.num_subdivisions_per_laser_scan < 1 {
            return Err(Error::InvalidParameter(
                "num_subdivisions_per_laser_scan must be at least 1".to_string(),
            ));
        }
        if self.tracking_frame.is_empty() {
            return Err(Error::InvalidParameter(
                "tracking_frame must not be empty".to_string(),
            ));
        }
        if !self.lookup_transform_timeout_sec.is_finite() || self.lookup_transform_timeout_sec < 0.0
        {
            return Err(Error::InvalidParameter(format!(
                "lookup_transform_timeout_sec must be non-negative, got {}",
                self.lookup_transform_timeout_sec
            )));
        }
        Ok(())
    }

    /// Lookup timeout as a `Duration`.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.lookup_transform_timeout_sec)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            num_subdivisions_per_laser_scan: 1,
            tracking_frame: "base_link".to_string(),
            lookup_transform_timeout_sec: 0.01,
            point_cloud_format: CloudFormat::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(BridgeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_subdivisions_rejected() {
        let config = BridgeConfig {
            num_subdivisions_per_laser_scan: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty_tracking_frame_rejected() {
        let config = BridgeConfig {
            tracking_frame: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_timeout_rejected() {
        let config = BridgeConfig {
            lookup_transform_timeout_sec: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_from_toml() {
        let config: BridgeConfig = toml::from_str(
            r#"
            num_subdivisions_per_laser_scan = 4
            tracking_frame = "imu_link"
            lookup_transform_timeout_sec = 0.2
            point_cloud_format = "velodyne"
            "#,
        )
        .unwrap();
        assert_eq!(config.num_subdivisions_per_laser_scan, 4);
        assert_eq!(config.tracking_frame, "imu_link");
        assert_eq!(config.point_cloud_format, CloudFormat::Velodyne);
        assert_eq!(config.lookup_timeout(), Duration::from_millis(200));
    }
}
