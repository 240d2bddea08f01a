//! Error types for SetuBridge

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// SetuBridge error types
///
/// Only unrecoverable conditions are errors. Recoverable ones (a transform
/// lookup miss, a stale scan subdivision, a non-finite point) drop the
/// affected sample with a log message and are never surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The IMU declares it does not supply a channel the estimator requires.
    ///
    /// A `-1` in the first element of a covariance array is the conventional
    /// marker for "this device does not measure this quantity".
    #[error(
        "IMU data claims to not contain {channel} measurements \
         (covariance[0] = {value}); the estimator requires this channel"
    )]
    ImuChannelUnsupported {
        /// Human-readable channel name
        channel: &'static str,
        /// The sentinel value found in covariance[0]
        value: f64,
    },

    /// The IMU frame is displaced from the tracking frame.
    ///
    /// Linear acceleration cannot be expressed in the tracking frame by
    /// rotation alone when the frames are not colocated.
    #[error(
        "IMU frame '{frame_id}' must be colocated with the tracking frame: \
         translation norm {norm_m} m exceeds tolerance {tolerance_m} m"
    )]
    ImuNotColocated {
        /// The (canonicalized) IMU frame id
        frame_id: String,
        /// Measured sensor-to-tracking translation magnitude in meters
        norm_m: f64,
        /// Allowed tolerance in meters
        tolerance_m: f64,
    },
}
