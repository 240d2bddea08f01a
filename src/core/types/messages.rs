//! Inbound sensor message shapes.
//!
//! These mirror the upstream delivery format semantically: timestamps in
//! microseconds, frame ids as delivered (possibly with a legacy leading
//! slash), payloads already decoded from the wire.

use super::transform::Rigid3;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Odometry sample: the pose of `child_frame_id` as reported by the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdometryMessage {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Frame the reported pose is attached to
    pub child_frame_id: String,
    /// Reported pose
    pub pose: Rigid3,
}

/// Satellite fix quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavSatStatus {
    /// Receiver has no position solution
    NoFix,
    /// Receiver has a position solution
    Fix,
}

/// Satellite navigation fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavSatFixMessage {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Fix quality
    pub status: NavSatStatus,
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Altitude above the WGS84 ellipsoid in meters
    pub altitude: f64,
}

/// Inertial sample with per-channel covariance arrays.
///
/// A `-1` in element 0 of a covariance array means the device declares it
/// does not measure that quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImuMessage {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Sensor frame id
    pub frame_id: String,
    /// Linear acceleration in m/s², sensor frame
    pub linear_acceleration: Vector3<f64>,
    /// Angular velocity in rad/s, sensor frame
    pub angular_velocity: Vector3<f64>,
    /// Row-major 3x3 covariance of linear acceleration
    pub linear_acceleration_covariance: [f64; 9],
    /// Row-major 3x3 covariance of angular velocity
    pub angular_velocity_covariance: [f64; 9],
}

/// Single-echo 2D laser sweep in polar form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaserScanMessage {
    /// Timestamp of the first beam, microseconds since epoch
    pub timestamp_us: u64,
    /// Sensor frame id
    pub frame_id: String,
    /// Angle of the first beam in radians
    pub angle_min: f32,
    /// Angular distance between consecutive beams in radians
    pub angle_increment: f32,
    /// Seconds between consecutive beams
    pub time_increment: f32,
    /// Minimum valid range in meters
    pub range_min: f32,
    /// Maximum valid range in meters (exclusive)
    pub range_max: f32,
    /// Range per beam in meters
    pub ranges: Vec<f32>,
    /// Intensity per beam; may be empty
    pub intensities: Vec<f32>,
}

/// Multi-echo 2D laser sweep: each beam may return several echoes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiEchoLaserScanMessage {
    /// Timestamp of the first beam, microseconds since epoch
    pub timestamp_us: u64,
    /// Sensor frame id
    pub frame_id: String,
    /// Angle of the first beam in radians
    pub angle_min: f32,
    /// Angular distance between consecutive beams in radians
    pub angle_increment: f32,
    /// Seconds between consecutive beams
    pub time_increment: f32,
    /// Minimum valid range in meters
    pub range_min: f32,
    /// Maximum valid range in meters (exclusive)
    pub range_max: f32,
    /// Echo ranges per beam in meters
    pub ranges: Vec<Vec<f32>>,
    /// Echo intensities per beam; may be empty
    pub intensities: Vec<Vec<f32>>,
}

/// One decoded point of a vendor 3D cloud.
///
/// The meaning of `time` depends on the vendor format the bridge is
/// configured for; see `CloudFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    /// X in the sensor frame, meters
    pub x: f32,
    /// Y in the sensor frame, meters
    pub y: f32,
    /// Z in the sensor frame, meters
    pub z: f32,
    /// Vendor-native per-point time field
    pub time: f64,
}

impl RawPoint {
    /// Create a raw point.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, time: f64) -> Self {
        Self { x, y, z, time }
    }
}

/// Decoded vendor 3D point cloud, points in acquisition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloudMessage {
    /// Message timestamp in microseconds since epoch; its reference instant
    /// (first vs. last point) is vendor-defined
    pub timestamp_us: u64,
    /// Sensor frame id
    pub frame_id: String,
    /// Decoded points
    pub points: Vec<RawPoint>,
}

/// One observed landmark, already expressed in the tracking frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkEntry {
    /// Unique landmark id
    pub id: String,
    /// Pose of the landmark relative to the tracking frame
    pub tracking_from_landmark: Rigid3,
    /// Weight of the translational observation
    pub translation_weight: f64,
    /// Weight of the rotational observation
    pub rotation_weight: f64,
}

/// A list of landmark observations sharing one timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkListMessage {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Frame id of the observing sensor
    pub frame_id: String,
    /// Observed landmarks
    pub landmarks: Vec<LandmarkEntry>,
}
