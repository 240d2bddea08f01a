//! Outbound payloads delivered to the trajectory estimator.

use super::messages::LandmarkEntry;
use super::point_cloud::TimedPointCloud;
use super::transform::Rigid3;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Odometry pose expressed in the tracking frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdometryData {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Tracking-frame pose
    pub pose: Rigid3,
}

/// Fixed-frame (satellite-derived) pose sample.
///
/// `pose` is `None` for a "no fix" sample; the timestamp is still delivered
/// so the estimator sees the gap in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedFramePoseData {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Translation-only local-frame pose, absent when there was no fix
    pub pose: Option<Rigid3>,
}

/// A point cloud in the tracking frame with its sensor origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedPointCloudData {
    /// Absolute time of the cloud's last point, microseconds since epoch
    pub timestamp_us: u64,
    /// Sensor origin in the tracking frame
    pub origin: Vector3<f32>,
    /// Points in the tracking frame, per-point times relative to the last
    pub points: TimedPointCloud,
}

/// Inertial sample rotated into the tracking frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImuData {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Linear acceleration in m/s², tracking frame
    pub linear_acceleration: Vector3<f64>,
    /// Angular velocity in rad/s, tracking frame
    pub angular_velocity: Vector3<f64>,
}

/// Landmark observations forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkData {
    /// Timestamp in microseconds since epoch
    pub timestamp_us: u64,
    /// Observed landmarks, tracking-frame poses
    pub landmarks: Vec<LandmarkEntry>,
}

/// One normalized measurement, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SensorData {
    /// Odometry pose
    Odometry(OdometryData),
    /// Satellite-derived fixed-frame pose (possibly absent)
    FixedFramePose(FixedFramePoseData),
    /// Rangefinder cloud
    TimedPointCloud(TimedPointCloudData),
    /// Inertial sample
    Imu(ImuData),
    /// Landmark observations
    Landmarks(LandmarkData),
}

impl SensorData {
    /// Timestamp of the wrapped measurement, microseconds since epoch.
    pub fn timestamp_us(&self) -> u64 {
        match self {
            SensorData::Odometry(d) => d.timestamp_us,
            SensorData::FixedFramePose(d) => d.timestamp_us,
            SensorData::TimedPointCloud(d) => d.timestamp_us,
            SensorData::Imu(d) => d.timestamp_us,
            SensorData::Landmarks(d) => d.timestamp_us,
        }
    }
}
