//! Timed point cloud types.

use super::transform::Rigid3f;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A single point with a per-point acquisition time.
///
/// `time` is in seconds relative to the acquisition of the cloud's LAST
/// point: always ≤ 0, and exactly 0 for the last point of a finished cloud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedPoint {
    /// Position in the sensor frame, meters
    pub position: Vector3<f32>,
    /// Seconds relative to the cloud's last point (≤ 0)
    pub time: f32,
}

impl TimedPoint {
    /// Create a new timed point.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, time: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            time,
        }
    }
}

/// Ordered sequence of timed points, earliest first.
pub type TimedPointCloud = Vec<TimedPoint>;

/// A timed point cloud with one intensity value per point.
///
/// Produced by scan conversion; intensities are dropped at dispatch since
/// the estimator consumes geometry and timing only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointCloudWithIntensities {
    /// The timed points
    pub points: TimedPointCloud,
    /// One intensity per point
    pub intensities: Vec<f32>,
}

/// Transform every point of a cloud, preserving per-point times.
pub fn transform_timed_point_cloud(points: &[TimedPoint], transform: &Rigid3f) -> TimedPointCloud {
    points
        .iter()
        .map(|p| TimedPoint {
            position: transform.transform_point(&p.position),
            time: p.time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::transform::Rigid3;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use std::f64::consts::PI;

    #[test]
    fn test_transform_cloud_preserves_times() {
        let cloud = vec![
            TimedPoint::new(1.0, 0.0, 0.0, -0.1),
            TimedPoint::new(0.0, 1.0, 0.0, 0.0),
        ];
        let transform = Rigid3::translation(nalgebra::Vector3::new(0.0, 0.0, 2.0)).cast_f32();

        let out = transform_timed_point_cloud(&cloud, &transform);

        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0].time, -0.1);
        assert_relative_eq!(out[1].time, 0.0);
        assert_relative_eq!(out[0].position.z, 2.0);
        assert_relative_eq!(out[1].position.z, 2.0);
    }

    #[test]
    fn test_transform_cloud_rotates_positions() {
        let cloud = vec![TimedPoint::new(1.0, 0.0, 0.0, 0.0)];
        let transform = Rigid3::rotation(UnitQuaternion::from_axis_angle(
            &nalgebra::Vector3::z_axis(),
            PI,
        ))
        .cast_f32();

        let out = transform_timed_point_cloud(&cloud, &transform);

        assert_relative_eq!(out[0].position.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(out[0].position.y, 0.0, epsilon = 1e-6);
    }
}
