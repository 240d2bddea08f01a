//! Vendor 3D point-cloud normalization.
//!
//! Each supported vendor encodes per-point acquisition time differently;
//! normalization rewrites all of them into one convention: seconds relative
//! to the cloud's LAST point (≤ 0, exactly 0 for the last point), plus an
//! anchor timestamp equal to the absolute time of that last point.

use crate::core::time::shift_us;
use crate::core::types::{PointCloudMessage, TimedPoint, TimedPointCloud};
use serde::{Deserialize, Serialize};

/// Per-point time encoding of the configured cloud source.
///
/// The format is fixed per deployment, so it is a configuration tag rather
/// than something sniffed from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudFormat {
    /// Per-point `t` in nanoseconds from message start; the message stamp
    /// marks the FIRST point
    Ouster,
    /// Per-point `time` in seconds from the first point; the message stamp
    /// marks the FIRST point
    Velodyne,
    /// Per-point absolute timestamp in seconds; the message stamp marks the
    /// LAST point
    Robosense,
    /// No usable per-point time; every point gets relative time 0
    Generic,
}

/// Normalize a decoded vendor cloud.
///
/// Returns the canonical cloud and its anchor time in microseconds. Points
/// with non-finite coordinates are silently dropped. The reference time is
/// taken from the raw cloud's final point before any filtering. An empty
/// input yields an empty cloud anchored at the message stamp.
pub fn normalize_point_cloud(
    msg: &PointCloudMessage,
    format: CloudFormat,
) -> (TimedPointCloud, u64) {
    let Some(last) = msg.points.last() else {
        return (Vec::new(), msg.timestamp_us);
    };

    let rel_time_last = match format {
        CloudFormat::Ouster => last.time * 1e-9,
        CloudFormat::Velodyne | CloudFormat::Robosense => last.time,
        CloudFormat::Generic => 0.0,
    };

    let mut points = TimedPointCloud::with_capacity(msg.points.len());
    for point in &msg.points {
        if !(point.x.is_finite() && point.y.is_finite() && point.z.is_finite()) {
            continue;
        }
        let relative_time = match format {
            CloudFormat::Ouster => (point.time * 1e-9 - rel_time_last) as f32,
            CloudFormat::Velodyne | CloudFormat::Robosense => (point.time - rel_time_last) as f32,
            CloudFormat::Generic => 0.0,
        };
        points.push(TimedPoint::new(point.x, point.y, point.z, relative_time));
    }

    let anchor_us = match format {
        // Stamp marks the first point; shift forward to the last.
        CloudFormat::Ouster | CloudFormat::Velodyne => shift_us(msg.timestamp_us, rel_time_last),
        // Stamp already marks the last point.
        CloudFormat::Robosense | CloudFormat::Generic => msg.timestamp_us,
    };
    (points, anchor_us)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RawPoint;
    use approx::assert_relative_eq;

    fn cloud(timestamp_us: u64, points: Vec<RawPoint>) -> PointCloudMessage {
        PointCloudMessage {
            timestamp_us,
            frame_id: "lidar".to_string(),
            points,
        }
    }

    #[test]
    fn test_ouster_nanosecond_offsets() {
        // Last native offset 0.09 s; stamp T = 2 s.
        let msg = cloud(
            2_000_000,
            vec![
                RawPoint::new(1.0, 0.0, 0.0, 0.0),
                RawPoint::new(0.0, 1.0, 0.0, 45_000_000.0),
                RawPoint::new(0.0, 0.0, 1.0, 90_000_000.0),
            ],
        );

        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Ouster);

        assert_eq!(anchor_us, 2_090_000);
        assert_relative_eq!(points[0].time, -0.09, epsilon = 1e-6);
        assert_relative_eq!(points[1].time, -0.045, epsilon = 1e-6);
        assert_eq!(points[2].time, 0.0);
        assert!(points.iter().all(|p| (-0.09..=0.0).contains(&(p.time as f64))));
    }

    #[test]
    fn test_velodyne_second_offsets() {
        let msg = cloud(
            5_000_000,
            vec![
                RawPoint::new(1.0, 0.0, 0.0, 0.0),
                RawPoint::new(2.0, 0.0, 0.0, 0.1),
            ],
        );

        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Velodyne);

        assert_eq!(anchor_us, 5_100_000);
        assert_relative_eq!(points[0].time, -0.1, epsilon = 1e-6);
        assert_eq!(points[1].time, 0.0);
    }

    #[test]
    fn test_robosense_absolute_stamps() {
        // Absolute per-point seconds; message stamp is the last point's time.
        let msg = cloud(
            100_050_000,
            vec![
                RawPoint::new(1.0, 0.0, 0.0, 100.0),
                RawPoint::new(2.0, 0.0, 0.0, 100.05),
            ],
        );

        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Robosense);

        assert_eq!(anchor_us, 100_050_000);
        assert_relative_eq!(points[0].time, -0.05, epsilon = 1e-6);
        assert_eq!(points[1].time, 0.0);
    }

    #[test]
    fn test_generic_assigns_zero_time() {
        // The fallback deliberately degrades timing: every point gets
        // relative time 0 and the anchor is the message stamp.
        let msg = cloud(
            7_000_000,
            vec![
                RawPoint::new(1.0, 2.0, 3.0, 123.0),
                RawPoint::new(4.0, 5.0, 6.0, 456.0),
            ],
        );

        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Generic);

        assert_eq!(anchor_us, 7_000_000);
        assert!(points.iter().all(|p| p.time == 0.0));
    }

    #[test]
    fn test_non_finite_points_filtered() {
        let msg = cloud(
            0,
            vec![
                RawPoint::new(1.0, 0.0, 0.0, 0.0),
                RawPoint::new(f32::NAN, 0.0, 0.0, 0.1),
                RawPoint::new(0.0, f32::INFINITY, 0.0, 0.2),
                RawPoint::new(2.0, 0.0, 0.0, 0.3),
            ],
        );

        let (points, _) = normalize_point_cloud(&msg, CloudFormat::Velodyne);

        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].time, -0.3, epsilon = 1e-6);
        assert_eq!(points[1].time, 0.0);
    }

    #[test]
    fn test_reference_time_from_unfiltered_last_point() {
        // The raw final point is non-finite in position but still defines
        // the time reference.
        let msg = cloud(
            1_000_000,
            vec![
                RawPoint::new(1.0, 0.0, 0.0, 0.0),
                RawPoint::new(f32::NAN, 0.0, 0.0, 0.2),
            ],
        );

        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Velodyne);

        assert_eq!(anchor_us, 1_200_000);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].time, -0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_cloud() {
        let msg = cloud(42, Vec::new());
        let (points, anchor_us) = normalize_point_cloud(&msg, CloudFormat::Ouster);
        assert!(points.is_empty());
        assert_eq!(anchor_us, 42);
    }
}
