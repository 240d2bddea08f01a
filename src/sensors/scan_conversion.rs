//! 2D sweep conversion to timed point clouds.
//!
//! A sweep's beams are converted polar → Cartesian one at a time, each
//! tagged with its acquisition offset from the first beam. The finished
//! cloud is then re-based so the LAST point carries relative time 0 and the
//! returned anchor timestamp is the absolute time of that last point.

use crate::core::time::shift_us;
use crate::core::types::{
    LaserScanMessage, MultiEchoLaserScanMessage, PointCloudWithIntensities, TimedPoint,
};

/// Convert a single-echo sweep. Returns the cloud and its anchor time
/// (absolute time of the last kept beam) in microseconds.
pub fn laser_scan_to_point_cloud(msg: &LaserScanMessage) -> (PointCloudWithIntensities, u64) {
    let beams = msg.ranges.iter().enumerate().map(|(i, &range)| {
        let intensity = msg.intensities.get(i).copied().unwrap_or(0.0);
        (range, intensity)
    });
    beams_to_point_cloud(
        msg.timestamp_us,
        msg.angle_min,
        msg.angle_increment,
        msg.time_increment,
        msg.range_min,
        msg.range_max,
        beams,
    )
}

/// Convert a multi-echo sweep using the first echo of every beam.
pub fn multi_echo_scan_to_point_cloud(
    msg: &MultiEchoLaserScanMessage,
) -> (PointCloudWithIntensities, u64) {
    let beams = msg.ranges.iter().enumerate().map(|(i, echoes)| {
        // A beam with no echo is treated as invalid and range-filtered out.
        let range = echoes.first().copied().unwrap_or(f32::NAN);
        let intensity = msg
            .intensities
            .get(i)
            .and_then(|e| e.first())
            .copied()
            .unwrap_or(0.0);
        (range, intensity)
    });
    beams_to_point_cloud(
        msg.timestamp_us,
        msg.angle_min,
        msg.angle_increment,
        msg.time_increment,
        msg.range_min,
        msg.range_max,
        beams,
    )
}

fn beams_to_point_cloud(
    timestamp_us: u64,
    angle_min: f32,
    angle_increment: f32,
    time_increment: f32,
    range_min: f32,
    range_max: f32,
    beams: impl Iterator<Item = (f32, f32)>,
) -> (PointCloudWithIntensities, u64) {
    let mut cloud = PointCloudWithIntensities::default();
    for (i, (range, intensity)) in beams.enumerate() {
        // NaN and infinite ranges fail this comparison and are skipped.
        if range >= range_min && range < range_max {
            let angle = angle_min + i as f32 * angle_increment;
            let (sin_a, cos_a) = angle.sin_cos();
            cloud.points.push(TimedPoint::new(
                range * cos_a,
                range * sin_a,
                0.0,
                i as f32 * time_increment,
            ));
            cloud.intensities.push(intensity);
        }
    }

    // Re-base so the last point's relative time is exactly 0 and the anchor
    // timestamp is the absolute time of that point.
    let mut anchor_us = timestamp_us;
    if let Some(last) = cloud.points.last() {
        let duration_to_last = last.time;
        anchor_us = shift_us(timestamp_us, duration_to_last as f64);
        for point in &mut cloud.points {
            point.time -= duration_to_last;
        }
    }
    (cloud, anchor_us)
}
