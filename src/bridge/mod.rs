//! The sensor bridge: routes raw sensor messages through normalization,
//! frame canonicalization, and transform application, then forwards the
//! results to the trajectory estimator.
//!
//! One logical call stream per bridge instance; handlers take `&mut self`
//! so the type system enforces it. Deliveries for the same sensor id must
//! be non-decreasing in time; nothing is promised across sensor ids.

use crate::config::BridgeConfig;
use crate::core::estimator::TrajectoryEstimator;
use crate::core::time::shift_us;
use crate::core::types::{
    transform_timed_point_cloud, FixedFramePoseData, ImuData, ImuMessage, LandmarkData,
    LandmarkListMessage, LaserScanMessage, MultiEchoLaserScanMessage, NavSatFixMessage,
    NavSatStatus, OdometryData, OdometryMessage, PointCloudMessage, PointCloudWithIntensities,
    Rigid3, SensorData, TimedPointCloud, TimedPointCloudData,
};
use crate::error::{Error, Result};
use crate::geo;
use crate::sensors::{
    cloud_normalizer, frame_id::strip_leading_slash, scan_conversion, CloudFormat,
};
use crate::tf::{TfBridge, TransformProvider};
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum allowed IMU-to-tracking translation magnitude in meters.
///
/// Beyond this the IMU's linear acceleration cannot be expressed in the
/// tracking frame by rotation alone.
pub const IMU_COLOCATION_TOLERANCE_M: f64 = 1e-5;

/// Covariance\[0\] value marking an unsupported IMU channel.
const MISSING_CHANNEL_SENTINEL: f64 = -1.0;

/// Converts heterogeneous raw sensor samples into a canonical, time-ordered,
/// tracking-frame-relative stream for the estimator.
pub struct SensorBridge<E> {
    num_subdivisions_per_laser_scan: usize,
    point_cloud_format: CloudFormat,
    tf_bridge: TfBridge,
    estimator: E,
    /// Per-sensor absolute end time of the last accepted subdivision.
    sensor_to_previous_subdivision_time: HashMap<String, u64>,
    /// Earth-fixed → local-frame anchor, set by the first valid fix.
    ecef_to_local_frame: Option<Rigid3>,
}

impl<E: TrajectoryEstimator> SensorBridge<E> {
    /// Create a bridge from validated configuration.
    pub fn new(
        config: &BridgeConfig,
        provider: Arc<dyn TransformProvider>,
        estimator: E,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            num_subdivisions_per_laser_scan: config.num_subdivisions_per_laser_scan,
            point_cloud_format: config.point_cloud_format,
            tf_bridge: TfBridge::new(
                config.tracking_frame.clone(),
                config.lookup_timeout(),
                provider,
            ),
            estimator,
            sensor_to_previous_subdivision_time: HashMap::new(),
            ecef_to_local_frame: None,
        })
    }

    /// The transform lookup bridge.
    pub fn tf_bridge(&self) -> &TfBridge {
        &self.tf_bridge
    }

    /// Borrow the estimator sink.
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Consume the bridge, returning the estimator sink.
    pub fn into_estimator(self) -> E {
        self.estimator
    }

    /// Handle an odometry sample.
    ///
    /// The reported pose is attached to the message's child frame; it is
    /// re-expressed as a tracking-frame pose via the inverse sensor-to-
    /// tracking transform. Dropped on lookup miss.
    pub fn handle_odometry(&mut self, sensor_id: &str, msg: &OdometryMessage) {
        let frame_id = strip_leading_slash(&msg.child_frame_id);
        let Some(sensor_to_tracking) = self.tf_bridge.lookup_to_tracking(msg.timestamp_us, frame_id)
        else {
            log::warn!(
                "Dropping odometry from sensor {}: no transform for frame '{}' at {} us",
                sensor_id,
                frame_id,
                msg.timestamp_us
            );
            return;
        };
        self.estimator.add_sensor_data(
            sensor_id,
            SensorData::Odometry(OdometryData {
                timestamp_us: msg.timestamp_us,
                pose: msg.pose * sensor_to_tracking.inverse(),
            }),
        );
    }

    /// Handle a satellite fix.
    ///
    /// "No fix" forwards a pose-absent sample carrying the timestamp. The
    /// first valid fix permanently establishes the Earth-fixed → local-frame
    /// anchor; every valid fix is converted through it to a translation-only
    /// local-frame pose.
    pub fn handle_nav_sat_fix(&mut self, sensor_id: &str, msg: &NavSatFixMessage) {
        if msg.status == NavSatStatus::NoFix {
            self.estimator.add_sensor_data(
                sensor_id,
                SensorData::FixedFramePose(FixedFramePoseData {
                    timestamp_us: msg.timestamp_us,
                    pose: None,
                }),
            );
            return;
        }

        let ecef_to_local = *self.ecef_to_local_frame.get_or_insert_with(|| {
            log::info!(
                "Setting ecef_to_local_frame from first fix: lat = {}, long = {}",
                msg.latitude,
                msg.longitude
            );
            geo::compute_local_frame_from_lat_long(msg.latitude, msg.longitude)
        });

        let position = ecef_to_local.transform_point(&geo::lat_long_alt_to_ecef(
            msg.latitude,
            msg.longitude,
            msg.altitude,
        ));
        self.estimator.add_sensor_data(
            sensor_id,
            SensorData::FixedFramePose(FixedFramePoseData {
                timestamp_us: msg.timestamp_us,
                pose: Some(Rigid3::translation(position)),
            }),
        );
    }

    /// Handle a landmark observation list; a pure pass-through, poses are
    /// already tracking-frame-relative.
    pub fn handle_landmark(&mut self, sensor_id: &str, msg: &LandmarkListMessage) {
        self.estimator.add_sensor_data(
            sensor_id,
            SensorData::Landmarks(LandmarkData {
                timestamp_us: msg.timestamp_us,
                landmarks: msg.landmarks.clone(),
            }),
        );
    }

    /// Handle an inertial sample.
    ///
    /// Two fatal preconditions: the device must supply both channels (no
    /// `-1` covariance sentinel) and the IMU frame must be colocated with
    /// the tracking frame. Both vectors are rotated, never translated, into
    /// the tracking frame. A lookup miss drops the sample softly.
    pub fn handle_imu(&mut self, sensor_id: &str, msg: &ImuMessage) -> Result<()> {
        if msg.linear_acceleration_covariance[0] == MISSING_CHANNEL_SENTINEL {
            return Err(Error::ImuChannelUnsupported {
                channel: "linear acceleration",
                value: msg.linear_acceleration_covariance[0],
            });
        }
        if msg.angular_velocity_covariance[0] == MISSING_CHANNEL_SENTINEL {
            return Err(Error::ImuChannelUnsupported {
                channel: "angular velocity",
                value: msg.angular_velocity_covariance[0],
            });
        }

        let frame_id = strip_leading_slash(&msg.frame_id);
        let Some(sensor_to_tracking) = self.tf_bridge.lookup_to_tracking(msg.timestamp_us, frame_id)
        else {
            log::warn!(
                "Dropping IMU sample from sensor {}: no transform for frame '{}' at {} us",
                sensor_id,
                frame_id,
                msg.timestamp_us
            );
            return Ok(());
        };

        let norm_m = sensor_to_tracking.translation.norm();
        if norm_m >= IMU_COLOCATION_TOLERANCE_M {
            return Err(Error::ImuNotColocated {
                frame_id: frame_id.to_string(),
                norm_m,
                tolerance_m: IMU_COLOCATION_TOLERANCE_M,
            });
        }

        self.estimator.add_sensor_data(
            sensor_id,
            SensorData::Imu(ImuData {
                timestamp_us: msg.timestamp_us,
                linear_acceleration: sensor_to_tracking.transform_vector(&msg.linear_acceleration),
                angular_velocity: sensor_to_tracking.transform_vector(&msg.angular_velocity),
            }),
        );
        Ok(())
    }

    /// Handle a single-echo 2D sweep: convert, subdivide, dispatch.
    pub fn handle_laser_scan(&mut self, sensor_id: &str, msg: &LaserScanMessage) {
        let (cloud, anchor_us) = scan_conversion::laser_scan_to_point_cloud(msg);
        self.subdivide_and_dispatch(sensor_id, anchor_us, &msg.frame_id, cloud);
    }

    /// Handle a multi-echo 2D sweep: convert (first echo), subdivide,
    /// dispatch.
    pub fn handle_multi_echo_laser_scan(
        &mut self,
        sensor_id: &str,
        msg: &MultiEchoLaserScanMessage,
    ) {
        let (cloud, anchor_us) = scan_conversion::multi_echo_scan_to_point_cloud(msg);
        self.subdivide_and_dispatch(sensor_id, anchor_us, &msg.frame_id, cloud);
    }

    /// Handle a vendor 3D cloud: normalize per the configured format, then
    /// dispatch the whole cloud without subdivision.
    pub fn handle_point_cloud(&mut self, sensor_id: &str, msg: &PointCloudMessage) {
        if msg.points.is_empty() {
            log::warn!("Dropping empty point cloud from sensor {}", sensor_id);
            return;
        }
        let (points, anchor_us) =
            cloud_normalizer::normalize_point_cloud(msg, self.point_cloud_format);
        self.handle_rangefinder(sensor_id, anchor_us, &msg.frame_id, points);
    }

    /// Split a converted sweep into subdivisions and dispatch each one whose
    /// end time advances the sensor's monotonicity state.
    fn subdivide_and_dispatch(
        &mut self,
        sensor_id: &str,
        anchor_us: u64,
        frame_id: &str,
        cloud: PointCloudWithIntensities,
    ) {
        if cloud.points.is_empty() {
            return;
        }
        debug_assert!(cloud.points[cloud.points.len() - 1].time <= 0.0);

        let num_points = cloud.points.len();
        let num_subdivisions = self.num_subdivisions_per_laser_scan;
        for i in 0..num_subdivisions {
            let start_index = num_points * i / num_subdivisions;
            let end_index = num_points * (i + 1) / num_subdivisions;
            if start_index == end_index {
                continue;
            }
            let mut subdivision: TimedPointCloud = cloud.points[start_index..end_index].to_vec();
            let Some(last) = subdivision.last() else {
                continue;
            };
            let time_to_subdivision_end = last.time;
            // The subdivision's reported time is the END of its measurement
            // interval, so a time-ordered merge downstream knows no earlier
            // correction from this sensor can still arrive.
            let subdivision_time = shift_us(anchor_us, time_to_subdivision_end as f64);
            if let Some(&previous_time) = self.sensor_to_previous_subdivision_time.get(sensor_id) {
                if previous_time >= subdivision_time {
                    log::warn!(
                        "Ignored subdivision of a laser scan from sensor {}: previous \
                         subdivision time {} us is not before current subdivision time {} us",
                        sensor_id,
                        previous_time,
                        subdivision_time
                    );
                    continue;
                }
            }
            self.sensor_to_previous_subdivision_time
                .insert(sensor_id.to_string(), subdivision_time);
            for point in &mut subdivision {
                point.time -= time_to_subdivision_end;
            }
            self.handle_rangefinder(sensor_id, subdivision_time, frame_id, subdivision);
        }
    }

    /// Transform a canonical cloud into the tracking frame and dispatch it.
    /// Dropped on lookup miss.
    fn handle_rangefinder(
        &mut self,
        sensor_id: &str,
        time_us: u64,
        frame_id: &str,
        points: TimedPointCloud,
    ) {
        if points.is_empty() {
            return;
        }
        let frame_id = strip_leading_slash(frame_id);
        let Some(sensor_to_tracking) = self.tf_bridge.lookup_to_tracking(time_us, frame_id) else {
            log::warn!(
                "Dropping point cloud from sensor {}: no transform for frame '{}' at {} us",
                sensor_id,
                frame_id,
                time_us
            );
            return;
        };
        self.estimator.add_sensor_data(
            sensor_id,
            SensorData::TimedPointCloud(TimedPointCloudData {
                timestamp_us: time_us,
                origin: sensor_to_tracking.translation.cast::<f32>(),
                points: transform_timed_point_cloud(&points, &sensor_to_tracking.cast_f32()),
            }),
        );
    }
}

impl<E> std::fmt::Debug for SensorBridge<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorBridge")
            .field(
                "num_subdivisions_per_laser_scan",
                &self.num_subdivisions_per_laser_scan,
            )
            .field("point_cloud_format", &self.point_cloud_format)
            .field("tf_bridge", &self.tf_bridge)
            .field("ecef_to_local_frame_set", &self.ecef_to_local_frame.is_some())
            .finish_non_exhaustive()
    }
}
