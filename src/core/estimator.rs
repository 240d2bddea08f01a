//! TrajectoryEstimator trait definition

use crate::core::types::SensorData;

/// Consumer of normalized, tracking-frame-relative sensor data.
///
/// One call per accepted measurement, fire-and-forget: the bridge never
/// consults a return value. Implementations must tolerate arbitrary
/// interleaving across distinct sensor ids; deliveries for the same sensor
/// id arrive in non-decreasing time order.
pub trait TrajectoryEstimator {
    /// Deliver one measurement tagged by its sensor id.
    fn add_sensor_data(&mut self, sensor_id: &str, data: SensorData);
}

impl<T: TrajectoryEstimator + ?Sized> TrajectoryEstimator for &mut T {
    fn add_sensor_data(&mut self, sensor_id: &str, data: SensorData) {
        (**self).add_sensor_data(sensor_id, data);
    }
}
