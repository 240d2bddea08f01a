//! Foundation data types.

pub mod messages;
pub mod point_cloud;
pub mod sensor_data;
pub mod transform;

pub use messages::{
    ImuMessage, LandmarkEntry, LandmarkListMessage, LaserScanMessage, MultiEchoLaserScanMessage,
    NavSatFixMessage, NavSatStatus, OdometryMessage, PointCloudMessage, RawPoint,
};
pub use point_cloud::{
    transform_timed_point_cloud, PointCloudWithIntensities, TimedPoint, TimedPointCloud,
};
pub use sensor_data::{
    FixedFramePoseData, ImuData, LandmarkData, OdometryData, SensorData, TimedPointCloudData,
};
pub use transform::{Rigid3, Rigid3f};
