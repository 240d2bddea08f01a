//! SetuBridge - sensor normalization and synchronization for trajectory
//! estimation.
//!
//! Converts heterogeneous raw sensor samples (2D sweeps, multi-echo sweeps,
//! vendor 3D point clouds, inertial samples, satellite fixes, odometry,
//! landmark observations) into a single canonical, time-ordered,
//! tracking-frame-relative stream consumed by an external trajectory
//! estimator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    bridge/                          │  ← Orchestration
//! │     (SensorBridge handlers, scan subdivision)       │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌──────────────────────────┬──────────────────────────┐
//! │        sensors/          │        tf/  geo/         │  ← Conversion
//! │ (frame ids, 2D sweeps,   │ (transform lookup,       │
//! │  vendor cloud formats)   │  WGS84 anchor)           │
//! └──────────────────────────┴──────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │      (types, time arithmetic, estimator trait)      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Conventions
//!
//! - Absolute time: `u64` microseconds since epoch.
//! - Per-point time: `f32` seconds relative to the cloud's LAST point;
//!   always ≤ 0, exactly 0 for the last point.
//! - A cloud's timestamp is the absolute time of its last point, so a
//!   time-ordered merge of several sensors never sees data that predates
//!   what it already delivered.
//!
//! # Error tiers
//!
//! Recoverable conditions (transform lookup miss, non-finite points, stale
//! scan subdivisions) drop the affected sample with a log message and keep
//! going. Invalid inertial preconditions are [`Error`] values: feeding a
//! non-colocated or channel-less IMU into pose estimation would silently
//! corrupt it.

pub mod bridge;
pub mod config;
pub mod core;
pub mod error;
pub mod geo;
pub mod sensors;
pub mod tf;

pub use crate::bridge::{SensorBridge, IMU_COLOCATION_TOLERANCE_M};
pub use crate::config::BridgeConfig;
pub use crate::core::estimator::TrajectoryEstimator;
pub use crate::core::types::{
    FixedFramePoseData, ImuData, ImuMessage, LandmarkData, LandmarkEntry, LandmarkListMessage,
    LaserScanMessage, MultiEchoLaserScanMessage, NavSatFixMessage, NavSatStatus, OdometryData,
    OdometryMessage, PointCloudMessage, PointCloudWithIntensities, RawPoint, Rigid3, Rigid3f,
    SensorData, TimedPoint, TimedPointCloud, TimedPointCloudData,
};
pub use crate::error::{Error, Result};
pub use crate::sensors::CloudFormat;
pub use crate::tf::{TfBridge, TransformProvider};
