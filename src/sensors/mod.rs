//! Per-format sensor conversion: frame ids, 2D sweeps, vendor 3D clouds.

pub mod cloud_normalizer;
pub mod frame_id;
pub mod scan_conversion;

pub use cloud_normalizer::{normalize_point_cloud, CloudFormat};
pub use frame_id::strip_leading_slash;
pub use scan_conversion::{laser_scan_to_point_cloud, multi_echo_scan_to_point_cloud};
