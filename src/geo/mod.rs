//! WGS84 geodesy: latitude/longitude to Earth-fixed coordinates and the
//! Earth-fixed → local-frame anchor derived from a reference fix.

use crate::core::types::Rigid3;
use nalgebra::{UnitQuaternion, Vector3};

/// WGS84 semi-major axis in meters.
const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// Convert a geodetic position to Earth-centered Earth-fixed coordinates.
pub fn lat_long_alt_to_ecef(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Vector3<f64> {
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();
    let (sin_long, cos_long) = longitude_deg.to_radians().sin_cos();
    // Prime vertical radius of curvature.
    let n = WGS84_A / (1.0 - e2 * sin_lat * sin_lat).sqrt();
    Vector3::new(
        (n + altitude_m) * cos_lat * cos_long,
        (n + altitude_m) * cos_lat * sin_long,
        (n * (1.0 - e2) + altitude_m) * sin_lat,
    )
}

/// Compute the Earth-fixed → local-frame transform anchored at a reference
/// latitude/longitude (at zero altitude).
///
/// The local frame has its origin at the reference point with +z pointing
/// away from the ellipsoid.
pub fn compute_local_frame_from_lat_long(latitude_deg: f64, longitude_deg: f64) -> Rigid3 {
    let translation = lat_long_alt_to_ecef(latitude_deg, longitude_deg, 0.0);
    let rotation = UnitQuaternion::from_axis_angle(
        &Vector3::y_axis(),
        (latitude_deg - 90.0).to_radians(),
    ) * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), (-longitude_deg).to_radians());
    Rigid3::from_parts(rotation, rotation * -translation)
}
