//! Rigid 3D transform types.
//!
//! `Rigid3` is the full-precision transform used for poses and single
//! vectors. `Rigid3f` is its reduced-precision counterpart for transforming
//! bulk point clouds, obtained via [`Rigid3::cast_f32`].

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A rigid transform (rotation + translation) between two frames.
///
/// Applies as `p' = rotation * p + translation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rigid3 {
    /// Rotational part
    pub rotation: UnitQuaternion<f64>,
    /// Translational part in meters
    pub translation: Vector3<f64>,
}

impl Rigid3 {
    /// Identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Create from rotation and translation.
    #[inline]
    pub fn from_parts(rotation: UnitQuaternion<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Pure translation transform.
    #[inline]
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    /// Pure rotation transform.
    #[inline]
    pub fn rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Inverse of this transform.
    #[inline]
    pub fn inverse(&self) -> Rigid3 {
        let rotation = self.rotation.inverse();
        Rigid3 {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// Transform a point: rotate then translate.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * point + self.translation
    }

    /// Rotate a free vector (no translation applied).
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }

    /// Reduced-precision copy for bulk point-cloud transforms.
    #[inline]
    pub fn cast_f32(&self) -> Rigid3f {
        Rigid3f {
            rotation: self.rotation.cast::<f32>(),
            translation: self.translation.cast::<f32>(),
        }
    }
}

impl Default for Rigid3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Compose two transforms: `(a * b)(p) == a(b(p))`.
impl Mul for Rigid3 {
    type Output = Rigid3;

    #[inline]
    fn mul(self, rhs: Rigid3) -> Rigid3 {
        Rigid3 {
            rotation: self.rotation * rhs.rotation,
            translation: self.rotation * rhs.translation + self.translation,
        }
    }
}

/// Single-precision rigid transform for bulk data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rigid3f {
    /// Rotational part
    pub rotation: UnitQuaternion<f32>,
    /// Translational part in meters
    pub translation: Vector3<f32>,
}

impl Rigid3f {
    /// Transform a point: rotate then translate.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<f32>) -> Vector3<f32> {
        self.rotation * point + self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_leaves_point_unchanged() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        let result = Rigid3::identity().transform_point(&p);
        assert_relative_eq!(result, p);
    }

    #[test]
    fn test_compose_with_identity() {
        let t = Rigid3::from_parts(
            UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
            Vector3::new(1.0, -2.0, 0.5),
        );
        let composed = t * Rigid3::identity();
        assert_relative_eq!(composed.translation, t.translation, epsilon = 1e-12);
        assert_relative_eq!(
            composed.rotation.angle_to(&t.rotation),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Rigid3::from_parts(
            UnitQuaternion::from_euler_angles(0.4, -0.2, 1.1),
            Vector3::new(3.0, 1.0, -5.0),
        );
        let roundtrip = t * t.inverse();
        assert_relative_eq!(roundtrip.translation, Vector3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(
            roundtrip.rotation.angle_to(&UnitQuaternion::identity()),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_transform_point_rotation_then_translation() {
        let t = Rigid3::from_parts(
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let result = t.transform_point(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(result, Vector3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let t = Rigid3::from_parts(
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2),
            Vector3::new(100.0, 100.0, 100.0),
        );
        let result = t.transform_vector(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(result, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_cast_f32_matches_f64() {
        let t = Rigid3::from_parts(
            UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
            Vector3::new(1.0, 2.0, 3.0),
        );
        let tf = t.cast_f32();
        let p64 = t.transform_point(&Vector3::new(4.0, 5.0, 6.0));
        let p32 = tf.transform_point(&Vector3::new(4.0, 5.0, 6.0));
        assert_relative_eq!(p32.x, p64.x as f32, epsilon = 1e-4);
        assert_relative_eq!(p32.y, p64.y as f32, epsilon = 1e-4);
        assert_relative_eq!(p32.z, p64.z as f32, epsilon = 1e-4);
    }
}
