//! Math utilities and types
//!
//! Provides the fundamental math types for the scene graph: vector and
//! matrix aliases over nalgebra, plus the SRT [`Transform`] that the
//! hierarchy composes.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
///
/// Applies scale first, then rotation, then translation. That fixed order
/// is what makes a scaled parent inflate both the size and the offsets of
/// its children, and what the unscaled-pivot pattern works around.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create a transform with only scale
    pub fn from_scale(scale: Vec3) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    /// Create a rotation about the Y axis
    pub fn from_y_rotation(angle: f32) -> Self {
        Self {
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), angle),
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix (translation * rotation * scale)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }

    /// Combine this transform with a child transform (self ∘ other)
    ///
    /// Scale composes componentwise; shear introduced by rotating a
    /// non-uniformly scaled space is not representable in SRT form.
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }

    /// Get the inverse transform
    pub fn inverse(&self) -> Transform {
        let inv_scale = Vec3::new(1.0 / self.scale.x, 1.0 / self.scale.y, 1.0 / self.scale.z);
        let inv_rotation = self.rotation.inverse();
        let inv_position = inv_rotation * (-self.position.component_mul(&inv_scale));

        Transform {
            position: inv_position,
            rotation: inv_rotation,
            scale: inv_scale,
        }
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();

        assert_eq!(t.position, Vec3::zeros());
        assert_relative_eq!(t.rotation, Quat::identity(), epsilon = EPSILON);
        assert_eq!(t.scale, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(t.to_matrix(), Mat4::identity());
    }

    #[test]
    fn test_srt_application_order() {
        // Scale innermost: a point is scaled, then rotated, then translated.
        let t = Transform {
            position: Vec3::new(10.0, 0.0, 0.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), constants::HALF_PI),
            scale: Vec3::new(2.0, 1.0, 1.0),
        };

        // (1,0,0) -> scale -> (2,0,0) -> rotate 90° about Y -> (0,0,-2)
        // -> translate -> (10,0,-2)
        let p = t.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(10.0, 0.0, -2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_combine_matches_matrix_product() {
        // With an unrotated parent, combine agrees with the matrix product
        // exactly, including non-uniform parent scale.
        let parent = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::identity(),
            scale: Vec3::new(2.0, 3.0, 4.0),
        };
        let child = Transform {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), 0.3),
            scale: Vec3::new(1.0, 1.0, 1.0),
        };

        let combined = parent.combine(&child);
        let product = parent.to_matrix() * child.to_matrix();

        let origin = combined.transform_point(Point3::origin());
        let expected = product.transform_point(&Point3::origin());
        assert_relative_eq!(origin, expected, epsilon = 1e-5);
        assert_relative_eq!(combined.position, Vec3::new(11.0, 2.0, 3.0), epsilon = 1e-5);
    }

    #[test]
    fn test_combine_scales_child_offsets() {
        // A scaled parent inflates child offsets componentwise.
        let parent = Transform::from_scale(Vec3::new(5.0, 1.0, 2.0));
        let child = Transform::from_position(Vec3::new(10.0, 10.0, 10.0));

        let combined = parent.combine(&child);
        assert_relative_eq!(
            combined.position,
            Vec3::new(50.0, 10.0, 20.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Transform {
            position: Vec3::new(2.0, 3.0, 1.0),
            rotation: Quat::from_axis_angle(&Vec3::y_axis(), 0.785),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let roundtrip = t.combine(&t.inverse());
        assert_relative_eq!(roundtrip.position, Vec3::zeros(), epsilon = 1e-5);
        assert_relative_eq!(
            roundtrip.scale,
            Vec3::new(1.0, 1.0, 1.0),
            epsilon = 1e-5
        );
        let dot = roundtrip.rotation.coords.dot(&Quat::identity().coords);
        assert!(dot.abs() > 0.999, "inverse rotation mismatch: dot = {}", dot);
    }

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = 1e-4);
    }
}
