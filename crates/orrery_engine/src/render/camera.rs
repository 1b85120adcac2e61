//! Perspective camera

use crate::foundation::math::{Mat4, Point3, Vec3};
use nalgebra::Perspective3;

/// Perspective camera with look-at orientation
///
/// The host queries its drawable size each frame; when it changes, the
/// aspect ratio is recomputed before drawing.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Up direction
    pub up: Vec3,
    aspect: f32,
}

impl Camera {
    /// Create a camera at the origin looking down -Z with +Y up
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            near,
            far,
            position: Vec3::zeros(),
            target: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::y(),
            aspect,
        }
    }

    /// Place the camera and aim it
    pub fn look_at(&mut self, position: Vec3, target: Vec3, up: Vec3) {
        self.position = position;
        self.target = target;
        self.up = up;
    }

    /// Current aspect ratio
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Update the aspect ratio (drawable width / height)
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Projection matrix for the current parameters
    pub fn projection_matrix(&self) -> Mat4 {
        Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }

    /// View matrix for the current pose
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
