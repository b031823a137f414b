use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let mut camera = Self {
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect: 1.0,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Recompute the aspect ratio; a degenerate viewport keeps the old one.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
        }
    }

    #[inline]
    pub fn eye(distance: f32) -> Vec3 {
        Vec3::new(0.0, 0.0, distance)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    #[inline]
    pub fn view(distance: f32) -> Mat4 {
        Mat4::look_at_rh(Self::eye(distance), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self, distance: f32) -> Mat4 {
        self.projection() * Self::view(distance)
    }
}

/// Object transform for the viewer's pitch/yaw pair (X then Y, intrinsic).
#[inline]
pub fn object_matrix(rotation: Vec2) -> Mat4 {
    Mat4::from_rotation_x(rotation.x) * Mat4::from_rotation_y(rotation.y)
}
