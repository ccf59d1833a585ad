//! Flat-quad camera.
//!
//! The pattern plane is drawn full-bleed, so the camera is orthographic and
//! looks straight down -Z at the unit plane. Depth maps to wgpu's [0, 1].

use super::constants::{CAMERA_Z, ORTHO_FAR, ORTHO_HALF_EXTENT, ORTHO_NEAR};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub half_extent: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            half_extent: ORTHO_HALF_EXTENT,
            znear: ORTHO_NEAR,
            zfar: ORTHO_FAR,
        }
    }
}

impl OrthoCamera {
    pub fn projection_matrix(&self) -> Mat4 {
        let h = self.half_extent;
        Mat4::orthographic_rh(-h, h, -h, h, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
