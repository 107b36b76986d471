//! Perspective camera and the constrained orbit drag.

use crate::constants::*;
use crate::geometry::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera aimed at a look-at point.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: BASE_CAMERA_POSITION,
            target: BASE_CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn look_at(&mut self, point: Vec3) {
        self.target = point;
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space ray from the eye through a point given in NDC.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.eye, far - self.eye)
    }
}

/// Rotates the camera around its look-at point within a narrow envelope
/// around the rest orientation. Zoom and pan are not supported.
#[derive(Clone, Debug)]
pub struct OrbitDrag {
    pub enabled: bool,
    active: bool,
    last: Vec2,
    base_yaw: f32,
}

impl OrbitDrag {
    pub fn new(base_eye: Vec3, base_target: Vec3) -> Self {
        let (yaw, _, _) = spherical(base_eye - base_target);
        Self {
            enabled: true,
            active: false,
            last: Vec2::ZERO,
            base_yaw: yaw,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, pointer_px: Vec2) {
        if !self.enabled {
            return;
        }
        self.active = true;
        self.last = pointer_px;
    }

    pub fn end(&mut self) {
        self.active = false;
    }

    /// Applies a pointer move while dragging. `viewport_height` converts pixels
    /// to angle: a full-height drag is one full turn.
    pub fn drag_to(&mut self, camera: &mut Camera, pointer_px: Vec2, viewport_height: f32) {
        if !self.active || !self.enabled || viewport_height <= 0.0 {
            return;
        }
        let delta = pointer_px - self.last;
        self.last = pointer_px;
        let turn = std::f32::consts::TAU / viewport_height;

        let (yaw, polar, radius) = spherical(camera.eye - camera.target);
        let yaw = (yaw - delta.x * turn).clamp(
            self.base_yaw - ORBIT_YAW_LIMIT_RAD,
            self.base_yaw + ORBIT_YAW_LIMIT_RAD,
        );
        let polar = (polar - delta.y * turn).clamp(ORBIT_MIN_POLAR_RAD, ORBIT_MAX_POLAR_RAD);
        camera.eye = camera.target + from_spherical(yaw, polar, radius);
    }
}

/// `(yaw around +Y measured from +Z, polar angle from +Y, radius)`.
fn spherical(offset: Vec3) -> (f32, f32, f32) {
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return (0.0, std::f32::consts::FRAC_PI_2, 0.0);
    }
    let yaw = offset.x.atan2(offset.z);
    let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
    (yaw, polar, radius)
}

fn from_spherical(yaw: f32, polar: f32, radius: f32) -> Vec3 {
    let s = polar.sin();
    Vec3::new(radius * s * yaw.sin(), radius * polar.cos(), radius * s * yaw.cos())
}
