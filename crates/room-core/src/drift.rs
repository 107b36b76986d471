use crate::camera::Camera;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Parallax follow: the idle camera eases toward the rest position offset by
/// the pointer, covering a fixed fraction of the remaining distance per tick.
#[derive(Clone, Debug)]
pub struct CameraDrift {
    base: Vec3,
    target: Vec3,
    lerp: f32,
}

impl CameraDrift {
    pub fn new(base: Vec3) -> Self {
        Self {
            base,
            target: base,
            lerp: DRIFT_LERP,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn offset(&self) -> Vec3 {
        self.target - self.base
    }

    /// Pointer-move reach.
    pub fn follow_pointer(&mut self, ndc: Vec2) {
        self.aim(ndc, DRIFT_FACTOR_X, DRIFT_FACTOR_Y);
    }

    /// Click reach, shorter than the pointer-move reach.
    pub fn follow_click(&mut self, ndc: Vec2) {
        self.aim(ndc, CLICK_DRIFT_FACTOR_X, CLICK_DRIFT_FACTOR_Y);
    }

    fn aim(&mut self, ndc: Vec2, fx: f32, fy: f32) {
        self.target = self.base + Vec3::new(ndc.x * fx, ndc.y * fy, 0.0);
    }

    /// One smoothing step; re-aims the camera at `look_at`.
    pub fn tick(&self, camera: &mut Camera, look_at: Vec3) {
        camera.eye = camera.eye.lerp(self.target, self.lerp);
        camera.look_at(look_at);
    }
}
