use crate::constants::*;
use glam::Vec3;
use std::time::Duration;

/// Tunables handed to the interaction controller. `Default` gives the room's
/// shipped values.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub base_position: Vec3,
    pub base_target: Vec3,
    pub fovy_deg: f32,
    pub znear: f32,
    pub zfar: f32,
    pub zoom_duration: Duration,
    pub return_duration: Duration,
    pub loading_min_duration: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            base_position: BASE_CAMERA_POSITION,
            base_target: BASE_CAMERA_TARGET,
            fovy_deg: CAMERA_FOVY_DEG,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            zoom_duration: Duration::from_millis(ZOOM_DURATION_MS),
            return_duration: Duration::from_millis(RETURN_DURATION_MS),
            loading_min_duration: Duration::from_millis(LOADING_MIN_DURATION_MS),
        }
    }
}
