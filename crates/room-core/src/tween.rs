use crate::camera::Camera;
use glam::Vec3;
use std::time::Duration;

/// `p² (3 − 2p)`
#[inline]
pub fn smoothstep(p: f32) -> f32 {
    p * p * (3.0 - 2.0 * p)
}

/// `1 − (1 − p)³`
#[inline]
pub fn ease_out_cubic(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(3)
}

/// Linear progress clamped to `[0, 1]`. A zero duration is already complete.
#[inline]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// One-shot camera move that eases both the eye and the look-at point.
/// Restarting replaces the previous move and resets its timer.
#[derive(Clone, Debug)]
pub struct CameraTween {
    duration: Duration,
    active: Option<TweenRun>,
}

#[derive(Clone, Debug)]
struct TweenRun {
    start: Duration,
    from_eye: Vec3,
    from_target: Vec3,
    to_eye: Vec3,
    to_target: Vec3,
}

impl CameraTween {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, camera: &Camera, to_eye: Vec3, to_target: Vec3, now: Duration) {
        self.active = Some(TweenRun {
            start: now,
            from_eye: camera.eye,
            from_target: camera.target,
            to_eye,
            to_target,
        });
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Advances the move. Returns `true` on the frame it finishes.
    pub fn tick(&mut self, camera: &mut Camera, now: Duration) -> bool {
        let Some(run) = &self.active else {
            return false;
        };
        let p = progress(run.start, now, self.duration);
        let e = ease_out_cubic(p);
        camera.eye = run.from_eye.lerp(run.to_eye, e);
        camera.target = run.from_target.lerp(run.to_target, e);
        if p >= 1.0 {
            self.active = None;
            return true;
        }
        false
    }
}
