//! Zoom sequencer: Idle -> Animating -> Idle. A click on an interactive object
//! starts one fixed-length camera move toward the clicked point; the
//! completion action is handed back exactly once when it lands.

use crate::camera::Camera;
use crate::constants::*;
use crate::overlay::Panel;
use crate::tag::ObjectTag;
use crate::tween::{progress, smoothstep};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomSession {
    pub tag: ObjectTag,
    pub start: Duration,
    pub start_position: Vec3,
    pub target_position: Vec3,
    pub look_at: Vec3,
    pub on_complete: Panel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomCompletion {
    pub tag: ObjectTag,
    pub on_complete: Panel,
}

#[derive(Clone, Debug)]
pub struct ZoomSequencer {
    duration: Duration,
    session: Option<ZoomSession>,
}

impl Default for ZoomSequencer {
    fn default() -> Self {
        Self::new(Duration::from_millis(ZOOM_DURATION_MS))
    }
}

impl ZoomSequencer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            session: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ZoomSession> {
        self.session.as_ref()
    }

    /// Starts a session toward `hit_point`. Returns `false` (a no-op) when a
    /// session is already running.
    pub fn begin(&mut self, tag: ObjectTag, hit_point: Vec3, camera_pos: Vec3, now: Duration) -> bool {
        if self.session.is_some() {
            log::debug!("[zoom] ignoring {} click, already animating", tag.name());
            return false;
        }
        let target_position = zoom_target(tag, camera_pos, hit_point);
        log::info!(
            "[zoom] {} -> ({:.2},{:.2},{:.2})",
            tag.name(),
            target_position.x,
            target_position.y,
            target_position.z
        );
        self.session = Some(ZoomSession {
            tag,
            start: now,
            start_position: camera_pos,
            target_position,
            look_at: hit_point,
            on_complete: tag.panel(),
        });
        true
    }

    /// Drives the camera for this frame. Returns the completion once, on the
    /// frame progress reaches 1, and discards the session.
    pub fn tick(&mut self, camera: &mut Camera, now: Duration) -> Option<ZoomCompletion> {
        let s = self.session.as_ref()?;
        let p = progress(s.start, now, self.duration);
        camera.eye = s.start_position.lerp(s.target_position, smoothstep(p));
        camera.look_at(s.look_at);
        if p < 1.0 {
            return None;
        }
        let done = ZoomCompletion {
            tag: s.tag,
            on_complete: s.on_complete,
        };
        self.session = None;
        Some(done)
    }
}

/// Camera destination for a zoom toward `hit_point`. A hit point equal to the
/// camera position yields a zero direction and the camera stays put (before
/// per-category corrections).
pub fn zoom_target(tag: ObjectTag, camera_pos: Vec3, hit_point: Vec3) -> Vec3 {
    let dir = (hit_point - camera_pos).normalize_or_zero();
    let mut target = camera_pos + dir * tag.zoom_distance();
    match tag {
        ObjectTag::Mirror => {
            target.y = target.y.max(MIRROR_MIN_CAMERA_Y);
            if target.distance(AGENT_BASE_POSITION) > MIRROR_MAX_AGENT_DISTANCE {
                target += (AGENT_BASE_POSITION - target).normalize_or_zero() * MIRROR_AGENT_PULL;
            }
        }
        ObjectTag::Agent => target.y += AGENT_HEAD_LIFT,
        ObjectTag::Papers | ObjectTag::Typewriter => {}
    }
    target
}
