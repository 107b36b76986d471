//! Hover state machine: recomputed on every pointer move from the current
//! intersection list. Highlights are cleared on every object before the new
//! target is chosen, so at most one object glows at any time.

use crate::constants::*;
use crate::geometry::Ray;
use crate::scene::{Intersection, SceneGraph};
use crate::tag::ObjectTag;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverOutcome {
    pub target: Option<ObjectTag>,
    pub cursor: Cursor,
}

#[derive(Debug, Default)]
pub struct HoverState {
    target: Option<ObjectTag>,
}

impl HoverState {
    pub fn target(&self) -> Option<ObjectTag> {
        self.target
    }

    pub fn update(&mut self, scene: &mut SceneGraph, hits: &[Intersection], pointer_ray: &Ray) -> HoverOutcome {
        for tag in ObjectTag::ALL {
            if let Err(e) = scene.set_object_emissive(tag, [0.0; 3]) {
                log::warn!("[hover] clear {}: {}", tag.name(), e);
            }
        }

        let target = pick_hover_target(scene, hits, pointer_ray);
        if let Some(tag) = target {
            if let Err(e) = scene.set_object_emissive(tag, tag.highlight_color()) {
                log::warn!("[hover] highlight {}: {}", tag.name(), e);
            }
        }
        self.target = target;

        HoverOutcome {
            target,
            cursor: if target.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }
}

/// First tagged intersection wins. An untagged intersection falls back to the
/// agent proximity heuristic when the agent is loaded.
pub fn pick_hover_target(scene: &SceneGraph, hits: &[Intersection], pointer_ray: &Ray) -> Option<ObjectTag> {
    let agent_loaded = scene.interactive(ObjectTag::Agent).is_some();
    let mut agent_near = None;
    for hit in hits {
        if let Some(tag) = scene.tag_of(hit.node) {
            return Some(tag);
        }
        if agent_loaded && *agent_near.get_or_insert_with(|| agent_proximity(pointer_ray)) {
            return Some(ObjectTag::Agent);
        }
    }
    None
}

/// Heuristic for the agent's thin geometry: a probe point a fixed distance
/// along the pointer ray is compared against fixed base/torso/head landmarks.
/// It ignores the agent's animated pose.
pub fn agent_proximity(pointer_ray: &Ray) -> bool {
    let probe = pointer_ray.at(AGENT_PROXIMITY_PROJECTION);
    AGENT_LANDMARK_HEIGHTS
        .iter()
        .map(|h| AGENT_BASE_POSITION + Vec3::Y * *h)
        .any(|landmark| probe.distance(landmark) < AGENT_PROXIMITY_RADIUS)
}
