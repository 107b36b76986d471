// Shared fixtures: a recording host and a small furnished room.

#![allow(dead_code)]

use glam::{Mat4, Vec2, Vec3};
use room_core::assembly::MeshDesc;
use room_core::geometry::Aabb;
use room_core::hover::Cursor;
use room_core::loading::AssetKind;
use room_core::{InteractionController, InteractionHost, Panel, PanelHost, SceneConfig, SoundCue};
use std::time::Duration;

pub const WIDTH: f32 = 1200.0;
pub const HEIGHT: f32 = 600.0;

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[derive(Default)]
pub struct RecordingHost {
    pub mounted: Vec<Panel>,
    pub mount_calls: usize,
    pub cues: Vec<(SoundCue, f32)>,
    pub cursor: Cursor,
    pub unlocks: usize,
    pub loading_hidden: bool,
    pub loading_text: Option<String>,
    pub typed: String,
}

impl PanelHost for RecordingHost {
    fn is_mounted(&self, panel: Panel) -> bool {
        self.mounted.contains(&panel)
    }

    fn mount(&mut self, panel: Panel) {
        self.mount_calls += 1;
        self.mounted.push(panel);
    }

    fn unmount(&mut self, panel: Panel) {
        self.mounted.retain(|p| *p != panel);
    }

    fn append_text(&mut self, panel: Panel, text: &str) {
        assert!(self.is_mounted(panel), "text appended to an unmounted panel");
        self.typed.push_str(text);
    }
}

impl InteractionHost for RecordingHost {
    fn play_cue(&mut self, cue: SoundCue, volume: f32) {
        self.cues.push((cue, volume));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    fn unlock_audio(&mut self) {
        self.unlocks += 1;
    }

    fn hide_loading_screen(&mut self) {
        self.loading_hidden = true;
    }

    fn set_loading_text(&mut self, text: &str) {
        self.loading_text = Some(text.to_string());
    }
}

pub fn mesh(name: &str, parent: Option<&str>, min: Vec3, max: Vec3) -> MeshDesc {
    MeshDesc {
        name: name.to_string(),
        parent_name: parent.map(str::to_string),
        transform: Mat4::IDENTITY,
        bounds: Aabb::new(min, max),
        base_color: [0.5, 0.5, 0.5, 1.0],
    }
}

/// Room with a floor and a stack of papers centred on the rest look-at point.
pub fn room_meshes() -> Vec<MeshDesc> {
    let papers_at = room_core::constants::BASE_CAMERA_TARGET;
    vec![
        mesh("floor", None, Vec3::new(-4.0, -0.1, -4.0), Vec3::new(4.0, 0.0, 4.0)),
        mesh("Object_8", Some("papers_3"), papers_at - Vec3::splat(0.1), papers_at + Vec3::splat(0.1)),
    ]
}

pub fn mirror_meshes() -> Vec<MeshDesc> {
    vec![mesh("glass", None, Vec3::splat(-1.0), Vec3::splat(1.0))]
}

pub fn typewriter_meshes() -> Vec<MeshDesc> {
    vec![mesh("body", None, Vec3::new(-0.01, 0.0, -0.01), Vec3::new(0.01, 0.01, 0.01))]
}

pub fn agent_meshes() -> Vec<MeshDesc> {
    vec![
        mesh("legs", None, Vec3::new(-0.4, 0.0, -0.4), Vec3::new(0.4, 1.2, 0.4)),
        mesh("torso", None, Vec3::new(-0.4, 1.2, -0.4), Vec3::new(0.4, 2.4, 0.4)),
    ]
}

/// Controller sized to the test viewport with every asset attached at t=0.
pub fn furnished() -> InteractionController {
    let mut c = InteractionController::new(SceneConfig::default());
    c.resize(WIDTH, HEIGHT);
    for (kind, meshes) in [
        (AssetKind::Room, room_meshes()),
        (AssetKind::Mirror, mirror_meshes()),
        (AssetKind::Typewriter, typewriter_meshes()),
        (AssetKind::Agent, agent_meshes()),
    ] {
        c.attach_asset(kind, &meshes, Duration::ZERO).unwrap();
    }
    c
}

/// Pixel position of a world point under the controller's current camera.
pub fn screen_of(c: &InteractionController, world: Vec3) -> Vec2 {
    let clip = c.camera().view_projection() * world.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    Vec2::new((ndc.x + 1.0) * 0.5 * WIDTH, (1.0 - ndc.y) * 0.5 * HEIGHT)
}

pub const MIRROR_CENTER: Vec3 = Vec3::new(-1.1, 2.17, -2.2);
pub const AGENT_TORSO: Vec3 = Vec3::new(-2.1, 1.2, -1.1);
pub const TYPEWRITER_CENTER: Vec3 = Vec3::new(1.15, 1.27, -1.63);
