//! The interaction controller: owns the scene context and every animation
//! state machine, and is driven by pointer events plus one tick per frame.

use crate::assembly::{attach_bundle, install_static_lights, AttachedBundle, MeshDesc};
use crate::camera::{Camera, OrbitDrag};
use crate::config::SceneConfig;
use crate::constants::TYPEWRITER_CUE_VOLUME;
use crate::drift::CameraDrift;
use crate::error::SceneError;
use crate::hover::{Cursor, HoverOutcome, HoverState};
use crate::lights::{AmbientLightAnimator, StrobeFrame};
use crate::loading::{AssetKind, LoadingGate};
use crate::overlay::{OverlayManager, Panel, PanelHost, UiAction};
use crate::pointer::PointerState;
use crate::scene::SceneGraph;
use crate::tag::{ObjectTag, SoundCue};
use crate::tween::CameraTween;
use crate::typewriter::{TypewriterReveal, TYPEWRITER_TEXT};
use crate::zoom::ZoomSequencer;
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Side effects the controller needs from its environment.
pub trait InteractionHost: PanelHost {
    fn play_cue(&mut self, cue: SoundCue, volume: f32);
    fn set_cursor(&mut self, cursor: Cursor);
    /// Called once, on the first click.
    fn unlock_audio(&mut self);
    fn hide_loading_screen(&mut self);
    fn set_loading_text(&mut self, text: &str);
}

/// Shared state the sub-components read and write.
pub struct SceneInteractionContext {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub pointer: PointerState,
    pub viewport: Vec2,
    /// Pivot for drift and orbit drag. A zoom only moves the camera's own
    /// look-at point.
    pub orbit_target: Vec3,
}

/// What changed during one frame tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub strobe: StrobeFrame,
    pub opened: Option<Panel>,
    pub loading_hidden: bool,
}

pub struct InteractionController {
    config: SceneConfig,
    ctx: SceneInteractionContext,
    hover: HoverState,
    drift: CameraDrift,
    orbit: OrbitDrag,
    zoom: ZoomSequencer,
    back: CameraTween,
    overlay: OverlayManager,
    lights: AmbientLightAnimator,
    loading: LoadingGate,
    reveal: Option<TypewriterReveal>,
    reveal_seed: u64,
    audio_unlocked: bool,
}

impl InteractionController {
    pub fn new(config: SceneConfig) -> Self {
        let mut scene = SceneGraph::new();
        let mut lights = AmbientLightAnimator::default();
        lights.attach(install_static_lights(&mut scene));

        let camera = Camera {
            eye: config.base_position,
            target: config.base_target,
            fovy_radians: config.fovy_deg.to_radians(),
            znear: config.znear,
            zfar: config.zfar,
            ..Camera::default()
        };

        Self {
            hover: HoverState::default(),
            drift: CameraDrift::new(config.base_position),
            orbit: OrbitDrag::new(config.base_position, config.base_target),
            zoom: ZoomSequencer::new(config.zoom_duration),
            back: CameraTween::new(config.return_duration),
            overlay: OverlayManager::default(),
            lights,
            loading: LoadingGate::new(config.loading_min_duration),
            reveal: None,
            reveal_seed: 0,
            audio_unlocked: false,
            ctx: SceneInteractionContext {
                scene,
                camera,
                pointer: PointerState::default(),
                viewport: Vec2::ZERO,
                orbit_target: config.base_target,
            },
            config,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.ctx.camera
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.ctx.scene
    }

    pub fn hovered(&self) -> Option<ObjectTag> {
        self.hover.target()
    }

    pub fn is_animating(&self) -> bool {
        self.zoom.is_animating()
    }

    pub fn is_returning(&self) -> bool {
        self.back.is_active()
    }

    pub fn is_dragging(&self) -> bool {
        self.orbit.is_active()
    }

    pub fn zoom(&self) -> &ZoomSequencer {
        &self.zoom
    }

    pub fn drift(&self) -> &CameraDrift {
        &self.drift
    }

    pub fn open_panel_id(&self) -> Option<Panel> {
        self.overlay.current()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.viewport = Vec2::new(width, height);
        self.ctx.camera.set_viewport(width, height);
    }

    pub fn attach_asset(
        &mut self,
        kind: AssetKind,
        meshes: &[MeshDesc],
        now: Duration,
    ) -> Result<AttachedBundle, SceneError> {
        let bundle = attach_bundle(&mut self.ctx.scene, kind, meshes)?;
        if kind == AssetKind::Room {
            self.loading.mark_loaded(now);
        }
        Ok(bundle)
    }

    pub fn asset_failed(&mut self, host: &mut impl InteractionHost, kind: AssetKind, reason: &str) {
        log::error!("[assets] {} failed: {}", kind.path(), reason);
        if let Some(text) = self.loading.mark_failed(kind) {
            host.set_loading_text(text);
        }
    }

    /// Pointer move: updates NDC, drift target and orbit drag, then re-runs
    /// hover detection. A zero-sized viewport ignores the event.
    pub fn on_pointer_move(&mut self, host: &mut impl InteractionHost, px: f32, py: f32) -> Option<HoverOutcome> {
        let Vec2 { x: w, y: h } = self.ctx.viewport;
        let ndc = self.ctx.pointer.update(px, py, w, h)?;
        if self.orbit.is_active() {
            self.ctx.camera.look_at(self.ctx.orbit_target);
            self.orbit.drag_to(&mut self.ctx.camera, Vec2::new(px, py), h);
        }
        self.drift.follow_pointer(ndc);

        let ray = self.ctx.camera.ray_through_ndc(ndc);
        let hits = self.ctx.scene.intersect_ray(&ray);
        let outcome = self.hover.update(&mut self.ctx.scene, &hits, &ray);
        host.set_cursor(outcome.cursor);
        Some(outcome)
    }

    /// Click on the scene. Returns the tag whose zoom started, if any.
    pub fn on_click(&mut self, host: &mut impl InteractionHost, px: f32, py: f32, now: Duration) -> Option<ObjectTag> {
        if !self.audio_unlocked {
            host.unlock_audio();
            self.audio_unlocked = true;
        }
        if self.zoom.is_animating() {
            log::debug!("[click] ignored, zoom in progress");
            return None;
        }
        let Vec2 { x: w, y: h } = self.ctx.viewport;
        let ndc = self.ctx.pointer.update(px, py, w, h)?;
        self.drift.follow_click(ndc);

        let ray = self.ctx.camera.ray_through_ndc(ndc);
        let hit = self
            .ctx
            .scene
            .intersect_ray(&ray)
            .into_iter()
            .find_map(|hit| self.ctx.scene.tag_of(hit.node).map(|tag| (tag, hit.point)))?;
        let (tag, point) = hit;

        let cue = tag.click_cue();
        host.play_cue(cue, cue.default_volume());
        self.back.cancel();
        self.orbit.end();
        self.orbit.enabled = false;
        self.zoom.begin(tag, point, self.ctx.camera.eye, now);
        log::info!("[click] {}", tag.name());
        Some(tag)
    }

    pub fn on_pointer_down(&mut self, px: f32, py: f32) {
        if self.zoom.is_animating() {
            return;
        }
        self.orbit.begin(Vec2::new(px, py));
    }

    pub fn on_pointer_up(&mut self) {
        self.orbit.end();
    }

    pub fn apply(&mut self, host: &mut impl InteractionHost, action: UiAction, now: Duration) {
        match action {
            UiAction::Close(panel) => self.close_panel(host, panel, now),
            UiAction::Navigate(to) => self.navigate(host, to, now),
            UiAction::Choose(to) => self.choose(host, to, now),
        }
    }

    pub fn open_panel(&mut self, host: &mut impl InteractionHost, panel: Panel, now: Duration) {
        self.overlay.open(host, panel);
        self.restart_reveal(panel, now);
    }

    /// Closes `panel` and eases the camera back to its rest pose.
    pub fn close_panel(&mut self, host: &mut impl InteractionHost, panel: Panel, now: Duration) {
        let outcome = self.overlay.close(host, panel);
        if panel == Panel::Typewriter {
            self.reveal = None;
        }
        if outcome.return_to_base {
            self.back.start(
                &self.ctx.camera,
                self.config.base_position,
                self.config.base_target,
                now,
            );
        }
    }

    pub fn navigate(&mut self, host: &mut impl InteractionHost, to: Panel, now: Duration) {
        let nav = self.overlay.navigate(host, to);
        host.play_cue(nav.cue, nav.cue.default_volume());
        self.restart_reveal(to, now);
    }

    pub fn choose(&mut self, host: &mut impl InteractionHost, to: Panel, now: Duration) {
        self.overlay.choose(host, to);
        self.restart_reveal(to, now);
    }

    fn restart_reveal(&mut self, panel: Panel, now: Duration) {
        self.reveal = (panel == Panel::Typewriter).then(|| {
            self.reveal_seed = self.reveal_seed.wrapping_add(1);
            TypewriterReveal::new(TYPEWRITER_TEXT, now, self.reveal_seed)
        });
    }

    /// One frame. The zoom owns the camera while it runs, then the return
    /// tween, then drift (suspended during an orbit drag).
    pub fn tick(&mut self, host: &mut impl InteractionHost, now: Duration) -> FrameOutput {
        let mut opened = None;
        if self.zoom.is_animating() {
            if let Some(done) = self.zoom.tick(&mut self.ctx.camera, now) {
                self.orbit.enabled = true;
                if let Some(agent) = self.ctx.scene.interactive(ObjectTag::Agent).map(|o| o.root) {
                    if let Err(e) = self.ctx.scene.set_visible(agent, true) {
                        log::warn!("[zoom] agent visibility: {}", e);
                    }
                }
                self.open_panel(host, done.on_complete, now);
                opened = Some(done.on_complete);
            }
        } else if self.back.is_active() {
            self.back.tick(&mut self.ctx.camera, now);
        } else if !self.orbit.is_active() {
            self.drift.tick(&mut self.ctx.camera, self.ctx.orbit_target);
        }

        let strobe = self.lights.tick(&mut self.ctx.scene);

        if let Some(reveal) = self.reveal.as_mut() {
            let step = reveal.tick(now);
            if !step.appended.is_empty() {
                host.append_text(Panel::Typewriter, &step.appended);
            }
            for _ in 0..step.cues {
                host.play_cue(SoundCue::Typewriter, TYPEWRITER_CUE_VOLUME);
            }
            if step.finished {
                self.reveal = None;
            }
        }

        let loading_hidden = self.loading.tick(now);
        if loading_hidden {
            host.hide_loading_screen();
        }

        FrameOutput {
            strobe,
            opened,
            loading_hidden,
        }
    }
}
