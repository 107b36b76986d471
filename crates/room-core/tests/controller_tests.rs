mod common;

use common::*;
use glam::{Vec2, Vec3};
use room_core::constants::*;
use room_core::loading::AssetKind;
use room_core::typewriter::TYPEWRITER_TEXT;
use room_core::{InteractionController, ObjectTag, Panel, SceneConfig, SoundCue, UiAction};

fn zoom_into(c: &mut InteractionController, host: &mut RecordingHost, world: Vec3) {
    let p = screen_of(c, world);
    assert!(c.on_click(host, p.x, p.y, ms(0)).is_some());
    assert!(c.tick(host, ms(3000)).opened.is_some());
}

#[test]
fn closing_agent_panel_eases_back_to_base() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    zoom_into(&mut c, &mut host, AGENT_TORSO);
    assert_eq!(host.mounted, vec![Panel::Agent]);

    c.apply(&mut host, UiAction::Close(Panel::Agent), ms(4000));
    assert!(host.mounted.is_empty());
    assert!(c.is_returning());

    let start = c.camera().eye;
    c.tick(&mut host, ms(4750));
    let mid = c.camera().eye;
    // ease-out covers more than half the way by the midpoint
    assert!(mid.distance(BASE_CAMERA_POSITION) < 0.5 * start.distance(BASE_CAMERA_POSITION));

    c.tick(&mut host, ms(5500));
    assert!(approx(c.camera().eye, BASE_CAMERA_POSITION));
    assert!(approx(c.camera().target, BASE_CAMERA_TARGET));
    assert!(!c.is_returning());
}

#[test]
fn restarting_return_resets_its_timer() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    zoom_into(&mut c, &mut host, MIRROR_CENTER);
    c.close_panel(&mut host, Panel::Social, ms(4000));
    c.tick(&mut host, ms(5000));
    c.close_panel(&mut host, Panel::Social, ms(5000));
    c.tick(&mut host, ms(5600));
    assert!(c.is_returning());
    c.tick(&mut host, ms(6500));
    assert!(!c.is_returning());
}

#[test]
fn centred_pointer_means_no_drift() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    c.on_pointer_move(&mut host, WIDTH / 2.0, HEIGHT / 2.0);
    assert_eq!(c.drift().offset(), Vec3::ZERO);
    for t in 0..50 {
        c.tick(&mut host, ms(t * 16));
    }
    assert!(approx(c.camera().eye, BASE_CAMERA_POSITION));
}

#[test]
fn drift_converges_without_overshoot() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    c.on_pointer_move(&mut host, WIDTH, 0.0);
    let target = c.drift().target();
    assert!(approx(target, BASE_CAMERA_POSITION + Vec3::new(1.2, 0.5, 0.0)));

    let mut last = c.camera().eye.distance(target);
    for t in 0..400 {
        c.tick(&mut host, ms(t * 16));
        let eye = c.camera().eye;
        let d = eye.distance(target);
        assert!(d <= last + 1e-6);
        assert!(eye.x <= target.x + 1e-5);
        last = d;
    }
    assert!(last < 1e-3);
}

#[test]
fn drift_is_suspended_while_zooming_and_dragging() {
    let mut c = furnished();
    let mut host = RecordingHost::default();

    c.on_pointer_down(100.0, 100.0);
    assert!(c.is_dragging());
    c.on_pointer_move(&mut host, 140.0, 100.0);
    let dragged = c.camera().eye;
    c.tick(&mut host, ms(16));
    assert_eq!(c.camera().eye, dragged);
    c.on_pointer_up();

    let p = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);
    c.on_click(&mut host, p.x, p.y, ms(100));
    c.on_pointer_down(10.0, 10.0);
    assert!(!c.is_dragging());
}

#[test]
fn drift_after_zoom_aims_back_at_orbit_target() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    zoom_into(&mut c, &mut host, MIRROR_CENTER);
    assert!(c.camera().target.distance(BASE_CAMERA_TARGET) > 0.5);

    c.tick(&mut host, ms(3016));
    assert!(approx(c.camera().target, BASE_CAMERA_TARGET));
}

#[test]
fn orbit_drag_keeps_distance_and_yaw_envelope() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    let radius = c.camera().eye.distance(c.camera().target);
    c.on_pointer_down(600.0, 300.0);
    for step in 1..40 {
        c.on_pointer_move(&mut host, 600.0 + step as f32 * 40.0, 300.0);
    }
    let cam = c.camera();
    assert!((cam.eye.distance(cam.target) - radius).abs() < 1e-4);

    let base = BASE_CAMERA_POSITION - BASE_CAMERA_TARGET;
    let now = cam.eye - cam.target;
    let yaw = |v: Vec3| v.x.atan2(v.z);
    assert!((yaw(now) - yaw(base)).abs() <= ORBIT_YAW_LIMIT_RAD + 1e-4);
}

#[test]
fn typewriter_panel_types_its_text() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    zoom_into(&mut c, &mut host, TYPEWRITER_CENTER);
    assert_eq!(host.mounted, vec![Panel::Typewriter]);

    c.tick(&mut host, ms(3499));
    assert!(host.typed.is_empty());
    c.tick(&mut host, ms(3500));
    assert_eq!(host.typed, "P");

    c.tick(&mut host, ms(60_000));
    assert_eq!(host.typed, TYPEWRITER_TEXT);
    let soft = host
        .cues
        .iter()
        .filter(|(cue, v)| *cue == SoundCue::Typewriter && *v == TYPEWRITER_CUE_VOLUME)
        .count();
    assert_eq!(soft, TYPEWRITER_TEXT.chars().count() / 3);
}

#[test]
fn closing_typewriter_stops_the_reveal() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    zoom_into(&mut c, &mut host, TYPEWRITER_CENTER);
    c.tick(&mut host, ms(3600));
    c.close_panel(&mut host, Panel::Typewriter, ms(3600));
    let typed = host.typed.clone();
    // append_text would panic on an unmounted panel
    c.tick(&mut host, ms(10_000));
    assert_eq!(host.typed, typed);
}

#[test]
fn loading_screen_waits_for_room_and_minimum() {
    let mut c = InteractionController::new(SceneConfig::default());
    let mut host = RecordingHost::default();
    c.tick(&mut host, ms(5000));
    assert!(!host.loading_hidden);

    c.attach_asset(AssetKind::Room, &room_meshes(), ms(5200)).unwrap();
    assert!(c.tick(&mut host, ms(5200)).loading_hidden);
    assert!(host.loading_hidden);
    assert!(!c.tick(&mut host, ms(5300)).loading_hidden);
}

#[test]
fn mirror_failure_replaces_loading_text() {
    let mut c = InteractionController::new(SceneConfig::default());
    let mut host = RecordingHost::default();
    c.asset_failed(&mut host, AssetKind::Agent, "404");
    assert_eq!(host.loading_text, None);
    c.asset_failed(&mut host, AssetKind::Mirror, "404");
    assert_eq!(host.loading_text.as_deref(), Some("Error loading mirror model"));
}

#[test]
fn objects_are_unpickable_until_attached() {
    let mut c = InteractionController::new(SceneConfig::default());
    c.resize(WIDTH, HEIGHT);
    let mut host = RecordingHost::default();
    assert_eq!(c.on_click(&mut host, WIDTH / 2.0, HEIGHT / 2.0, ms(0)), None);
    c.attach_asset(AssetKind::Room, &room_meshes(), ms(10)).unwrap();
    assert_eq!(
        c.on_click(&mut host, WIDTH / 2.0, HEIGHT / 2.0, ms(20)),
        Some(ObjectTag::Papers)
    );
}

#[test]
fn strobe_drives_scene_lights() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    let mut saw_blue = false;
    let mut saw_red = false;
    for t in 0..400 {
        let f = c.tick(&mut host, ms(t * 16)).strobe;
        saw_blue |= f.blue > 0.0;
        saw_red |= f.red > 0.0;
        let lit: Vec<f32> = c
            .scene()
            .lights()
            .iter()
            .map(|l| l.intensity)
            .filter(|i| *i == STROBE_MAX_INTENSITY)
            .collect();
        assert!(lit.len() <= 1);
    }
    assert!(saw_blue && saw_red);
}
