mod common;

use common::*;
use glam::{Mat4, Vec3};
use room_core::geometry::{Aabb, Ray};
use room_core::hover::{agent_proximity, pick_hover_target, Cursor, HoverState};
use room_core::{InteractionController, Material, ObjectTag, SceneGraph, SceneNode};

fn highlighted(c: &InteractionController) -> Vec<ObjectTag> {
    c.scene()
        .interactive_objects()
        .iter()
        .filter(|o| {
            o.materials
                .iter()
                .any(|m| c.scene().material(*m).unwrap().emissive != [0.0; 3])
        })
        .map(|o| o.tag)
        .collect()
}

#[test]
fn centre_of_screen_hovers_papers() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    let out = c.on_pointer_move(&mut host, WIDTH / 2.0, HEIGHT / 2.0).unwrap();
    assert_eq!(out.target, Some(ObjectTag::Papers));
    assert_eq!(host.cursor, Cursor::Pointer);
    assert_eq!(highlighted(&c), vec![ObjectTag::Papers]);
}

#[test]
fn at_most_one_highlight_across_moves() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    let points = [
        screen_of(&c, MIRROR_CENTER),
        screen_of(&c, AGENT_TORSO),
        screen_of(&c, TYPEWRITER_CENTER),
        glam::Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
        glam::Vec2::new(5.0, 5.0),
    ];
    let expected = [
        Some(ObjectTag::Mirror),
        Some(ObjectTag::Agent),
        Some(ObjectTag::Typewriter),
        Some(ObjectTag::Papers),
        None,
    ];
    for (p, want) in points.iter().zip(expected) {
        let out = c.on_pointer_move(&mut host, p.x, p.y).unwrap();
        assert_eq!(out.target, want);
        let lit = highlighted(&c);
        assert!(lit.len() <= 1);
        assert_eq!(lit.first().copied(), want);
    }
    assert_eq!(host.cursor, Cursor::Default);
}

#[test]
fn highlight_colours_follow_category() {
    let mut c = furnished();
    let mut host = RecordingHost::default();
    let p = screen_of(&c, AGENT_TORSO);
    c.on_pointer_move(&mut host, p.x, p.y);
    let agent = c.scene().interactive(ObjectTag::Agent).unwrap();
    for m in &agent.materials {
        assert_eq!(c.scene().material(*m).unwrap().emissive, [0.2; 3]);
    }

    let p = screen_of(&c, MIRROR_CENTER);
    c.on_pointer_move(&mut host, p.x, p.y);
    let mirror = c.scene().interactive(ObjectTag::Mirror).unwrap();
    assert_eq!(c.scene().material(mirror.materials[0]).unwrap().emissive, [0.267; 3]);
}

#[test]
fn zero_sized_viewport_ignores_moves() {
    let mut c = furnished();
    c.resize(0.0, 0.0);
    let mut host = RecordingHost::default();
    assert!(c.on_pointer_move(&mut host, 10.0, 10.0).is_none());
    assert!(highlighted(&c).is_empty());
}

#[test]
fn proximity_probe_uses_fixed_landmarks() {
    // ten units along +z lands on the torso landmark
    let ray = Ray::new(Vec3::new(-2.1, 1.0, -11.1), Vec3::Z);
    assert!(agent_proximity(&ray));
    let away = Ray::new(Vec3::new(5.0, 1.0, -11.1), Vec3::Z);
    assert!(!agent_proximity(&away));
}

/// Ray whose point ten units out sits on the torso landmark.
fn ray_at_torso() -> Ray {
    Ray::new(Vec3::new(-2.1, 1.0, -11.1), Vec3::Z)
}

/// An untagged wall across the ray, optionally with an agent placed well off
/// to the side so the ray never touches its bounds.
fn wall_scene(with_agent: bool) -> SceneGraph {
    let mut scene = SceneGraph::new();
    let mat = scene.add_material(Material::default());
    scene.add_node(SceneNode::mesh(
        "wall",
        Mat4::IDENTITY,
        Aabb::new(Vec3::new(-4.0, -1.0, -6.1), Vec3::new(4.0, 3.0, -6.0)),
        mat,
    ));
    if with_agent {
        let agent_mat = scene.add_material(Material::default());
        let agent = scene.add_node(SceneNode::mesh(
            "agent",
            Mat4::IDENTITY,
            Aabb::new(Vec3::new(40.0, 0.0, 40.0), Vec3::new(41.0, 2.0, 41.0)),
            agent_mat,
        ));
        scene.register_interactive(ObjectTag::Agent, agent).unwrap();
    }
    scene
}

#[test]
fn untagged_hit_near_agent_falls_back_to_agent() {
    let mut scene = wall_scene(true);
    let ray = ray_at_torso();
    let hits = scene.intersect_ray(&ray);
    assert_eq!(hits.len(), 1);
    assert!(scene.tag_of(hits[0].node).is_none());

    let mut hover = HoverState::default();
    let out = hover.update(&mut scene, &hits, &ray);
    assert_eq!(out.target, Some(ObjectTag::Agent));
    assert_eq!(out.cursor, Cursor::Pointer);
}

#[test]
fn proximity_fallback_needs_the_agent_loaded() {
    let scene = wall_scene(false);
    let ray = ray_at_torso();
    let hits = scene.intersect_ray(&ray);
    assert_eq!(hits.len(), 1);
    assert_eq!(pick_hover_target(&scene, &hits, &ray), None);
}

#[test]
fn proximity_fallback_needs_a_hit() {
    let mut scene = wall_scene(true);
    let ray = ray_at_torso();
    assert!(agent_proximity(&ray));

    let mut hover = HoverState::default();
    let out = hover.update(&mut scene, &[], &ray);
    assert_eq!(out.target, None);
    assert_eq!(out.cursor, Cursor::Default);
}
