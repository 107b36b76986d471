mod common;

use common::*;
use glam::Vec3;
use room_core::assembly::{attach_bundle, install_static_lights, is_papers_mesh};
use room_core::loading::AssetKind;
use room_core::{LightKind, ObjectTag, SceneError, SceneGraph};

#[test]
fn papers_are_found_by_name_or_parent() {
    assert!(is_papers_mesh(&mesh("Object_8", None, Vec3::ZERO, Vec3::ONE)));
    assert!(is_papers_mesh(&mesh("sheet", Some("papers_3"), Vec3::ZERO, Vec3::ONE)));
    assert!(!is_papers_mesh(&mesh("desk", Some("room"), Vec3::ZERO, Vec3::ONE)));
}

#[test]
fn room_tags_papers_and_leaves_the_rest_untagged() {
    let mut scene = SceneGraph::new();
    let bundle = attach_bundle(&mut scene, AssetKind::Room, &room_meshes()).unwrap();
    assert_eq!(scene.tag_of(bundle.meshes[0]), None);
    assert_eq!(scene.tag_of(bundle.meshes[1]), Some(ObjectTag::Papers));

    let papers = scene.interactive(ObjectTag::Papers).unwrap();
    assert_eq!(papers.materials.len(), 1);
    let floor_mat = scene.node(bundle.meshes[0]).unwrap().material.unwrap();
    assert_ne!(papers.materials[0], floor_mat);
}

#[test]
fn commode_is_shrunk() {
    let mut scene = SceneGraph::new();
    let meshes = [mesh("Grey_Commode_01", None, Vec3::ZERO, Vec3::ONE)];
    let bundle = attach_bundle(&mut scene, AssetKind::Room, &meshes).unwrap();
    let m = scene.world_transform(bundle.meshes[0]);
    assert!((m.transform_point3(Vec3::ONE) - Vec3::splat(0.64)).length() < 1e-5);
}

#[test]
fn mirror_parts_share_one_material() {
    let mut scene = SceneGraph::new();
    let meshes = [
        mesh("frame", None, Vec3::ZERO, Vec3::ONE),
        mesh("glass", None, Vec3::ZERO, Vec3::ONE),
    ];
    let before = scene.lights().len();
    attach_bundle(&mut scene, AssetKind::Mirror, &meshes).unwrap();
    let mirror = scene.interactive(ObjectTag::Mirror).unwrap();
    assert_eq!(mirror.materials.len(), 1);
    let mat = scene.material(mirror.materials[0]).unwrap();
    assert_eq!((mat.roughness, mat.metalness), (0.1, 0.9));
    assert_eq!(scene.lights().len(), before + 1);
}

#[test]
fn agent_meshes_get_their_own_materials() {
    let mut scene = SceneGraph::new();
    attach_bundle(&mut scene, AssetKind::Agent, &agent_meshes()).unwrap();
    assert_eq!(scene.interactive(ObjectTag::Agent).unwrap().materials.len(), 2);
}

#[test]
fn typewriter_brings_point_and_ambient_light() {
    let mut scene = SceneGraph::new();
    attach_bundle(&mut scene, AssetKind::Typewriter, &typewriter_meshes()).unwrap();
    let kinds: Vec<_> = scene.lights().iter().map(|l| l.kind).collect();
    assert!(matches!(kinds[0], LightKind::Point { .. }));
    assert_eq!(kinds[1], LightKind::Ambient);
    assert!((scene.lights()[0].position - Vec3::new(1.15, 1.40, -1.63)).length() < 1e-5);
}

#[test]
fn empty_bundle_is_rejected() {
    let mut scene = SceneGraph::new();
    let err = attach_bundle(&mut scene, AssetKind::Agent, &[]).unwrap_err();
    assert_eq!(err, SceneError::EmptyMesh("models/agent.glb".into()));
    assert!(scene.interactive(ObjectTag::Agent).is_none());
}

#[test]
fn strobes_start_dark() {
    let mut scene = SceneGraph::new();
    let ids = install_static_lights(&mut scene);
    for id in [ids.blue, ids.red, ids.blue_glow, ids.red_glow] {
        assert_eq!(scene.light_mut(id).unwrap().intensity, 0.0);
    }
    assert_eq!(scene.lights().len(), 9);
}
