//! Scene assembly: turns decoded mesh lists into tagged scene-graph subtrees
//! and installs the fixed room lighting.

use crate::error::SceneError;
use crate::geometry::Aabb;
use crate::lights::StrobeLights;
use crate::loading::AssetKind;
use crate::scene::{Light, LightKind, Material, NodeId, SceneGraph, SceneNode};
use crate::tag::ObjectTag;
use glam::{Mat4, Quat, Vec3};

const PURPLE: [f32; 3] = [0.165, 0.027, 0.341]; // 0x2a0757
const LAMP_WARM: [f32; 3] = [1.0, 0.949, 0.902]; // 0xfff2e6
const STROBE_BLUE: [f32; 3] = [0.0, 0.267, 1.0]; // 0x0044ff
const STROBE_RED: [f32; 3] = [1.0, 0.0, 0.0];

const LAMP_BULB: Vec3 = Vec3::new(0.80, 1.15, 0.08);
const LAMP_AIM: Vec3 = Vec3::new(0.1, 1.25, 0.08);

/// One decoded mesh, positioned relative to its bundle root.
#[derive(Clone, Debug)]
pub struct MeshDesc {
    pub name: String,
    pub parent_name: Option<String>,
    pub transform: Mat4,
    pub bounds: Aabb,
    pub base_color: [f32; 4],
}

/// Root transform applied to a bundle when it is attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
}

impl Placement {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

impl AssetKind {
    pub fn placement(self) -> Placement {
        match self {
            AssetKind::Room => Placement {
                position: Vec3::ZERO,
                scale: 1.0,
                yaw: 0.0,
            },
            AssetKind::Mirror => Placement {
                position: Vec3::new(-1.1, 2.17, -2.2),
                scale: 0.32,
                yaw: 3f32.to_radians(),
            },
            AssetKind::Typewriter => Placement {
                position: Vec3::new(1.15, 1.20, -1.63),
                scale: 15.0,
                yaw: std::f32::consts::FRAC_PI_2,
            },
            AssetKind::Agent => Placement {
                position: crate::constants::AGENT_BASE_POSITION,
                scale: 0.75,
                yaw: 2.5 * std::f32::consts::PI,
            },
        }
    }

    pub fn tag(self) -> Option<ObjectTag> {
        match self {
            AssetKind::Room => None,
            AssetKind::Mirror => Some(ObjectTag::Mirror),
            AssetKind::Typewriter => Some(ObjectTag::Typewriter),
            AssetKind::Agent => Some(ObjectTag::Agent),
        }
    }
}

/// Nodes created for one bundle. `meshes[i]` belongs to the i-th input mesh.
#[derive(Clone, Debug)]
pub struct AttachedBundle {
    pub kind: AssetKind,
    pub root: NodeId,
    pub meshes: Vec<NodeId>,
}

pub fn is_papers_mesh(mesh: &MeshDesc) -> bool {
    mesh.name == "Object_8" || mesh.parent_name.as_deref() == Some("papers_3")
}

fn is_commode(mesh: &MeshDesc) -> bool {
    mesh.name.to_lowercase().contains("commode")
}

/// Adds a bundle under a new root node, applies its material policy,
/// registers its interactive object and adds its accent lights.
pub fn attach_bundle(
    scene: &mut SceneGraph,
    kind: AssetKind,
    meshes: &[MeshDesc],
) -> Result<AttachedBundle, SceneError> {
    if meshes.is_empty() {
        return Err(SceneError::EmptyMesh(kind.path().to_string()));
    }
    let placement = kind.placement();
    let root = scene.add_node(SceneNode::group(kind.path(), placement.matrix()));

    let attached = match kind {
        AssetKind::Room => attach_room(scene, root, meshes)?,
        AssetKind::Mirror | AssetKind::Typewriter => {
            let (color, roughness, metalness) = if kind == AssetKind::Mirror {
                ([0.8, 0.8, 0.8, 1.0], 0.1, 0.9) // 0xcccccc
            } else {
                ([0.267, 0.267, 0.267, 1.0], 0.5, 0.8) // 0x444444
            };
            let shared = scene.add_material(Material {
                base_color: color,
                roughness,
                metalness,
                ..Material::default()
            });
            meshes
                .iter()
                .map(|m| scene.add_node(SceneNode::mesh(&m.name, m.transform, m.bounds, shared).with_parent(root)))
                .collect()
        }
        AssetKind::Agent => meshes
            .iter()
            .map(|m| {
                let mat = scene.add_material(Material {
                    base_color: m.base_color,
                    roughness: 0.7,
                    metalness: 0.1,
                    ..Material::default()
                });
                scene.add_node(SceneNode::mesh(&m.name, m.transform, m.bounds, mat).with_parent(root))
            })
            .collect(),
    };

    if let Some(tag) = kind.tag() {
        scene.register_interactive(tag, root)?;
    }
    add_accent_lights(scene, kind, &placement);
    log::info!("[assets] attached {} ({} meshes)", kind.path(), meshes.len());

    Ok(AttachedBundle {
        kind,
        root,
        meshes: attached,
    })
}

fn attach_room(scene: &mut SceneGraph, root: NodeId, meshes: &[MeshDesc]) -> Result<Vec<NodeId>, SceneError> {
    let papers_root = meshes
        .iter()
        .any(is_papers_mesh)
        .then(|| scene.add_node(SceneNode::group("papers", Mat4::IDENTITY).with_parent(root)));

    let mut out = Vec::with_capacity(meshes.len());
    for m in meshes {
        let mut local = m.transform;
        if is_commode(m) {
            local *= Mat4::from_scale(Vec3::splat(0.64));
        }
        // every room mesh gets its own material, so the papers' is already a clone
        let mat = scene.add_material(Material {
            base_color: m.base_color,
            ..Material::default()
        });
        let parent = match papers_root {
            Some(p) if is_papers_mesh(m) => p,
            _ => root,
        };
        out.push(scene.add_node(SceneNode::mesh(&m.name, local, m.bounds, mat).with_parent(parent)));
    }

    if let Some(p) = papers_root {
        scene.register_interactive(ObjectTag::Papers, p)?;
    }
    Ok(out)
}

fn add_accent_lights(scene: &mut SceneGraph, kind: AssetKind, placement: &Placement) {
    match kind {
        AssetKind::Mirror => {
            scene.add_light(point(PURPLE, 1.2, 2.0, Vec3::new(-1.1, 2.4, -2.2)));
        }
        AssetKind::Typewriter => {
            scene.add_light(point(PURPLE, 0.3375, 2.0, placement.position + Vec3::Y * 0.2));
            scene.add_light(Light {
                kind: LightKind::Ambient,
                color: PURPLE,
                intensity: 0.075,
                position: Vec3::ZERO,
            });
        }
        AssetKind::Room | AssetKind::Agent => {}
    }
}

fn point(color: [f32; 3], intensity: f32, range: f32, position: Vec3) -> Light {
    Light {
        kind: LightKind::Point { range },
        color,
        intensity,
        position,
    }
}

fn spot(color: [f32; 3], intensity: f32, range: f32, angle: f32, penumbra: f32, position: Vec3, aim: Vec3) -> Light {
    Light {
        kind: LightKind::Spot {
            range,
            angle,
            penumbra,
            aim,
        },
        color,
        intensity,
        position,
    }
}

/// Room lighting present before any asset loads: near-black ambient, the desk
/// lamp and the two window strobes (initially dark).
pub fn install_static_lights(scene: &mut SceneGraph) -> StrobeLights {
    use std::f32::consts::PI;

    scene.add_light(Light {
        kind: LightKind::Ambient,
        color: [0.02; 3], // 0x050505
        intensity: 0.02,
        position: Vec3::ZERO,
    });
    scene.add_light(spot(LAMP_WARM, 0.8, 6.8, PI / 8.5, 0.2, LAMP_BULB, LAMP_AIM));
    scene.add_light(point(LAMP_WARM, 0.3, 1.5, LAMP_BULB));
    scene.add_light(point(LAMP_WARM, 0.1, 2.5, LAMP_BULB));
    scene.add_light(spot(LAMP_WARM, 0.03, 4.0, PI / 6.0, 0.3, LAMP_BULB, LAMP_AIM));

    let blue_at = Vec3::new(4.5, 2.8, -6.0);
    let red_at = Vec3::new(5.0, 2.8, -6.0);
    let window = Vec3::new(0.0, 0.0, 3.0);
    StrobeLights {
        blue: scene.add_light(spot(STROBE_BLUE, 0.0, 20.0, PI / 6.0, 0.2, blue_at, blue_at + window)),
        red: scene.add_light(spot(STROBE_RED, 0.0, 20.0, PI / 6.0, 0.2, red_at, red_at + window)),
        blue_glow: scene.add_light(point(STROBE_BLUE, 0.0, 4.0, blue_at + window)),
        red_glow: scene.add_light(point(STROBE_RED, 0.0, 4.0, red_at + window)),
    }
}
