//! Flat scene graph: nodes with parent links, shared materials, lights and
//! ray picking against world-space mesh bounds.

use crate::error::SceneError;
use crate::geometry::{Aabb, Ray};
use crate::tag::ObjectTag;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [0.8, 0.8, 0.8, 1.0],
            emissive: [0.0; 3],
            roughness: 0.8,
            metalness: 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub parent: Option<NodeId>,
    pub local: Mat4,
    pub tag: Option<ObjectTag>,
    pub material: Option<MaterialId>,
    /// Local-space mesh bounds; `None` for grouping nodes.
    pub bounds: Option<Aabb>,
    pub visible: bool,
}

impl SceneNode {
    pub fn group(name: impl Into<String>, local: Mat4) -> Self {
        Self {
            name: name.into(),
            parent: None,
            local,
            tag: None,
            material: None,
            bounds: None,
            visible: true,
        }
    }

    pub fn mesh(name: impl Into<String>, local: Mat4, bounds: Aabb, material: MaterialId) -> Self {
        Self {
            bounds: Some(bounds),
            material: Some(material),
            ..Self::group(name, local)
        }
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Point { range: f32 },
    Spot { range: f32, angle: f32, penumbra: f32, aim: Vec3 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

/// A tagged subtree and the materials a highlight writes to.
#[derive(Clone, Debug)]
pub struct InteractiveObject {
    pub tag: ObjectTag,
    pub root: NodeId,
    pub materials: SmallVec<[MaterialId; 4]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

#[derive(Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    materials: Vec<Material>,
    lights: Vec<Light>,
    interactive: SmallVec<[InteractiveObject; 4]>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    pub fn add_light(&mut self, light: Light) -> LightId {
        let id = LightId(self.lights.len() as u32);
        self.lights.push(light);
        id
    }

    pub fn node(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(SceneError::UnknownNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or(SceneError::UnknownNode(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    pub fn material(&self, id: MaterialId) -> Result<&Material, SceneError> {
        self.materials
            .get(id.0 as usize)
            .ok_or(SceneError::UnknownMaterial(id))
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Result<&mut Material, SceneError> {
        self.materials
            .get_mut(id.0 as usize)
            .ok_or(SceneError::UnknownMaterial(id))
    }

    pub fn set_emissive(&mut self, id: MaterialId, color: [f32; 3]) -> Result<(), SceneError> {
        self.material_mut(id)?.emissive = color;
        Ok(())
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0 as usize)
    }

    /// Iterates `id` and its ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let cur = next?;
            let node = self.nodes.get(cur.0 as usize)?;
            next = node.parent;
            Some((cur, node))
        })
    }

    pub fn world_transform(&self, id: NodeId) -> Mat4 {
        self.ancestors(id)
            .fold(Mat4::IDENTITY, |acc, (_, node)| node.local * acc)
    }

    /// A node is drawn and pickable only when it and all its ancestors are visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.ancestors(id).all(|(_, n)| n.visible)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<(), SceneError> {
        self.node_mut(id)?.visible = visible;
        Ok(())
    }

    /// Capability lookup: the tag of the node or of its nearest tagged ancestor.
    pub fn tag_of(&self, id: NodeId) -> Option<ObjectTag> {
        self.ancestors(id).find_map(|(_, n)| n.tag)
    }

    pub fn is_descendant_of(&self, id: NodeId, root: NodeId) -> bool {
        self.ancestors(id).any(|(a, _)| a == root)
    }

    /// Materials of every mesh in the subtree rooted at `root`, deduplicated.
    pub fn subtree_materials(&self, root: NodeId) -> SmallVec<[MaterialId; 4]> {
        let mut out: SmallVec<[MaterialId; 4]> = SmallVec::new();
        for (id, node) in self.nodes() {
            if let Some(m) = node.material {
                if self.is_descendant_of(id, root) && !out.contains(&m) {
                    out.push(m);
                }
            }
        }
        out
    }

    /// Tags `root` and records its subtree materials for highlighting.
    /// Re-registering a tag replaces the previous object.
    pub fn register_interactive(
        &mut self,
        tag: ObjectTag,
        root: NodeId,
    ) -> Result<&InteractiveObject, SceneError> {
        self.node_mut(root)?.tag = Some(tag);
        let materials = self.subtree_materials(root);
        self.interactive.retain(|o| o.tag != tag);
        self.interactive.push(InteractiveObject {
            tag,
            root,
            materials,
        });
        log::debug!("[scene] registered {} at {:?}", tag.name(), root);
        // just pushed
        Ok(&self.interactive[self.interactive.len() - 1])
    }

    pub fn interactive(&self, tag: ObjectTag) -> Option<&InteractiveObject> {
        self.interactive.iter().find(|o| o.tag == tag)
    }

    pub fn interactive_objects(&self) -> &[InteractiveObject] {
        &self.interactive
    }

    /// Writes `color` to every highlight material of the object, if loaded.
    pub fn set_object_emissive(&mut self, tag: ObjectTag, color: [f32; 3]) -> Result<(), SceneError> {
        let Some(obj) = self.interactive(tag) else {
            return Ok(());
        };
        let materials = obj.materials.clone();
        for m in materials {
            self.set_emissive(m, color)?;
        }
        Ok(())
    }

    /// All visible mesh hits along `ray`, nearest first. Picking is bounds-only:
    /// each mesh is tested against its world-space AABB, so `point` is where the
    /// ray enters the box, not the surface.
    pub fn intersect_ray(&self, ray: &Ray) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = self
            .nodes()
            .filter_map(|(id, node)| {
                let bounds = node.bounds?;
                if !self.is_visible(id) {
                    return None;
                }
                let world = bounds.transformed(&self.world_transform(id));
                let t = world.intersect_ray(ray)?;
                Some(Intersection {
                    node: id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    #[test]
    fn tag_is_inherited_from_ancestor() {
        let mut scene = SceneGraph::new();
        let mat = scene.add_material(Material::default());
        let root = scene.add_node(SceneNode::group("mirror", Mat4::IDENTITY));
        let frame = scene.add_node(SceneNode::group("frame", Mat4::IDENTITY).with_parent(root));
        let glass = scene.add_node(SceneNode::mesh("glass", Mat4::IDENTITY, unit_box(), mat).with_parent(frame));
        scene.register_interactive(ObjectTag::Mirror, root).unwrap();
        assert_eq!(scene.tag_of(glass), Some(ObjectTag::Mirror));
        assert_eq!(scene.interactive(ObjectTag::Mirror).unwrap().materials.as_slice(), &[mat]);
    }

    #[test]
    fn hits_are_sorted_and_respect_parent_transform() {
        let mut scene = SceneGraph::new();
        let mat = scene.add_material(Material::default());
        let far_root = scene.add_node(SceneNode::group("far", Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0))));
        scene.add_node(SceneNode::mesh("far_box", Mat4::IDENTITY, unit_box(), mat).with_parent(far_root));
        let near = scene.add_node(SceneNode::mesh(
            "near_box",
            Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0)),
            unit_box(),
            mat,
        ));
        let hits = scene.intersect_ray(&Ray::new(Vec3::ZERO, -Vec3::Z));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node, near);
        assert!((hits[0].distance - 2.5).abs() < 1e-5);
        assert!((hits[1].distance - 9.5).abs() < 1e-5);
    }

    #[test]
    fn hidden_ancestor_hides_subtree_from_picking() {
        let mut scene = SceneGraph::new();
        let mat = scene.add_material(Material::default());
        let root = scene.add_node(SceneNode::group("agent", Mat4::from_translation(-3.0 * Vec3::Z)));
        scene.add_node(SceneNode::mesh("body", Mat4::IDENTITY, unit_box(), mat).with_parent(root));
        scene.set_visible(root, false).unwrap();
        assert!(scene.intersect_ray(&Ray::new(Vec3::ZERO, -Vec3::Z)).is_empty());
    }

    #[test]
    fn unknown_ids_are_errors() {
        let mut scene = SceneGraph::new();
        assert_eq!(scene.set_visible(NodeId(7), true), Err(SceneError::UnknownNode(NodeId(7))));
        assert_eq!(
            scene.set_emissive(MaterialId(1), [0.0; 3]),
            Err(SceneError::UnknownMaterial(MaterialId(1)))
        );
    }
}
