// GPU-side layouts shared with scene.wgsl. No wgpu types here, so host
// tests can include this file directly.

use crate::constants::MAX_LIGHTS;
use glam::Mat4;
use room_core::{Camera, Light, LightKind, Material};

pub const LIGHT_AMBIENT: f32 = 0.0;
pub const LIGHT_POINT: f32 = 1.0;
pub const LIGHT_SPOT: f32 = 2.0;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn interleave(positions: &[[f32; 3]], normals: &[[f32; 3]]) -> Vec<Vertex> {
        positions
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex {
                position: *p,
                normal: normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    /// xyz position, w = kind
    pub position_kind: [f32; 4],
    /// rgb, w = intensity
    pub color_intensity: [f32; 4],
    /// normalized spot direction, w = range (0 = unbounded)
    pub dir_range: [f32; 4],
    /// cos outer, cos inner
    pub cone: [f32; 4],
}

impl LightPacked {
    pub fn from_light(light: &Light) -> Self {
        let (kind, dir, range, cone) = match light.kind {
            LightKind::Ambient => (LIGHT_AMBIENT, [0.0; 3], 0.0, [0.0; 4]),
            LightKind::Point { range } => (LIGHT_POINT, [0.0; 3], range, [0.0; 4]),
            LightKind::Spot {
                range,
                angle,
                penumbra,
                aim,
            } => {
                let dir = (aim - light.position).normalize_or_zero();
                let outer = angle.cos();
                let inner = (angle * (1.0 - penumbra.clamp(0.0, 1.0))).cos();
                (LIGHT_SPOT, dir.to_array(), range, [outer, inner, 0.0, 0.0])
            }
        };
        let p = light.position;
        Self {
            position_kind: [p.x, p.y, p.z, kind],
            color_intensity: [light.color[0], light.color[1], light.color[2], light.intensity],
            dir_range: [dir[0], dir[1], dir[2], range],
            cone,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// x = light count
    pub counts: [u32; 4],
    pub lights: [LightPacked; MAX_LIGHTS],
}

impl FrameUniforms {
    /// Packs the camera and the first `MAX_LIGHTS` lights. Dark lights are
    /// skipped so strobes in their off phase do not take a slot.
    pub fn new(camera: &Camera, lights: &[Light]) -> Self {
        let mut packed = [LightPacked::default(); MAX_LIGHTS];
        let mut count = 0;
        for light in lights.iter().filter(|l| l.intensity > 0.0) {
            if count == MAX_LIGHTS {
                log::debug!("[render] more lights than slots, dropping the rest");
                break;
            }
            packed[count] = LightPacked::from_light(light);
            count += 1;
        }
        let e = camera.eye;
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: [e.x, e.y, e.z, 1.0],
            counts: [count as u32, 0, 0, 0],
            lights: packed,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniforms {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub base_color: [f32; 4],
    /// rgb emissive, w = roughness
    pub emissive_roughness: [f32; 4],
    /// x = metalness
    pub metalness: [f32; 4],
}

impl MeshUniforms {
    pub fn new(world: Mat4, material: &Material) -> Self {
        let e = material.emissive;
        Self {
            model: world.to_cols_array_2d(),
            normal: world.inverse().transpose().to_cols_array_2d(),
            base_color: material.base_color,
            emissive_roughness: [e[0], e[1], e[2], material.roughness],
            metalness: [material.metalness, 0.0, 0.0, 0.0],
        }
    }
}
