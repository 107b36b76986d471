//! Fetches and decodes the binary glTF bundles.

use anyhow::{anyhow, bail};
use glam::{Mat4, Vec3};
use room_core::assembly::MeshDesc;
use room_core::geometry::Aabb;
use room_core::loading::AssetKind;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One glTF primitive ready for upload, with its scene description.
pub struct DecodedMesh {
    pub desc: MeshDesc,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

pub async fn load_bundle(kind: AssetKind) -> anyhow::Result<Vec<DecodedMesh>> {
    let bytes = fetch_bytes(kind.path()).await?;
    let meshes = decode_glb(&bytes)?;
    log::info!("[assets] {} decoded: {} meshes", kind.path(), meshes.len());
    Ok(meshes)
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

fn decode_glb(bytes: &[u8]) -> anyhow::Result<Vec<DecodedMesh>> {
    let (doc, buffers, _images) = gltf::import_slice(bytes)?;
    let scene = doc
        .default_scene()
        .or_else(|| doc.scenes().next())
        .ok_or_else(|| anyhow!("glTF has no scene"))?;

    let mut out = Vec::new();
    for node in scene.nodes() {
        visit(&node, None, Mat4::IDENTITY, &buffers, &mut out);
    }
    Ok(out)
}

fn visit(
    node: &gltf::Node,
    parent_name: Option<&str>,
    parent_world: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<DecodedMesh>,
) {
    let world = parent_world * Mat4::from_cols_array_2d(&node.transform().matrix());
    let name = node
        .name()
        .map(str::to_string)
        .or_else(|| node.mesh().and_then(|m| m.name().map(str::to_string)))
        .unwrap_or_else(|| format!("node_{}", node.index()));

    if let Some(mesh) = node.mesh() {
        for prim in mesh.primitives() {
            let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.0.as_slice()));
            let Some(positions) = reader.read_positions().map(|p| p.collect::<Vec<[f32; 3]>>()) else {
                continue;
            };
            let Some(bounds) = Aabb::from_points(positions.iter().map(|p| Vec3::from(*p))) else {
                continue;
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ix) => ix.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            let normals = match reader.read_normals() {
                Some(n) => n.collect(),
                None => vertex_normals(&positions, &indices),
            };
            let base_color = prim.material().pbr_metallic_roughness().base_color_factor();
            out.push(DecodedMesh {
                desc: MeshDesc {
                    name: name.clone(),
                    parent_name: parent_name.map(str::to_string),
                    transform: world,
                    bounds,
                    base_color,
                },
                positions,
                normals,
                indices,
            });
        }
    }

    for child in node.children() {
        visit(&child, Some(&name), world, buffers, out);
    }
}

/// Area-weighted vertex normals for primitives shipped without them.
fn vertex_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let (pa, pb, pc) = (Vec3::from(positions[a]), Vec3::from(positions[b]), Vec3::from(positions[c]));
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
