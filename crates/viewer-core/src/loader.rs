//! GLB decoding: raw file bytes to a [`Model`].
//!
//! Parsing is delegated to the `gltf` crate; this module walks the default
//! scene, bakes node transforms (plus the uniform model scale) into vertex
//! positions and assigns capability tags by source node name. Tag lookups
//! elsewhere never touch node names again.

use crate::constants::{MODEL_SCALE, TOP_PART_NODE_NAME};
use crate::error::ViewerError;
use crate::model::{MeshNode, Model, NodeTag};
use fnv::FnvHashMap;
use glam::{Mat3, Mat4, Vec3};

/// Decode a binary glTF (`.glb`) file into a pickable, renderable model.
pub fn decode_glb(bytes: &[u8]) -> Result<Model, ViewerError> {
    let (document, buffers, _images) =
        gltf::import_slice(bytes).map_err(|e| ViewerError::Decode(e.to_string()))?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ViewerError::EmptyModel)?;

    let root = Mat4::from_scale(Vec3::splat(MODEL_SCALE));
    let mut nodes = Vec::new();
    for node in scene.nodes() {
        collect_nodes(&node, root, &buffers, &mut nodes)?;
    }
    if nodes.iter().all(|n| n.indices.is_empty()) {
        return Err(ViewerError::EmptyModel);
    }

    let mut tags = FnvHashMap::default();
    if let Some(idx) = nodes.iter().position(|n| n.name == TOP_PART_NODE_NAME) {
        tags.insert(idx, NodeTag::TopPart);
    }

    log::info!(
        "decoded model: {} mesh nodes, {} triangles",
        nodes.len(),
        nodes.iter().map(|n| n.triangle_count()).sum::<usize>()
    );
    Ok(Model { nodes, tags })
}

fn collect_nodes(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshNode>,
) -> Result<(), ViewerError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        let name = node
            .name()
            .or_else(|| mesh.name())
            .unwrap_or_default()
            .to_string();
        for primitive in mesh.primitives() {
            out.push(read_primitive(&primitive, &name, world, buffers)?);
        }
    }

    for child in node.children() {
        collect_nodes(&child, world, buffers, out)?;
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive,
    name: &str,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshNode, ViewerError> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let local_positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| ViewerError::Decode(format!("node {:?} has no positions", name)))?
        .collect();

    let positions: Vec<Vec3> = local_positions
        .iter()
        .map(|p| world.transform_point3(Vec3::from(*p)))
        .collect();

    // Normals transform by the inverse-transpose; fall back to +Y when the
    // file carries none.
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
    let normals: Vec<Vec3> = reader
        .read_normals()
        .map(|iter| {
            iter.map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                .collect()
        })
        .unwrap_or_else(|| vec![Vec3::Y; positions.len()]);

    let indices: Vec<u32> = reader
        .read_indices()
        .map(|i| i.into_u32().collect())
        .unwrap_or_else(|| (0..positions.len() as u32).collect());

    // A parseable file can still carry indices past the vertex count;
    // reject it here so picking and rendering only ever see valid triangles.
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(ViewerError::Decode(format!(
            "node {:?} has triangle index {} out of range ({} vertices)",
            name,
            bad,
            positions.len()
        )));
    }

    let color = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();

    Ok(MeshNode {
        name: name.to_string(),
        positions,
        normals,
        indices,
        color,
        original_color: None,
    })
}
