//! Loaded model state: a flat list of mesh nodes with world-space geometry
//! and a small annotation map for capability tags.

use crate::constants::HIGHLIGHT_COLOR;
use fnv::FnvHashMap;
use glam::Vec3;

/// Capability tags assigned to nodes once at load time. Lookups go through
/// the tag map, never through node-name string comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    TopPart,
}

/// One renderable/pickable node. Positions are world space: the node's
/// scene-graph transform (and the uniform model scale) are baked in at
/// decode time, so picking and rendering share the same triangle soup.
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub name: String,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
    /// Current material base color, swapped by the highlight toggle.
    pub color: [f32; 4],
    /// Cached on the first highlight toggle and never cleared.
    pub original_color: Option<[f32; 4]>,
}

impl MeshNode {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// The currently loaded model. A new load replaces the whole value.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub nodes: Vec<MeshNode>,
    pub tags: FnvHashMap<usize, NodeTag>,
}

impl Model {
    /// Index of the first node carrying `tag`, if any.
    pub fn tagged_node(&self, tag: NodeTag) -> Option<usize> {
        (0..self.nodes.len()).find(|i| self.tags.get(i) == Some(&tag))
    }

    /// Flip the highlight color on the tagged top part.
    ///
    /// The first toggle caches the node's original color; later toggles
    /// alternate between the highlight color and that cached value, so two
    /// toggles always restore the exact original. Returns the new highlight
    /// state, or `None` when no node is tagged.
    pub fn toggle_highlight(&mut self) -> Option<bool> {
        let idx = self.tagged_node(NodeTag::TopPart)?;
        let node = &mut self.nodes[idx];
        if node.original_color.is_none() {
            node.original_color = Some(node.color);
        }
        if node.color == HIGHLIGHT_COLOR {
            node.color = node.original_color.unwrap_or(HIGHLIGHT_COLOR);
            Some(false)
        } else {
            node.color = HIGHLIGHT_COLOR;
            log::info!("highlighting sub-part {:?}", node.name);
            Some(true)
        }
    }
}
