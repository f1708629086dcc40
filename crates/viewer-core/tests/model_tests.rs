// Host-side tests for model state: capability tags and the highlight
// color round-trip.

use glam::Vec3;
use viewer_core::constants::HIGHLIGHT_COLOR;
use viewer_core::{MeshNode, Model, NodeTag};

fn node(name: &str, color: [f32; 4]) -> MeshNode {
    MeshNode {
        name: name.to_string(),
        positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        normals: vec![Vec3::Z; 3],
        indices: vec![0, 1, 2],
        color,
        original_color: None,
    }
}

fn tagged_model(color: [f32; 4]) -> Model {
    let mut model = Model {
        nodes: vec![node("Body", [0.5, 0.5, 0.5, 1.0]), node("Cap", color)],
        tags: Default::default(),
    };
    model.tags.insert(1, NodeTag::TopPart);
    model
}

#[test]
fn tagged_node_lookup_ignores_names() {
    let model = tagged_model([1.0, 0.0, 0.0, 1.0]);
    assert_eq!(model.tagged_node(NodeTag::TopPart), Some(1));
}

#[test]
fn untagged_model_has_no_top_part() {
    let model = Model {
        nodes: vec![node("Body", [0.5, 0.5, 0.5, 1.0])],
        tags: Default::default(),
    };
    assert_eq!(model.tagged_node(NodeTag::TopPart), None);
}

#[test]
fn toggle_swaps_in_highlight_color() {
    let mut model = tagged_model([1.0, 0.0, 0.0, 1.0]);
    assert_eq!(model.toggle_highlight(), Some(true));
    assert_eq!(model.nodes[1].color, HIGHLIGHT_COLOR);
    // Untagged nodes are untouched
    assert_eq!(model.nodes[0].color, [0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn first_toggle_caches_the_original_color() {
    let original = [0.8, 0.6, 0.2, 1.0];
    let mut model = tagged_model(original);
    assert!(model.nodes[1].original_color.is_none());
    model.toggle_highlight();
    assert_eq!(model.nodes[1].original_color, Some(original));

    // The cache is never cleared or overwritten by later toggles
    model.toggle_highlight();
    model.toggle_highlight();
    assert_eq!(model.nodes[1].original_color, Some(original));
}

#[test]
fn double_toggle_restores_the_exact_original() {
    let original = [0.23, 0.77, 0.41, 1.0];
    let mut model = tagged_model(original);
    assert_eq!(model.toggle_highlight(), Some(true));
    assert_eq!(model.toggle_highlight(), Some(false));
    assert_eq!(model.nodes[1].color, original);
}

#[test]
fn toggle_without_tagged_node_is_a_no_op() {
    let mut model = Model {
        nodes: vec![node("Body", [0.5, 0.5, 0.5, 1.0])],
        tags: Default::default(),
    };
    assert_eq!(model.toggle_highlight(), None);
    assert_eq!(model.nodes[0].color, [0.5, 0.5, 0.5, 1.0]);
}
