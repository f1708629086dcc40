// Host-side tests for the picking pipeline: NDC mapping, camera rays,
// triangle intersection and nearest-hit selection.

use glam::{Vec2, Vec3};
use viewer_core::{camera_ray, format_coord, pick, ray_triangle, screen_to_ndc, Camera};
use viewer_core::{MeshNode, Model};

fn quad_node(y: f32, half_extent: f32, center: Vec3) -> MeshNode {
    // Two triangles spanning a horizontal square at height `y`.
    let e = half_extent;
    MeshNode {
        name: "ground".to_string(),
        positions: vec![
            center + Vec3::new(-e, y - center.y, -e),
            center + Vec3::new(e, y - center.y, -e),
            center + Vec3::new(e, y - center.y, e),
            center + Vec3::new(-e, y - center.y, e),
        ],
        normals: vec![Vec3::Y; 4],
        indices: vec![0, 1, 2, 0, 2, 3],
        color: [1.0, 1.0, 1.0, 1.0],
        original_color: None,
    }
}

#[test]
fn ndc_mapping_center_and_corners() {
    let c = screen_to_ndc(720.0, 265.0, 1440.0, 530.0);
    assert!(c.x.abs() < 1e-6);
    assert!(c.y.abs() < 1e-6);

    // Top-left pixel maps to (-1, 1): screen y points down, device y up
    let tl = screen_to_ndc(0.0, 0.0, 1440.0, 530.0);
    assert!((tl.x - -1.0).abs() < 1e-6);
    assert!((tl.y - 1.0).abs() < 1e-6);

    let br = screen_to_ndc(1440.0, 530.0, 1440.0, 530.0);
    assert!((br.x - 1.0).abs() < 1e-6);
    assert!((br.y - -1.0).abs() < 1e-6);
}

#[test]
fn ndc_vertical_axis_is_inverted() {
    let upper = screen_to_ndc(100.0, 10.0, 200.0, 200.0);
    let lower = screen_to_ndc(100.0, 190.0, 200.0, 200.0);
    assert!(upper.y > lower.y);
}

#[test]
fn center_ray_points_at_camera_target() {
    let camera = Camera::new(1440.0 / 530.0);
    let (origin, dir) = camera_ray(&camera, Vec2::ZERO);
    assert_eq!(origin, camera.eye);

    let to_target = (camera.target - camera.eye).normalize();
    assert!((dir - to_target).length() < 1e-4);
}

#[test]
fn ray_triangle_hit_and_distance() {
    let v0 = Vec3::new(-1.0, -1.0, -5.0);
    let v1 = Vec3::new(1.0, -1.0, -5.0);
    let v2 = Vec3::new(0.0, 1.0, -5.0);
    let t = ray_triangle(Vec3::ZERO, Vec3::NEG_Z, v0, v1, v2);
    assert!(t.is_some());
    assert!((t.unwrap() - 5.0).abs() < 1e-5);
}

#[test]
fn ray_triangle_miss_outside_edges() {
    let v0 = Vec3::new(-1.0, -1.0, -5.0);
    let v1 = Vec3::new(1.0, -1.0, -5.0);
    let v2 = Vec3::new(0.0, 1.0, -5.0);
    // Aim well to the side of the triangle
    let dir = Vec3::new(0.9, 0.0, -1.0).normalize();
    assert!(ray_triangle(Vec3::ZERO, dir, v0, v1, v2).is_none());
}

#[test]
fn ray_triangle_parallel_is_rejected() {
    let v0 = Vec3::new(-1.0, 0.0, -5.0);
    let v1 = Vec3::new(1.0, 0.0, -5.0);
    let v2 = Vec3::new(0.0, 0.0, -7.0);
    // Ray travels inside the y = 1 plane, parallel to the y = 0 triangle
    let t = ray_triangle(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z, v0, v1, v2);
    assert!(t.is_none());
}

#[test]
fn ray_triangle_behind_origin_is_rejected() {
    let v0 = Vec3::new(-1.0, -1.0, 5.0);
    let v1 = Vec3::new(1.0, -1.0, 5.0);
    let v2 = Vec3::new(0.0, 1.0, 5.0);
    // Triangle sits behind the ray origin relative to the direction
    assert!(ray_triangle(Vec3::ZERO, Vec3::NEG_Z, v0, v1, v2).is_none());
}

#[test]
fn pick_selects_nearest_of_overlapping_surfaces() {
    let near = quad_node(0.0, 2.0, Vec3::new(0.0, 0.0, 0.0));
    let far = quad_node(-3.0, 2.0, Vec3::new(0.0, -3.0, 0.0));
    let model = Model {
        nodes: vec![far, near],
        tags: Default::default(),
    };

    // Straight down from above both quads
    let hit = pick(&model, Vec3::new(0.5, 10.0, 0.5), Vec3::NEG_Y).expect("hit");
    assert_eq!(hit.node, 1);
    assert!((hit.point.y - 0.0).abs() < 1e-4);
    assert!((hit.distance - 10.0).abs() < 1e-4);
}

#[test]
fn pick_reports_no_hit_off_geometry() {
    let model = Model {
        nodes: vec![quad_node(0.0, 1.0, Vec3::ZERO)],
        tags: Default::default(),
    };
    assert!(pick(&model, Vec3::new(5.0, 10.0, 5.0), Vec3::NEG_Y).is_none());
}

#[test]
fn pick_survives_out_of_range_indices() {
    // Three vertices but one triangle references a seventh; the broken
    // triangle is skipped instead of ending the session.
    let node = MeshNode {
        name: "broken".to_string(),
        positions: vec![
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(1.0, -1.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
        ],
        normals: vec![Vec3::Z; 3],
        indices: vec![0, 1, 7, 0, 1, 2],
        color: [1.0, 1.0, 1.0, 1.0],
        original_color: None,
    };
    let model = Model {
        nodes: vec![node],
        tags: Default::default(),
    };

    // The valid triangle is still pickable
    let hit = pick(&model, Vec3::ZERO, Vec3::NEG_Z).expect("valid triangle hit");
    assert!((hit.distance - 5.0).abs() < 1e-5);

    // A model carrying only broken triangles reports no hit
    let mut only_broken = model.clone();
    only_broken.nodes[0].indices = vec![0, 1, 7];
    assert!(pick(&only_broken, Vec3::ZERO, Vec3::NEG_Z).is_none());
}

#[test]
fn pick_on_empty_model_is_none() {
    let model = Model::default();
    assert!(pick(&model, Vec3::ZERO, Vec3::NEG_Z).is_none());
}

#[test]
fn ground_plane_hit_formats_to_displayed_coordinates() {
    // A double-click whose ray meets the ground plane at (1.23, 0.00, -4.56)
    // must display exactly those strings.
    let model = Model {
        nodes: vec![quad_node(0.0, 20.0, Vec3::ZERO)],
        tags: Default::default(),
    };

    let mut camera = Camera::new(1.0);
    camera.eye = Vec3::new(1.23, 10.0, -4.56);
    camera.target = Vec3::new(1.23, 0.0, -4.56);
    camera.up = Vec3::Z;

    let (origin, dir) = camera_ray(&camera, Vec2::ZERO);
    let hit = pick(&model, origin, dir).expect("ground hit");

    assert_eq!(format_coord(hit.point.x), "1.23");
    assert_eq!(format_coord(hit.point.y), "0.00");
    assert_eq!(format_coord(hit.point.z), "-4.56");
}

#[test]
fn format_coord_rounds_to_two_decimals() {
    assert_eq!(format_coord(1.234), "1.23");
    assert_eq!(format_coord(1.0), "1.00");
    assert_eq!(format_coord(-4.56), "-4.56");
    assert_eq!(format_coord(0.0), "0.00");
    assert_eq!(format_coord(2.005), "2.00");
    // Tiny negatives must not display a minus sign
    assert_eq!(format_coord(-0.0001), "0.00");
}
