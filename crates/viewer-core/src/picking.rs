//! Pointer-to-surface picking: screen coordinates to a world-space hit
//! point on the loaded model.

use crate::camera::Camera;
use crate::model::Model;
use glam::{Vec2, Vec3, Vec4};

/// Nearest intersection of a pick ray with the model.
#[derive(Clone, Copy, Debug)]
pub struct PickHit {
    pub point: Vec3,
    pub distance: f32,
    pub node: usize,
}

/// Map canvas pixel coordinates to normalized device coordinates in
/// [-1, 1] on both axes. Screen y grows downward, device y grows upward.
#[inline]
pub fn screen_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (2.0 * sx / width.max(1.0)) - 1.0,
        1.0 - (2.0 * sy / height.max(1.0)),
    )
}

/// Compute a world-space ray from the camera through an NDC point.
///
/// Unprojects the near- and far-plane points through the inverse
/// view-projection and aims from the eye through the far point.
pub fn camera_ray(camera: &Camera, ndc: Vec2) -> (Vec3, Vec3) {
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    let far: Vec3 = p_far.truncate() / p_far.w;
    let origin = camera.eye;
    let dir = (far - origin).normalize();
    (origin, dir)
}

/// Ray-triangle intersection (Möller-Trumbore), no backface culling.
/// Returns the distance along the ray, or `None` on a miss.
pub fn ray_triangle(origin: Vec3, dir: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = dir.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < EPSILON {
        // Ray parallel to the triangle plane
        return None;
    }

    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// Test the ray against every triangle of every node and keep the nearest
/// hit. Callers rely on nearest-first selection; only that hit is reported.
pub fn pick(model: &Model, origin: Vec3, dir: Vec3) -> Option<PickHit> {
    let mut best = None::<PickHit>;
    for (node_idx, node) in model.nodes.iter().enumerate() {
        for tri in node.indices.chunks_exact(3) {
            // The decoder validates indices, but a hand-assembled model must
            // not be able to panic the session: skip broken triangles.
            let (Some(&v0), Some(&v1), Some(&v2)) = (
                node.positions.get(tri[0] as usize),
                node.positions.get(tri[1] as usize),
                node.positions.get(tri[2] as usize),
            ) else {
                continue;
            };
            if let Some(t) = ray_triangle(origin, dir, v0, v1, v2) {
                match best {
                    Some(b) if t >= b.distance => {}
                    _ => {
                        best = Some(PickHit {
                            point: origin + dir * t,
                            distance: t,
                            node: node_idx,
                        })
                    }
                }
            }
        }
    }
    best
}

/// Format a coordinate for display, rounded to two decimals. Values that
/// round to zero never show a minus sign.
#[inline]
pub fn format_coord(v: f32) -> String {
    let s = format!("{:.2}", v);
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}
