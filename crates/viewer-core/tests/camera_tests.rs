// Host-side tests for camera matrices and the resize contract.

use glam::{Vec3, Vec4};
use viewer_core::Camera;

#[test]
fn view_matrix_moves_the_eye_to_the_origin() {
    let camera = Camera::new(1.0);
    let eye_in_view = camera.view_matrix() * Vec4::from((camera.eye, 1.0));
    assert!(eye_in_view.truncate().length() < 1e-5);
}

#[test]
fn target_projects_to_the_viewport_center() {
    let camera = Camera::new(1440.0 / 530.0);
    let clip = camera.view_proj() * Vec4::from((camera.target, 1.0));
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
}

#[test]
fn set_aspect_tracks_window_dimensions() {
    let mut camera = Camera::new(1.0);
    camera.set_aspect(1920.0, 1080.0);
    assert!((camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn set_aspect_survives_a_zero_height_window() {
    let mut camera = Camera::new(1.0);
    camera.set_aspect(800.0, 0.0);
    assert!(camera.aspect.is_finite());

    let proj = camera.projection_matrix();
    assert!(proj.col(0).truncate().length() > 0.0);
}

#[test]
fn points_behind_the_far_plane_leave_unit_depth() {
    let camera = Camera::new(1.0);
    let far_point = Vec3::new(0.0, 0.0, camera.eye.z - camera.zfar * 2.0);
    let clip = camera.view_proj() * Vec4::from((far_point, 1.0));
    let ndc_z = clip.z / clip.w;
    assert!(ndc_z > 1.0);
}
