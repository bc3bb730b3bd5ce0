// Host-side tests for the zoom bounds and the damped orbit controls.

use freight_core::constants::{MAX_ZOOM, MIN_ZOOM};
use freight_core::*;
use glam::Vec3;

fn camera_on_z(distance: f32) -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, distance),
        ..Camera::default()
    }
}

#[test]
fn zoom_in_at_lower_bound_is_rejected() {
    let zoom = ZoomController::default();
    let mut camera = camera_on_z(3.0);
    for _ in 0..10 {
        assert!(!zoom.zoom(&mut camera, ZoomDirection::In));
        assert_eq!(camera.distance(), 3.0);
    }
}

#[test]
fn zoom_out_at_upper_bound_is_rejected() {
    let zoom = ZoomController::default();
    let mut camera = camera_on_z(15.0);
    for _ in 0..10 {
        assert!(!zoom.zoom(&mut camera, ZoomDirection::Out));
        assert_eq!(camera.distance(), 15.0);
    }
}

#[test]
fn crossing_move_is_dropped_not_clamped() {
    let zoom = ZoomController::default();
    let mut camera = camera_on_z(3.2);
    assert!(!zoom.zoom(&mut camera, ZoomDirection::In));
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 3.2));

    let mut camera = camera_on_z(14.8);
    assert!(!zoom.zoom(&mut camera, ZoomDirection::Out));
    assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 14.8));
}

#[test]
fn step_landing_on_bound_is_accepted() {
    let zoom = ZoomController::default();
    let mut camera = camera_on_z(3.5);
    assert!(zoom.zoom(&mut camera, ZoomDirection::In));
    assert!((camera.distance() - 3.0).abs() < 1e-5);
    assert!(!zoom.zoom(&mut camera, ZoomDirection::In));
}

#[test]
fn repeated_zoom_stays_within_bounds() {
    let zoom = ZoomController::default();
    let mut camera = Camera::default();
    let start = camera.distance();

    let accepted_in = (0..40)
        .filter(|_| {
            let ok = zoom.zoom(&mut camera, ZoomDirection::In);
            assert!(camera.distance() >= MIN_ZOOM - 1e-4);
            ok
        })
        .count();
    assert_eq!(accepted_in, 14);
    assert!((camera.distance() - (start - 7.0)).abs() < 1e-4);

    let accepted_out = (0..40)
        .filter(|_| {
            let ok = zoom.zoom(&mut camera, ZoomDirection::Out);
            assert!(camera.distance() <= MAX_ZOOM + 1e-4);
            ok
        })
        .count();
    assert_eq!(accepted_out, 23);
}

#[test]
fn zoom_moves_along_view_direction() {
    let zoom = ZoomController::default();
    let mut camera = Camera::default();
    let before = camera.eye.normalize();
    assert!(zoom.zoom(&mut camera, ZoomDirection::In));
    assert!((camera.eye.normalize() - before).length() < 1e-5);
    assert!((camera.distance() - (108.0_f32.sqrt() - 0.5)).abs() < 1e-4);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn custom_interval_is_honored() {
    let zoom = ZoomController::new(1.0, 2.0, 0.25);
    let mut camera = camera_on_z(1.4);
    assert!(zoom.zoom(&mut camera, ZoomDirection::Out));
    assert!(zoom.zoom(&mut camera, ZoomDirection::Out));
    assert!(!zoom.zoom(&mut camera, ZoomDirection::Out));
    assert!((camera.distance() - 1.9).abs() < 1e-5);
    assert!(zoom.contains(1.0) && zoom.contains(2.0));
    assert!(!zoom.contains(2.01));
}

#[test]
fn direction_from_sign_and_wheel() {
    assert_eq!(ZoomDirection::from_sign(1), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::from_sign(-1), Some(ZoomDirection::Out));
    assert_eq!(ZoomDirection::from_sign(7), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::from_sign(0), None);
    assert_eq!(ZoomDirection::In.sign(), 1.0);
    assert_eq!(ZoomDirection::Out.sign(), -1.0);

    assert_eq!(ZoomDirection::from_wheel_delta(-120.0), Some(ZoomDirection::In));
    assert_eq!(ZoomDirection::from_wheel_delta(3.0), Some(ZoomDirection::Out));
    assert_eq!(ZoomDirection::from_wheel_delta(0.0), None);
}

#[test]
fn settled_orbit_leaves_camera_alone() {
    let mut orbit = OrbitControls::default();
    let mut camera = Camera::default();
    assert!(orbit.is_settled());
    assert!(!orbit.update(&mut camera));
    assert_eq!(camera.eye, Vec3::new(6.0, 6.0, 6.0));
}

#[test]
fn orbit_applies_damped_fraction_per_frame() {
    let mut orbit = OrbitControls::default();
    let mut camera = camera_on_z(10.0);
    // A quarter viewport height of drag is a quarter turn.
    orbit.rotate(100.0, 0.0, 400.0);

    assert!(orbit.update(&mut camera));
    let expected_theta = -std::f32::consts::FRAC_PI_2 * orbit.damping;
    assert!((camera.eye.x - 10.0 * expected_theta.sin()).abs() < 1e-4);
    assert!((camera.eye.z - 10.0 * expected_theta.cos()).abs() < 1e-4);
    assert!((camera.distance() - 10.0).abs() < 1e-4);
    assert!(!orbit.is_settled());
}

#[test]
fn orbit_eases_to_full_rotation() {
    let mut orbit = OrbitControls::default();
    let mut camera = camera_on_z(10.0);
    orbit.rotate(100.0, 0.0, 400.0);
    for _ in 0..1000 {
        orbit.update(&mut camera);
    }
    assert!(orbit.is_settled());
    assert!((camera.eye - Vec3::new(-10.0, 0.0, 0.0)).length() < 1e-2);
}

#[test]
fn orbit_keeps_camera_off_the_pole() {
    let mut orbit = OrbitControls::default();
    let mut camera = camera_on_z(10.0);
    orbit.rotate(0.0, -4000.0, 400.0);
    for _ in 0..1000 {
        orbit.update(&mut camera);
    }
    let horizontal = Vec3::new(camera.eye.x, 0.0, camera.eye.z).length();
    assert!(horizontal > 0.0);
    assert!(camera.eye.y < -9.99);
    assert!((camera.distance() - 10.0).abs() < 1e-3);
}

#[test]
fn orbit_clamps_radius_into_zoom_interval() {
    let mut orbit = OrbitControls::default();
    let mut camera = camera_on_z(20.0);
    assert!(orbit.update(&mut camera));
    assert!((camera.distance() - MAX_ZOOM).abs() < 1e-4);

    let mut camera = camera_on_z(1.0);
    assert!(orbit.update(&mut camera));
    assert!((camera.distance() - MIN_ZOOM).abs() < 1e-4);
}
