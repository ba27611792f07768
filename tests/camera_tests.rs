// Host-side tests for the breathing camera.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::{Vec3, Vec4};

#[test]
fn eye_rests_on_the_z_axis_at_time_zero() {
    let e = eye(0.0);
    assert!((e - Vec3::new(0.0, 0.0, CAMERA_Z)).length() < 1e-5);
}

#[test]
fn eye_breathing_stays_within_its_amplitude() {
    for t in (0..200_000).step_by(977) {
        let e = eye(t as f32);
        assert!(e.x.abs() <= 2.0 + 1e-4);
        assert!(e.y.abs() <= 2.0 + 1e-4);
        assert!((e.z - CAMERA_Z).abs() <= 3.0 + 1e-4);
    }
}

#[test]
fn view_keeps_the_origin_centered() {
    for t in [0.0_f32, 5000.0, 123_456.0] {
        let v = view(t);
        let origin = v * Vec4::new(0.0, 0.0, 0.0, 1.0);
        // The aim point lands straight ahead on the view-space -Z axis.
        assert!(origin.x.abs() < 1e-4);
        assert!(origin.y.abs() < 1e-4);
        assert!(origin.z < 0.0);
        assert!((origin.z.abs() - eye(t).length()).abs() < 1e-3);
    }
}

#[test]
fn projection_tracks_the_aspect_ratio() {
    let wide = projection(16.0 / 9.0);
    let square = projection(1.0);
    // Focal length on y is aspect-independent; x scales inversely with aspect.
    assert!((wide.y_axis.y - square.y_axis.y).abs() < 1e-5);
    assert!((wide.x_axis.x * (16.0 / 9.0) - square.x_axis.x).abs() < 1e-4);

    let f = 1.0 / (FOV_Y_RAD / 2.0).tan();
    assert!((square.y_axis.y - f).abs() < 1e-4);
}
