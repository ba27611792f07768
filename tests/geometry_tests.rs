// Host-side tests for point-cloud generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::*;
use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};

const TOL: f32 = 1e-4;

#[test]
fn heart_curve_matches_closed_form_at_quarter_turns() {
    use std::f32::consts::{FRAC_PI_2, PI};

    let (x, y) = heart_curve(0.0);
    assert!((x - 0.0).abs() < TOL);
    assert!((y - 5.0).abs() < TOL, "y(0) = {y}");

    let (x, y) = heart_curve(FRAC_PI_2);
    assert!((x - 16.0).abs() < TOL);
    assert!((y - 4.0).abs() < TOL, "y(pi/2) = {y}");

    let (x, y) = heart_curve(PI);
    assert!(x.abs() < TOL);
    assert!((y - (-17.0)).abs() < TOL, "y(pi) = {y}");

    let (x, y) = heart_curve(3.0 * FRAC_PI_2);
    assert!((x - (-16.0)).abs() < TOL);
    assert!((y - 4.0).abs() < TOL, "y(3pi/2) = {y}");
}

#[test]
fn heart_base_position_is_pure_in_layer_and_index() {
    let per_layer = HEART_POINT_TARGET / HEART_LAYERS;
    let a = heart_base_position(3, 17, per_layer);
    let b = heart_base_position(3, 17, per_layer);
    assert_eq!(a, b);

    // Jitter-free base x/y match the closed-form curve for the sample's t.
    let t = (17.0 / per_layer as f32) * std::f32::consts::TAU;
    let (x, y) = heart_curve(t);
    assert!((a.x - x).abs() < TOL);
    assert!((a.y - y).abs() < TOL);
}

#[test]
fn heart_layers_span_the_depth_range() {
    let per_layer = HEART_POINT_TARGET / HEART_LAYERS;
    let front = heart_base_position(0, 0, per_layer);
    let back = heart_base_position(HEART_LAYERS - 1, 0, per_layer);
    assert!((front.z - (-HEART_DEPTH / 2.0)).abs() < TOL);
    assert!(back.z < HEART_DEPTH / 2.0);
    assert!(back.z > front.z);
}

#[test]
fn heart_cloud_has_fixed_count_and_bounded_jitter() {
    let mut rng = StdRng::seed_from_u64(7);
    let cloud = generate_heart_cloud(&mut rng);
    let per_layer = HEART_POINT_TARGET / HEART_LAYERS;
    assert_eq!(cloud.len(), per_layer * HEART_LAYERS);
    assert_eq!(cloud.base_colors.len(), cloud.len());
    assert_eq!(cloud.base_sizes.len(), cloud.len());

    for (i, pos) in cloud.positions.iter().enumerate() {
        let layer = i / per_layer;
        let base = heart_base_position(layer, i % per_layer, per_layer);
        assert!((pos.x - base.x).abs() <= HEART_XY_JITTER / 2.0 + TOL);
        assert!((pos.y - base.y).abs() <= HEART_XY_JITTER / 2.0 + TOL);
        assert!((pos.z - base.z).abs() <= HEART_Z_JITTER / 2.0 + TOL);
    }
    for size in &cloud.base_sizes {
        assert!((2.0..=6.0).contains(size));
    }
}

#[test]
fn heart_colors_come_from_the_overdriven_palette() {
    let mut rng = StdRng::seed_from_u64(8);
    let cloud = generate_heart_cloud(&mut rng);
    for c in &cloud.base_colors {
        assert!(HEART_PALETTE.contains(c));
    }
    // Center bins into the first palette entry, the far lobe tip into a later one.
    assert_eq!(heart_color(0.0, 0.0), HEART_PALETTE[0]);
    let far = heart_color(16.0, 4.0);
    assert!(HEART_PALETTE[1..].contains(&far));
}

#[test]
fn star_field_sits_on_the_pushed_back_shells() {
    let mut rng = StdRng::seed_from_u64(9);
    let stars = generate_star_field(&mut rng);
    assert_eq!(stars.len(), STAR_COUNT);

    let center = Vec3::new(0.0, 0.0, -STAR_Z_PUSHBACK);
    for pos in &stars.positions {
        let r = (*pos - center).length();
        assert!(
            (STAR_SHELL_MIN_RADIUS - TOL..=STAR_SHELL_MIN_RADIUS + STAR_SHELL_SPAN + TOL)
                .contains(&r),
            "star radius {r} out of shell range"
        );
    }
    for c in &stars.base_colors {
        assert!(
            *c == STAR_PALETTE_PINK || *c == STAR_PALETTE_LIGHT_PINK || *c == STAR_PALETTE_WHITE
        );
    }
    for size in &stars.base_sizes {
        assert!((0.5..=2.5).contains(size));
    }
}
