// Host-side tests for the scene state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly;
// `scene` resolves its siblings through `super`, matching the crate layout.

#![allow(dead_code)]
mod anim {
    include!("../src/core/anim.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use scene::Scene;

#[test]
fn scene_is_deterministic_for_a_seed() {
    let a = Scene::new(42);
    let b = Scene::new(42);
    assert_eq!(a.heart.cloud.positions, b.heart.cloud.positions);
    assert_eq!(a.stars.cloud.positions, b.stars.cloud.positions);
    assert_eq!(a.heart.cloud.base_colors, b.heart.cloud.base_colors);
}

#[test]
fn new_scene_rests_at_base_scale_two() {
    let scene = Scene::new(1);
    assert!(!scene.intensified());
    assert!(!scene.explosion_active());
    assert_eq!(scene.heart.base_scale(), anim::RESTING_BASE_SCALE);
    assert_eq!(scene.heart.pulse_speed(), anim::RESTING_PULSE_SPEED);
}

#[test]
fn update_applies_pulse_and_twinkles() {
    let mut scene = Scene::new(3);
    let t = 1234.5;
    scene.update(t);

    let expected = anim::RESTING_BASE_SCALE * anim::pulse_scale(t, anim::RESTING_PULSE_SPEED);
    assert!((scene.heart.scale() - expected).abs() < 1e-5);

    for (i, size) in scene.stars.sizes.iter().enumerate() {
        let want = anim::star_size(scene.stars.cloud.base_sizes[i], t, i);
        assert!((size - want).abs() < 1e-5);
    }
    for (i, size) in scene.heart.sizes.iter().enumerate() {
        assert!((size - anim::heart_sparkle_size(t, i)).abs() < 1e-5);
    }
}

#[test]
fn update_caps_heart_color_channels() {
    let mut scene = Scene::new(4);
    scene.update(777.0);
    for color in &scene.heart.colors {
        for ch in color {
            assert!(*ch <= anim::COLOR_CHANNEL_MAX + 1e-6);
            assert!(*ch >= 0.0);
        }
    }
    // The red channel of every palette entry is driven to the cap.
    assert!(scene
        .heart
        .colors
        .iter()
        .any(|c| (c[0] - anim::COLOR_CHANNEL_MAX).abs() < 1e-6));
}

#[test]
fn intensify_fires_once_and_is_permanent() {
    let mut scene = Scene::new(5);
    assert!(scene.intensify());
    assert!(scene.intensified());
    assert!(scene.explosion_active());
    assert_eq!(scene.heart.base_scale(), anim::INTENSIFIED_BASE_SCALE);
    assert_eq!(
        scene.heart.pulse_speed(),
        anim::RESTING_PULSE_SPEED * anim::INTENSIFY_PULSE_MULTIPLIER
    );

    // Second call is a no-op and must not restart the explosion.
    while !scene.step_explosion() {}
    assert!(!scene.intensify());
    assert!(!scene.explosion_active());
    assert_eq!(scene.heart.base_scale(), anim::INTENSIFIED_BASE_SCALE);
}

#[test]
fn explosion_displaces_points_radially_from_originals() {
    let mut scene = Scene::new(6);
    let originals = scene.heart.cloud.positions.clone();
    scene.intensify();

    assert!(!scene.step_explosion());
    let factor = anim::explosion_factor(anim::EXPLOSION_STEP);
    for (pos, orig) in scene.heart.cloud.positions.iter().zip(&originals) {
        let want = *orig * factor;
        assert!((*pos - want).length() < 1e-4);
    }
    let burst = anim::explosion_size(anim::EXPLOSION_STEP);
    for size in &scene.heart.sizes {
        assert!((size - burst).abs() < 1e-5);
    }
}

#[test]
fn explosion_owns_sizes_while_running() {
    let mut scene = Scene::new(7);
    scene.intensify();
    scene.step_explosion();
    let burst = anim::explosion_size(anim::EXPLOSION_STEP);

    // A frame update in mid-explosion leaves the burst sizes alone.
    scene.update(5000.0);
    for size in &scene.heart.sizes {
        assert!((size - burst).abs() < 1e-5);
    }

    // Once the sequence completes, sparkle sizing resumes.
    while !scene.step_explosion() {}
    scene.update(6000.0);
    for (i, size) in scene.heart.sizes.iter().enumerate() {
        assert!((size - anim::heart_sparkle_size(6000.0, i)).abs() < 1e-5);
    }
}

#[test]
fn explosion_runs_its_full_tick_count() {
    let mut scene = Scene::new(8);
    scene.intensify();
    let mut ticks = 0;
    while !scene.step_explosion() {
        ticks += 1;
        assert!(ticks < 1000, "explosion never completed");
    }
    assert_eq!(ticks + 1, (1.0_f32 / anim::EXPLOSION_STEP).ceil() as u32);
    assert!(!scene.explosion_active());
}

#[test]
fn settle_restores_pulse_but_keeps_scale() {
    let mut scene = Scene::new(9);
    scene.intensify();
    while !scene.step_explosion() {}
    scene.settle_pulse();
    assert_eq!(scene.heart.pulse_speed(), anim::RESTING_PULSE_SPEED);
    assert_eq!(scene.heart.base_scale(), anim::INTENSIFIED_BASE_SCALE);
}

#[test]
fn star_rotation_accumulates_per_frame() {
    let mut scene = Scene::new(10);
    for _ in 0..3 {
        scene.update(0.0);
    }
    let m = scene.star_model();
    let want = glam::Mat4::from_rotation_y(3.0 * anim::STAR_ROT_Y_PER_FRAME)
        * glam::Mat4::from_rotation_x(3.0 * anim::STAR_ROT_X_PER_FRAME);
    assert!((m.to_cols_array()
        .iter()
        .zip(want.to_cols_array().iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f32, f32::max))
        < 1e-6);
}
