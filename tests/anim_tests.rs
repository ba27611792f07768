// Host-side tests for the pure animation math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod anim {
    include!("../src/core/anim.rs");
}

use anim::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn reject_clicks_shrink_no_and_grow_yes() {
    let mut state = RejectState::new();

    let s1 = state.click();
    assert_eq!(s1.no_font_px, 21.0);
    assert_eq!(s1.no_padding_px, (13.0, 27.0));
    assert_eq!(s1.yes_font_px, 27.0);
    assert_eq!(s1.yes_padding_px, (17.0, 33.0));
    assert!(!s1.hidden);

    let s2 = state.click();
    let s3 = state.click();
    assert_eq!(s2.no_font_px, 18.0);
    assert_eq!(s3.no_font_px, 15.0);
    assert!(!s3.hidden);
}

#[test]
fn no_button_hides_on_fifth_click() {
    let mut state = RejectState::new();
    for _ in 0..4 {
        assert!(!state.click().hidden);
    }
    let s5 = state.click();
    assert!(s5.hidden);
    assert_eq!(s5.no_font_px, NO_FONT_INITIAL_PX - 5.0 * FONT_STEP_PX);
    // Hidden stays hidden.
    assert!(state.click().hidden);
}

#[test]
fn evade_offset_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let (dx, dy) = evade_offset(&mut rng);
        assert!(dx.abs() <= EVADE_RANGE_PX);
        assert!(dy.abs() <= EVADE_RANGE_PX);
    }
}

#[test]
fn explosion_factor_starts_at_one_and_never_collapses() {
    assert!((explosion_factor(0.0) - 1.0).abs() < 1e-6);
    let mut min = f32::MAX;
    for step in 0..=1000 {
        let p = step as f32 / 1000.0;
        let f = explosion_factor(p);
        assert!(f >= 0.4, "factor {f} at p = {p}");
        min = min.min(f);
    }
    // The superposed waves bottom out around 0.7 of the original radius.
    assert!(min > 0.65 && min < 0.75, "min factor {min}");
}

#[test]
fn explosion_size_bursts_within_bounds() {
    for step in 0..=100 {
        let p = step as f32 / 100.0;
        let s = explosion_size(p);
        assert!((3.0..=7.0).contains(&s));
    }
    assert!((explosion_size(0.25) - 7.0).abs() < 1e-4);
}

#[test]
fn explosion_completes_in_a_fixed_tick_count() {
    // progress 0 -> 1 at 0.015 per tick
    let ticks = (1.0_f32 / EXPLOSION_STEP).ceil() as u32;
    assert_eq!(ticks, 67);
    let mut p = 0.0_f32;
    let mut n = 0;
    while p < 1.0 {
        p += EXPLOSION_STEP;
        n += 1;
    }
    assert_eq!(n, ticks);
}

#[test]
fn pulse_scale_oscillates_around_one() {
    for t in (0..10_000).step_by(37) {
        let s = pulse_scale(t as f32, RESTING_PULSE_SPEED);
        assert!((1.0 - PULSE_AMPLITUDE..=1.0 + PULSE_AMPLITUDE).contains(&s));
    }
    assert!((pulse_scale(0.0, RESTING_PULSE_SPEED) - 1.0).abs() < 1e-6);
}

#[test]
fn twinkle_and_glow_stay_in_their_ranges() {
    for t in (0..20_000).step_by(113) {
        for i in [0usize, 17, 999] {
            let tw = star_twinkle(t as f32, i);
            assert!((0.0..=1.0).contains(&tw));

            let size = heart_sparkle_size(t as f32, i);
            assert!((3.0..=15.0).contains(&size));

            let glow = glow_intensity(t as f32, i);
            assert!((0.8..=2.3).contains(&glow));
        }
    }
}

#[test]
fn glyph_params_respect_ambient_and_intense_ranges() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..300 {
        let ambient = GlyphParams::sample(&mut rng, false);
        assert!((15.0..=40.0).contains(&ambient.size_px));
        assert!((4.0..=8.0).contains(&ambient.duration_s));

        let intense = GlyphParams::sample(&mut rng, true);
        assert!((30.0..=70.0).contains(&intense.size_px));
        assert!((3.0..=6.0).contains(&intense.duration_s));

        for p in [&ambient, &intense] {
            assert!(GLYPHS.contains(&p.glyph));
            assert!((0.0..=100.0).contains(&p.left_pct));
            assert!((0.0..=0.5).contains(&p.delay_s));
            assert!(p.drift_px.abs() <= 50.0);
            assert_eq!(p.lifetime_ms(), ((p.duration_s + 0.5) * 1000.0) as i32);
        }
    }
}

#[test]
fn emitter_schedules_line_up() {
    // Ten ambient glyphs every three seconds.
    assert_eq!(AMBIENT_PERIOD_MS * 10, 3000);
    // The burst staggers twenty spawns across just under two seconds.
    assert_eq!((BURST_COUNT - 1) * BURST_STAGGER_MS, 1900);
    // The celebration interval fits exactly fifty ticks before cancellation.
    assert_eq!(CELEBRATION_DURATION_MS / CELEBRATION_PERIOD_MS, 50);
}
