// Host-side tests for the pure render helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod helpers {
    include!("../src/render/helpers.rs");
}

use wgpu::CompositeAlphaMode as Mode;

#[test]
fn premultiplied_alpha_is_preferred_when_offered() {
    let modes = [Mode::Opaque, Mode::PreMultiplied, Mode::Inherit];
    assert_eq!(helpers::preferred_alpha_mode(&modes), Mode::PreMultiplied);
}

#[test]
fn alpha_mode_falls_back_to_the_first_offered() {
    assert_eq!(
        helpers::preferred_alpha_mode(&[Mode::Opaque, Mode::Inherit]),
        Mode::Opaque
    );
    assert_eq!(helpers::preferred_alpha_mode(&[]), Mode::Auto);
}
