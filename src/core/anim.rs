use rand::Rng;

// ---------------- Heart cloud pulse / twinkle ----------------

pub const RESTING_BASE_SCALE: f32 = 2.0;
pub const INTENSIFIED_BASE_SCALE: f32 = 3.5;
pub const RESTING_PULSE_SPEED: f32 = 0.0012;
pub const INTENSIFY_PULSE_MULTIPLIER: f32 = 4.0;
pub const PULSE_AMPLITUDE: f32 = 0.15;

// Star field drift per frame (radians)
pub const STAR_ROT_Y_PER_FRAME: f32 = 0.0001;
pub const STAR_ROT_X_PER_FRAME: f32 = 0.00005;

/// Breathing scale multiplier applied on top of a cloud's base scale.
#[inline]
pub fn pulse_scale(time_ms: f32, pulse_speed: f32) -> f32 {
    1.0 + (time_ms * pulse_speed).sin() * PULSE_AMPLITUDE
}

/// Stateless star twinkle: phase derives from wall-clock time and index only,
/// so no per-star phase state is needed.
#[inline]
pub fn star_twinkle(time_ms: f32, index: usize) -> f32 {
    (time_ms * 0.001 + index as f32 * 0.1).sin().abs()
}

#[inline]
pub fn star_size(base_size: f32, time_ms: f32, index: usize) -> f32 {
    base_size * (0.5 + 0.5 * star_twinkle(time_ms, index))
}

/// Per-point firework sparkle for the heart cloud: three independent
/// sine/cosine terms at different time/index phase offsets, scaled and offset
/// into a visible size range.
#[inline]
pub fn heart_sparkle_size(time_ms: f32, index: usize) -> f32 {
    let i = index as f32;
    let tw1 = (time_ms * 0.003 + i * 0.1).sin().abs();
    let tw2 = (time_ms * 0.005 + i * 0.08).cos().abs();
    let sparkle = (time_ms * 0.008 + i * 0.05).sin().abs();
    (tw1 * tw2 + sparkle) * 6.0 + 3.0
}

/// Glow pulsing intensity for the heart cloud's colors. Multiplied against
/// the base channels and clamped at [`COLOR_CHANNEL_MAX`] by the caller.
#[inline]
pub fn glow_intensity(time_ms: f32, index: usize) -> f32 {
    let i = index as f32;
    let g1 = (time_ms * 0.002 + i * 0.03).sin().abs() * 0.5 + 0.5;
    let g2 = (time_ms * 0.0015 + i * 0.04).cos().abs() * 0.5 + 0.5;
    g1 * g2 * 1.5 + 0.8
}

pub const COLOR_CHANNEL_MAX: f32 = 2.0;

// ---------------- Explosion sequence ----------------

/// Progress advanced per tick. The explosion is tick-count-bound by design:
/// dropped or delayed ticks stretch its wall-clock duration rather than
/// skipping ahead.
pub const EXPLOSION_STEP: f32 = 0.015;
pub const EXPLOSION_TICK_MS: i32 = 50;
pub const PULSE_SETTLE_DELAY_MS: i32 = 3000;

/// Radial displacement factor at explosion progress `p` in [0, 1]: three
/// superposed waves at 2x/3x/4x the progress frequency, weighted 0.4/0.3/0.2.
/// Equals 1.0 at p = 0 and never dips below ~0.7 of the original radius.
#[inline]
pub fn explosion_factor(p: f32) -> f32 {
    use std::f32::consts::PI;
    let wave1 = (p * PI * 2.0).sin();
    let wave2 = (p * PI * 3.0).sin();
    let wave3 = (p * PI * 4.0).sin();
    1.0 + wave1 * 0.4 + wave2 * 0.3 + wave3 * 0.2
}

/// Size burst applied while the explosion runs.
#[inline]
pub fn explosion_size(p: f32) -> f32 {
    3.0 + (p * std::f32::consts::PI * 2.0).sin().abs() * 4.0
}

// ---------------- Evasive button ----------------

pub const NO_FONT_INITIAL_PX: f32 = 24.0;
pub const YES_FONT_INITIAL_PX: f32 = 24.0;
pub const FONT_STEP_PX: f32 = 3.0;
pub const MAX_REJECT_CLICKS: u32 = 5;
pub const EVADE_RANGE_PX: f32 = 50.0;

/// Styles to apply to the two buttons after a rejection click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RejectStyles {
    pub no_font_px: f32,
    pub no_padding_px: (f32, f32),
    pub yes_font_px: f32,
    pub yes_padding_px: (f32, f32),
    pub hidden: bool,
}

/// Explicit state for the evasive "No" button. Sizes are tracked here rather
/// than read back from computed style, so each click compounds the previous
/// one deterministically.
#[derive(Default)]
pub struct RejectState {
    clicks: u32,
}

impl RejectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Register one rejection click and return the styles to apply.
    /// Once `hidden` is true it stays true for the session.
    pub fn click(&mut self) -> RejectStyles {
        self.clicks += 1;
        let c = self.clicks as f32;
        RejectStyles {
            no_font_px: NO_FONT_INITIAL_PX - FONT_STEP_PX * c,
            no_padding_px: (15.0 - 2.0 * c, 30.0 - 3.0 * c),
            yes_font_px: YES_FONT_INITIAL_PX + FONT_STEP_PX * c,
            yes_padding_px: (15.0 + 2.0 * c, 30.0 + 3.0 * c),
            hidden: self.clicks >= MAX_REJECT_CLICKS,
        }
    }
}

/// Random 2D translation applied to the "No" button on each rejection.
#[inline]
pub fn evade_offset<R: Rng>(rng: &mut R) -> (f32, f32) {
    (
        rng.gen::<f32>() * 2.0 * EVADE_RANGE_PX - EVADE_RANGE_PX,
        rng.gen::<f32>() * 2.0 * EVADE_RANGE_PX - EVADE_RANGE_PX,
    )
}

// ---------------- Glyph particles ----------------

pub const GLYPHS: [&str; 8] = ["\u{1F496}", "\u{2764}\u{FE0F}", "\u{1F495}", "\u{1F497}", "\u{1F493}", "\u{1F498}", "\u{1F49D}", "\u{1F49E}"];

pub const AMBIENT_PERIOD_MS: i32 = 300;
pub const BURST_COUNT: i32 = 20;
pub const BURST_STAGGER_MS: i32 = 100;
pub const CELEBRATION_PERIOD_MS: i32 = 200;
pub const CELEBRATION_DURATION_MS: i32 = 10_000;

/// Sampled parameters for one short-lived falling glyph element. The host
/// page animates position/rotation/scale over `duration_s` via CSS keyframes;
/// the element removes itself after [`GlyphParams::lifetime_ms`].
#[derive(Clone, Copy, Debug)]
pub struct GlyphParams {
    pub glyph: &'static str,
    pub size_px: f32,
    pub duration_s: f32,
    pub left_pct: f32,
    pub delay_s: f32,
    pub drift_px: f32,
}

impl GlyphParams {
    /// Ambient glyphs are small and slow; intense (celebration) glyphs are
    /// larger and fall faster.
    pub fn sample<R: Rng>(rng: &mut R, intense: bool) -> Self {
        let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
        let size_px = if intense {
            rng.gen::<f32>() * 40.0 + 30.0
        } else {
            rng.gen::<f32>() * 25.0 + 15.0
        };
        let duration_s = if intense {
            rng.gen::<f32>() * 3.0 + 3.0
        } else {
            rng.gen::<f32>() * 4.0 + 4.0
        };
        Self {
            glyph,
            size_px,
            duration_s,
            left_pct: rng.gen::<f32>() * 100.0,
            delay_s: rng.gen::<f32>() * 0.5,
            drift_px: (rng.gen::<f32>() - 0.5) * 100.0,
        }
    }

    /// Removal delay: animation duration plus a small grace period.
    pub fn lifetime_ms(&self) -> i32 {
        ((self.duration_s + 0.5) * 1000.0) as i32
    }
}
