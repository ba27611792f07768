use glam::{Mat4, Vec3};
use rand::prelude::*;

use super::anim;
use super::geometry::{self, PointCloud};

/// Point-cloud scene: a slowly rotating star field behind one large
/// heart-shaped cloud. Owns all per-frame mutable attributes; the renderer
/// only reads.
pub struct Scene {
    pub stars: StarField,
    pub heart: HeartCloud,
    intensified: bool,
    explosion: Option<Explosion>,
}

pub struct StarField {
    pub cloud: PointCloud,
    pub sizes: Vec<f32>,
    rot_x: f32,
    rot_y: f32,
}

pub struct HeartCloud {
    pub cloud: PointCloud,
    /// Pre-explosion snapshot used as the reference for radial displacement.
    original_positions: Vec<Vec3>,
    pub sizes: Vec<f32>,
    pub colors: Vec<[f32; 3]>,
    base_scale: f32,
    pulse_speed: f32,
    scale: f32,
}

struct Explosion {
    progress: f32,
}

impl Scene {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let star_cloud = geometry::generate_star_field(&mut rng);
        let heart_cloud = geometry::generate_heart_cloud(&mut rng);

        let star_sizes = star_cloud.base_sizes.clone();
        let heart_sizes = heart_cloud.base_sizes.clone();
        let heart_colors = heart_cloud.base_colors.clone();
        let original_positions = heart_cloud.positions.clone();

        Self {
            stars: StarField {
                cloud: star_cloud,
                sizes: star_sizes,
                rot_x: 0.0,
                rot_y: 0.0,
            },
            heart: HeartCloud {
                cloud: heart_cloud,
                original_positions,
                sizes: heart_sizes,
                colors: heart_colors,
                base_scale: anim::RESTING_BASE_SCALE,
                pulse_speed: anim::RESTING_PULSE_SPEED,
                scale: anim::RESTING_BASE_SCALE,
            },
            intensified: false,
            explosion: None,
        }
    }

    pub fn intensified(&self) -> bool {
        self.intensified
    }

    pub fn explosion_active(&self) -> bool {
        self.explosion.is_some()
    }

    /// Per-frame update. Everything here is a pure function of wall-clock
    /// time and point index, so skipped frames cost nothing but smoothness.
    pub fn update(&mut self, time_ms: f32) {
        self.stars.rot_y += anim::STAR_ROT_Y_PER_FRAME;
        self.stars.rot_x += anim::STAR_ROT_X_PER_FRAME;
        for (i, size) in self.stars.sizes.iter_mut().enumerate() {
            *size = anim::star_size(self.stars.cloud.base_sizes[i], time_ms, i);
        }

        let heart = &mut self.heart;
        heart.scale = heart.base_scale * anim::pulse_scale(time_ms, heart.pulse_speed);

        // The explosion owns point sizes while it runs.
        if self.explosion.is_none() {
            for (i, size) in heart.sizes.iter_mut().enumerate() {
                *size = anim::heart_sparkle_size(time_ms, i);
            }
        }
        for (i, color) in heart.colors.iter_mut().enumerate() {
            let base = heart.cloud.base_colors[i];
            let intensity = anim::glow_intensity(time_ms, i);
            for ch in 0..3 {
                color[ch] = (base[ch] * intensity).min(anim::COLOR_CHANNEL_MAX);
            }
        }
    }

    /// One-time transition to the Intensified state. Returns false (no-op)
    /// when already intensified; the enlarged scale is permanent for the
    /// session.
    pub fn intensify(&mut self) -> bool {
        if self.intensified {
            return false;
        }
        self.intensified = true;
        self.heart.base_scale = anim::INTENSIFIED_BASE_SCALE;
        self.heart.pulse_speed *= anim::INTENSIFY_PULSE_MULTIPLIER;
        self.explosion = Some(Explosion { progress: 0.0 });
        true
    }

    /// Advance the explosion by one fixed tick, displacing every point
    /// radially from its original position. Returns true when the sequence
    /// has completed (and cleared itself).
    pub fn step_explosion(&mut self) -> bool {
        let Some(explosion) = &mut self.explosion else {
            return true;
        };
        explosion.progress += anim::EXPLOSION_STEP;
        if explosion.progress >= 1.0 {
            self.explosion = None;
            return true;
        }
        let p = explosion.progress;
        let factor = anim::explosion_factor(p);
        let burst = anim::explosion_size(p);
        let heart = &mut self.heart;
        for (i, pos) in heart.cloud.positions.iter_mut().enumerate() {
            *pos = heart.original_positions[i] * factor;
        }
        for size in heart.sizes.iter_mut() {
            *size = burst;
        }
        false
    }

    /// Restore the resting pulse speed after the post-explosion delay. The
    /// intensified base scale stays.
    pub fn settle_pulse(&mut self) {
        self.heart.pulse_speed = anim::RESTING_PULSE_SPEED;
    }

    pub fn star_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.stars.rot_y) * Mat4::from_rotation_x(self.stars.rot_x)
    }

    pub fn heart_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.heart.scale))
    }
}

impl HeartCloud {
    pub fn pulse_speed(&self) -> f32 {
        self.pulse_speed
    }

    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}
