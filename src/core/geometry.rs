use glam::Vec3;
use rand::Rng;

pub const STAR_COUNT: usize = 1000;
pub const STAR_SHELL_MIN_RADIUS: f32 = 100.0;
pub const STAR_SHELL_SPAN: f32 = 100.0;
pub const STAR_Z_PUSHBACK: f32 = 50.0;

pub const HEART_POINT_TARGET: usize = 8000;
pub const HEART_LAYERS: usize = 15;
pub const HEART_DEPTH: f32 = 15.0;
pub const HEART_XY_JITTER: f32 = 0.3;
pub const HEART_Z_JITTER: f32 = 2.0;

/// Over-driven pink/magenta palette; channels above 1.0 rely on the HDR
/// target and additive blending for the bloom look.
pub const HEART_PALETTE: [[f32; 3]; 8] = [
    [2.0, 0.3, 1.0],
    [2.0, 0.2, 1.2],
    [2.0, 0.6, 1.3],
    [2.0, 0.8, 1.4],
    [2.0, 1.2, 1.5],
    [2.0, 1.0, 1.4],
    [2.0, 0.1, 1.0],
    [2.0, 0.5, 1.5],
];

pub const STAR_PALETTE_PINK: [f32; 3] = [1.0, 0.7, 0.85];
pub const STAR_PALETTE_LIGHT_PINK: [f32; 3] = [1.0, 0.9, 0.95];
pub const STAR_PALETTE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];

/// Classic parametric heart: `x = 16 sin^3 t`,
/// `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`.
#[inline]
pub fn heart_curve(t: f32) -> (f32, f32) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (x, y)
}

/// Jitter-free base position for a given layer/sample index pair.
/// The generated cloud is this plus small per-axis jitter.
#[inline]
pub fn heart_base_position(layer: usize, index: usize, per_layer: usize) -> Vec3 {
    let t = (index as f32 / per_layer as f32) * std::f32::consts::TAU;
    let (x, y) = heart_curve(t);
    let z = (layer as f32 / HEART_LAYERS as f32 - 0.5) * HEART_DEPTH;
    Vec3::new(x, y, z)
}

/// Distance-from-center color binning into the over-driven palette.
#[inline]
pub fn heart_color(x: f32, y: f32) -> [f32; 3] {
    let dist = (x * x + y * y).sqrt() / 20.0;
    let idx = (dist * HEART_PALETTE.len() as f32) as usize;
    HEART_PALETTE[idx.min(HEART_PALETTE.len() - 1)]
}

/// A fixed-size set of points with immutable base attributes. Point count and
/// identity never change after construction; per-frame mutation happens on
/// copies held by the scene.
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub base_colors: Vec<[f32; 3]>,
    pub base_sizes: Vec<f32>,
}

impl PointCloud {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Sample the heart curve across depth layers with small independent jitter
/// per axis for organic texture. Layer count divides the target unevenly, so
/// the result holds `(HEART_POINT_TARGET / HEART_LAYERS) * HEART_LAYERS`
/// points.
pub fn generate_heart_cloud<R: Rng>(rng: &mut R) -> PointCloud {
    let per_layer = HEART_POINT_TARGET / HEART_LAYERS;
    let count = per_layer * HEART_LAYERS;
    let mut positions = Vec::with_capacity(count);
    let mut base_colors = Vec::with_capacity(count);
    let mut base_sizes = Vec::with_capacity(count);

    for layer in 0..HEART_LAYERS {
        for i in 0..per_layer {
            let base = heart_base_position(layer, i, per_layer);
            let p = Vec3::new(
                base.x + (rng.gen::<f32>() - 0.5) * HEART_XY_JITTER,
                base.y + (rng.gen::<f32>() - 0.5) * HEART_XY_JITTER,
                base.z + (rng.gen::<f32>() - 0.5) * HEART_Z_JITTER,
            );
            positions.push(p);
            base_colors.push(heart_color(base.x, base.y));
            base_sizes.push(rng.gen::<f32>() * 4.0 + 2.0);
        }
    }

    PointCloud {
        positions,
        base_colors,
        base_sizes,
    }
}

/// Decorative star field: points on concentric shells around the scene,
/// pushed back on z so the heart reads in front.
pub fn generate_star_field<R: Rng>(rng: &mut R) -> PointCloud {
    let mut positions = Vec::with_capacity(STAR_COUNT);
    let mut base_colors = Vec::with_capacity(STAR_COUNT);
    let mut base_sizes = Vec::with_capacity(STAR_COUNT);

    for _ in 0..STAR_COUNT {
        let theta = rng.gen::<f32>() * std::f32::consts::TAU;
        let phi = rng.gen::<f32>() * std::f32::consts::PI;
        let radius = STAR_SHELL_MIN_RADIUS + rng.gen::<f32>() * STAR_SHELL_SPAN;
        positions.push(Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos() - STAR_Z_PUSHBACK,
        ));

        let choice = rng.gen::<f32>();
        base_colors.push(if choice > 0.7 {
            STAR_PALETTE_PINK
        } else if choice > 0.4 {
            STAR_PALETTE_LIGHT_PINK
        } else {
            STAR_PALETTE_WHITE
        });
        base_sizes.push(rng.gen::<f32>() * 2.0 + 0.5);
    }

    PointCloud {
        positions,
        base_colors,
        base_sizes,
    }
}
