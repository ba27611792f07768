use glam::{Mat4, Vec3};

pub const CAMERA_Z: f32 = 60.0;
pub const FOV_Y_RAD: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Camera eye with a small continuous breathing oscillation around its
/// resting position on the +Z axis.
#[inline]
pub fn eye(time_ms: f32) -> Vec3 {
    Vec3::new(
        (time_ms * 0.0001).sin() * 2.0,
        (time_ms * 0.00008).sin() * 2.0,
        CAMERA_Z + (time_ms * 0.0001).sin() * 3.0,
    )
}

/// View matrix re-aimed at the scene origin every frame.
#[inline]
pub fn view(time_ms: f32) -> Mat4 {
    Mat4::look_at_rh(eye(time_ms), Vec3::ZERO, Vec3::Y)
}

/// Perspective projection for the current viewport aspect ratio. Recomputed
/// whenever the surface is reconfigured.
#[inline]
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_RAD, aspect.max(1e-3), NEAR_PLANE, FAR_PLANE)
}
