//! Geometry utilities for steering and facing calculations.

use bevy::prelude::*;

/// Minimum squared length for a direction to be considered usable.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Compute a yaw-only rotation that faces `target` from `eye`.
///
/// The rotation is about +Y: the result's forward (-Z) points at the
/// target's (x, z) position while pitch and roll stay level. Returns `None`
/// when the flattened offset is too short to normalize (target directly
/// above or below the eye, or coincident with it).
pub fn yaw_toward(eye: Vec3, target: Vec3) -> Option<Quat> {
    let flat = Vec3::new(target.x - eye.x, 0.0, target.z - eye.z);
    if flat.length_squared() < DEGENERATE_EPSILON {
        return None;
    }
    let forward = flat.normalize();
    let right = forward.cross(Vec3::Y);
    Some(Quat::from_mat3(&Mat3::from_cols(right, Vec3::Y, -forward)))
}

/// Exponentially approach `target` from `current`.
///
/// The interpolation factor is `rate * delta`, clamped to 1.0 so a large
/// delta lands exactly on the target instead of overshooting past it.
pub fn approach(current: Vec3, target: Vec3, rate: f32, delta: f32) -> Vec3 {
    current.lerp(target, (rate * delta).clamp(0.0, 1.0))
}
