//! # Point Transforms
//!
//! Rotations applied to existing stroke points.
//!
//! - [`rotate_about_origin`]: every point rotates about the world origin
//! - [`rotate_about_centroid`]: the point set spins in place; its centroid
//!   does not move

use config::constants::approx_zero;
use glam::{DQuat, DVec3};

use crate::axis::Axis;
use crate::curve::{centroid, Point};

/// Rotation of `angle_deg` degrees about a world axis (right-handed).
pub fn axis_rotation(axis: Axis, angle_deg: f64) -> DQuat {
    DQuat::from_axis_angle(axis.unit(), angle_deg.to_radians())
}

/// Whole turns leave points bit-for-bit unchanged.
fn is_whole_turn(angle_deg: f64) -> bool {
    approx_zero(angle_deg % 360.0)
}

/// Rotates every point about the origin.
pub fn rotate_about_origin(points: &mut [Point], axis: Axis, angle_deg: f64) {
    if is_whole_turn(angle_deg) {
        return;
    }
    let rotation = axis_rotation(axis, angle_deg);
    for point in points.iter_mut() {
        *point = rotation * *point;
    }
}

/// Rotates the points about the origin, then translates them so that the
/// rotated centroid lands back on the original one.
///
/// Returns the centroid, or `None` (leaving `points` untouched) when empty.
pub fn rotate_about_centroid(points: &mut [Point], axis: Axis, angle_deg: f64) -> Option<DVec3> {
    let center = centroid(points)?;
    if is_whole_turn(angle_deg) {
        return Some(center);
    }
    let rotation = axis_rotation(axis, angle_deg);
    let shift = center - rotation * center;
    for point in points.iter_mut() {
        *point = rotation * *point + shift;
    }
    Some(center)
}
