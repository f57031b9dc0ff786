//! 2D helpers shared by the registries and the line model.
//!
//! Everything here works in world units on `f32` nalgebra types.

use super::{Vector2, WorldPoint, EPSILON};
use nalgebra as na;

/// Check if two points are equal within EPSILON on both axes.
#[inline]
pub fn points_equal(p1: &WorldPoint, p2: &WorldPoint) -> bool {
    (p1.x - p2.x).abs() < EPSILON && (p1.y - p2.y).abs() < EPSILON
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: &WorldPoint, p2: &WorldPoint) -> f32 {
    na::distance(p1, p2)
}

/// 2D cross product (z-component of the 3D cross product of the two
/// vectors lifted to z = 0).
#[inline]
pub fn cross_2d(v1: &Vector2, v2: &Vector2) -> f32 {
    v1.x * v2.y - v1.y * v2.x
}

/// Perpendicular distance from `point` to the infinite line through `start`
/// and `end`.
///
/// Returns `None` when `start` and `end` coincide, since no direction exists.
pub fn distance_point_to_line(start: &WorldPoint, end: &WorldPoint, point: &WorldPoint) -> Option<f32> {
    let direction = end - start;
    let len = direction.norm();
    if len < EPSILON {
        return None;
    }
    Some(cross_2d(&direction, &(point - start)).abs() / len)
}
