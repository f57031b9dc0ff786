//! Intersection of two lines given in implicit form.

use super::{ImplicitForm, WorldPoint, EPSILON};

/// Solve `a1·x + b1·y + c1 = 0`, `a2·x + b2·y + c2 = 0` with Cramer's rule.
///
/// Returns `None` when the determinant vanishes (parallel or coincident
/// lines). The test is made against the normal lengths, so it compares the
/// sine of the angle between the lines rather than the raw coefficients.
pub fn solve_implicit_pair(l1: &ImplicitForm, l2: &ImplicitForm) -> Option<WorldPoint> {
    let determinant = l1.a * l2.b - l2.a * l1.b;
    let scale = l1.normal().norm() * l2.normal().norm();

    if determinant.abs() <= EPSILON * scale {
        return None;
    }

    let x = (l1.b * l2.c - l2.b * l1.c) / determinant;
    let y = (l2.a * l1.c - l1.a * l2.c) / determinant;
    Some(WorldPoint::new(x, y))
}
