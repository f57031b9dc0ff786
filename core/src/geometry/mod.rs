use nalgebra as na;
use thiserror::Error;

/// A position in the world frame. Its homogeneous form `(x, y, 1)` is
/// available through `to_homogeneous`.
pub type WorldPoint = na::Point2<f32>;
pub type Vector2 = na::Vector2<f32>;

/// Tolerance for coordinate comparisons. The world square is 2 units across
/// a 600 pixel window, so this is well below a pixel.
pub const EPSILON: f32 = 1e-4;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for WorldPoint {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).norm_squared() < EPSILON * EPSILON
    }
}

/// Errors raised when input points cannot describe the requested geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Degenerate line: both defining points are at ({x:.2}, {y:.2})")]
    DegenerateLine { x: f32, y: f32 },
}

pub mod utils_2d;

pub mod intersection;
pub use intersection::solve_implicit_pair;

pub mod line;
pub use line::{ImplicitForm, Line};
