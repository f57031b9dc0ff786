use super::intersection::solve_implicit_pair;
use super::utils_2d::points_equal;
use super::{GeometryError, Vector2, WorldPoint, EPSILON};
use serde::{Deserialize, Serialize};

/// Coefficients of `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImplicitForm {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl ImplicitForm {
    /// Value of `a·x + b·y + c` at `p`; zero on the line.
    pub fn evaluate(&self, p: &WorldPoint) -> f32 {
        self.a * p.x + self.b * p.y + self.c
    }

    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// Vertical lines are stored with `b` forced to exactly zero.
    pub fn is_vertical(&self) -> bool {
        self.b == 0.0
    }

    /// The two points where the line crosses the edges of the world square:
    /// `x = ±1`, or `y = ±1` for a vertical line.
    fn clip_to_world(&self) -> (WorldPoint, WorldPoint) {
        if self.is_vertical() {
            let x = -self.c / self.a;
            (WorldPoint::new(x, -1.0), WorldPoint::new(x, 1.0))
        } else {
            (
                WorldPoint::new(-1.0, (self.a - self.c) / self.b),
                WorldPoint::new(1.0, (-self.a - self.c) / self.b),
            )
        }
    }
}

/// A straight line fitted through two defining points.
///
/// Keeps the implicit form and the render endpoints in lockstep: both only
/// change through `new` and `move_through`. The direction is fixed at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    p1: WorldPoint,
    p2: WorldPoint,
    p3: WorldPoint,
    p4: WorldPoint,
    direction: Vector2,
    implicit: ImplicitForm,
}

impl Line {
    /// Fit a line through `p1` and `p2`.
    ///
    /// Coinciding points yield a degenerate line with a zero direction; use
    /// [`Line::try_new`] to reject them.
    pub fn new(p1: WorldPoint, p2: WorldPoint) -> Self {
        let implicit = if (p1.x - p2.x).abs() < EPSILON {
            ImplicitForm { a: 1.0, b: 0.0, c: -p1.x }
        } else {
            let a = p2.y - p1.y;
            let b = p1.x - p2.x;
            ImplicitForm { a, b, c: -a * p1.x - b * p1.y }
        };
        let (p3, p4) = implicit.clip_to_world();
        Self { p1, p2, p3, p4, direction: p2 - p1, implicit }
    }

    pub fn try_new(p1: WorldPoint, p2: WorldPoint) -> Result<Self, GeometryError> {
        if points_equal(&p1, &p2) {
            return Err(GeometryError::DegenerateLine { x: p1.x, y: p1.y });
        }
        Ok(Self::new(p1, p2))
    }

    pub fn p1(&self) -> WorldPoint {
        self.p1
    }

    pub fn p2(&self) -> WorldPoint {
        self.p2
    }

    pub fn implicit(&self) -> ImplicitForm {
        self.implicit
    }

    /// Parametric direction `p2 - p1` as drawn. Moving the line does not
    /// change it.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Endpoints of the segment that spans the visible world square.
    pub fn render_endpoints(&self) -> [WorldPoint; 2] {
        [self.p3, self.p4]
    }

    pub fn is_degenerate(&self) -> bool {
        points_equal(&self.p1, &self.p2)
    }

    /// True if this line was defined by the same two points, in either order.
    pub fn has_defining_points(&self, p1: &WorldPoint, p2: &WorldPoint) -> bool {
        (points_equal(&self.p1, p1) && points_equal(&self.p2, p2))
            || (points_equal(&self.p1, p2) && points_equal(&self.p2, p1))
    }

    pub fn passes_through(&self, p: &WorldPoint) -> bool {
        self.implicit.evaluate(p).abs() < EPSILON * self.implicit.normal().norm().max(1.0)
    }

    /// Intersection with `other`, or `None` if the lines are parallel or
    /// coincident.
    pub fn find_intersection_point(&self, other: &Line) -> Option<WorldPoint> {
        solve_implicit_pair(&self.implicit, &other.implicit)
    }

    /// Translate the line so it passes through `target`, keeping `a`, `b`
    /// and the direction. The defining points are re-seated on the render
    /// endpoints, ordered so that `p2 - p1` still points along the direction.
    pub fn move_through(&mut self, target: &WorldPoint) {
        let ImplicitForm { a, b, .. } = self.implicit;
        self.implicit.c = -a * target.x - b * target.y;
        let (p3, p4) = self.implicit.clip_to_world();
        self.p3 = p3;
        self.p4 = p4;
        if (p4 - p3).dot(&self.direction) < 0.0 {
            self.p1 = p4;
            self.p2 = p3;
        } else {
            self.p1 = p3;
            self.p2 = p4;
        }
    }
}
