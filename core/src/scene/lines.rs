use super::{SceneError, SceneResult};
use crate::geometry::utils_2d::distance_point_to_line;
use crate::geometry::{Line, WorldPoint};
use serde::{Deserialize, Serialize};

/// Hit-testing limits for [`LineRegistry::find_nearest_line`], in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePicking {
    /// A click must be closer than this to select a line.
    pub threshold: f32,
    /// Absolute upper bound on the accepted distance.
    pub distance_cap: f32,
}

impl Default for LinePicking {
    fn default() -> Self {
        Self {
            threshold: 0.01,
            distance_cap: 20.0,
        }
    }
}

/// Ordered collection of lines plus the start point of a line being drawn.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRegistry {
    lines: Vec<Line>,
    pending_start: Option<WorldPoint>,
    picking: LinePicking,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_picking(picking: LinePicking) -> Self {
        Self {
            picking,
            ..Self::default()
        }
    }

    /// Remember `start` as the first point of a new line.
    ///
    /// Fails if a line is already pending; the original start is kept.
    pub fn start_drawing(&mut self, start: WorldPoint) -> SceneResult<()> {
        if let Some(existing) = self.pending_start {
            return Err(SceneError::LineAlreadyPending { x: existing.x, y: existing.y });
        }
        self.pending_start = Some(start);
        Ok(())
    }

    /// Complete the pending line at `end`, store it and return its index.
    ///
    /// A degenerate end (same as the start) is rejected and the pending start
    /// stays in place so another end can be picked.
    pub fn finish_drawing(&mut self, end: WorldPoint) -> SceneResult<usize> {
        let start = self.pending_start.ok_or(SceneError::NoPendingLine)?;
        let line = Line::try_new(start, end)?;
        self.pending_start = None;
        Ok(self.add_line(line))
    }

    /// Drop the pending start, if any. Returns whether something was dropped.
    pub fn cancel_drawing(&mut self) -> bool {
        self.pending_start.take().is_some()
    }

    pub fn is_drawing(&self) -> bool {
        self.pending_start.is_some()
    }

    pub fn pending_start(&self) -> Option<WorldPoint> {
        self.pending_start
    }

    pub fn add_line(&mut self, line: Line) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }

    /// Index of the line closest to `click`, measured perpendicular to the
    /// infinite line through its defining points. Lines farther than the
    /// picking threshold are never returned; the first minimum wins.
    pub fn find_nearest_line(&self, click: &WorldPoint) -> Option<usize> {
        let mut min_distance = self.picking.distance_cap;
        let mut nearest = None;

        for (i, line) in self.lines.iter().enumerate() {
            let Some(d) = distance_point_to_line(&line.p1(), &line.p2(), click) else {
                continue;
            };
            if d < min_distance && d < self.picking.threshold {
                min_distance = d;
                nearest = Some(i);
            }
        }

        nearest
    }

    /// Locate a stored line with the same defining points as `line`, in
    /// either order.
    pub fn index_of(&self, line: &Line) -> Option<usize> {
        self.lines
            .iter()
            .position(|stored| stored.has_defining_points(&line.p1(), &line.p2()))
    }

    /// Translate the stored line at `index` so it passes through `target`.
    pub fn move_line(&mut self, index: usize, target: &WorldPoint) -> SceneResult<&Line> {
        let count = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(SceneError::LineIndexOutOfRange { index, count })?;
        line.move_through(target);
        Ok(&*line)
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn picking(&self) -> LinePicking {
        self.picking
    }
}
