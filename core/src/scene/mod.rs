//! The editable geometry: user points, fitted lines, and the log of changes.

use crate::geometry::{GeometryError, Line, WorldPoint};
use thiserror::Error;
use tracing::info;

pub mod events;
pub mod lines;
pub mod points;

pub use events::{EventLog, SceneEvent};
pub use lines::{LinePicking, LineRegistry};
pub use points::PointRegistry;

/// Errors from registry operations called out of order or out of range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("No line is being drawn")]
    NoPendingLine,

    #[error("A line starting at ({x:.2}, {y:.2}) is already being drawn")]
    LineAlreadyPending { x: f32, y: f32 },

    #[error("Line index {index} out of range ({count} lines)")]
    LineIndexOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Both registries plus the bookkeeping a renderer and an event consumer
/// need: every creation is recorded in the event log, and every visible
/// change raises the dirty flag.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    points: PointRegistry,
    lines: LineRegistry,
    events: EventLog,
    dirty: bool,
}

impl Scene {
    pub fn new(picking: LinePicking) -> Self {
        Self {
            lines: LineRegistry::with_picking(picking),
            ..Self::default()
        }
    }

    pub fn points(&self) -> &PointRegistry {
        &self.points
    }

    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    pub fn add_point(&mut self, p: WorldPoint) -> usize {
        let index = self.points.add(p);
        info!(x = p.x, y = p.y, index, "Point added");
        self.events.push(SceneEvent::point_added(&p));
        self.dirty = true;
        index
    }

    pub fn nearest_point(&self, query: &WorldPoint) -> Option<WorldPoint> {
        self.points.nearest(query)
    }

    pub fn start_line(&mut self, start: WorldPoint) -> SceneResult<()> {
        self.lines.start_drawing(start)
    }

    pub fn finish_line(&mut self, end: WorldPoint) -> SceneResult<usize> {
        let index = self.lines.finish_drawing(end)?;
        self.record_line(index);
        Ok(index)
    }

    pub fn cancel_line(&mut self) -> bool {
        self.lines.cancel_drawing()
    }

    pub fn add_line(&mut self, line: Line) -> usize {
        let index = self.lines.add_line(line);
        self.record_line(index);
        index
    }

    pub fn move_line(&mut self, index: usize, target: &WorldPoint) -> SceneResult<()> {
        self.lines.move_line(index, target)?;
        self.dirty = true;
        Ok(())
    }

    pub fn push_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.events.drain()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn record_line(&mut self, index: usize) {
        if let Some(line) = self.lines.get(index) {
            let event = SceneEvent::line_added(line);
            if let SceneEvent::LineAdded { implicit, parametric } = &event {
                info!(
                    index,
                    a = implicit.a,
                    b = implicit.b,
                    c = implicit.c,
                    origin_x = parametric.origin.x,
                    origin_y = parametric.origin.y,
                    dir_x = parametric.direction.x,
                    dir_y = parametric.direction.y,
                    "Line added"
                );
            }
            self.events.push(event);
            self.dirty = true;
        }
    }
}
