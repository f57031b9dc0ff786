//! Structured records of what happened to the scene.
//!
//! These replace console output: a front end or test harness drains them from
//! the [`EventLog`] and renders or asserts on them however it likes.

use crate::geometry::{ImplicitForm, Line, Vector2, WorldPoint};
use crate::interaction::{ButtonState, Mode, MouseButton};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x: f32,
    pub y: f32,
}

impl From<WorldPoint> for Coords {
    fn from(p: WorldPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Vector2> for Coords {
    fn from(v: Vector2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// `r(t) = origin + t·direction`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParametricForm {
    pub origin: Coords,
    pub direction: Coords,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    PointAdded {
        x: f32,
        y: f32,
    },
    LineAdded {
        implicit: ImplicitForm,
        parametric: ParametricForm,
    },
    ModeChanged {
        mode: Mode,
    },
    /// Middle and right clicks only report where they happened.
    ButtonLogged {
        button: MouseButton,
        state: ButtonState,
        x: f32,
        y: f32,
    },
}

impl SceneEvent {
    pub fn point_added(p: &WorldPoint) -> Self {
        Self::PointAdded { x: p.x, y: p.y }
    }

    /// `c` is re-derived from the first defining point rather than copied.
    pub fn line_added(line: &Line) -> Self {
        let ImplicitForm { a, b, .. } = line.implicit();
        let origin = line.p1();
        Self::LineAdded {
            implicit: ImplicitForm { a, b, c: -a * origin.x - b * origin.y },
            parametric: ParametricForm {
                origin: origin.into(),
                direction: line.direction().into(),
            },
        }
    }
}

/// Ordered buffer of events waiting to be drained.
///
/// Nothing is dropped on its own: whoever owns the editor must call
/// [`EventLog::drain`] (via `Editor::drain_events`) after handling input, or
/// the log keeps growing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventLog {
    entries: Vec<SceneEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: SceneEvent) {
        self.entries.push(event);
    }

    pub fn drain(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEvent> {
        self.entries.iter()
    }
}
