use crate::geometry::WorldPoint;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Input delivered by the windowing layer. Positions are device pixels with
/// the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: char, state: ButtonState },
    Button { button: MouseButton, state: ButtonState, x: i32, y: i32 },
    Motion { x: i32, y: i32 },
    Resize { width: u32, height: u32 },
}

/// Maps window pixels onto the world square `[-1, 1] × [-1, 1]`, y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 600, height: 600 }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn to_world(&self, x: i32, y: i32) -> WorldPoint {
        WorldPoint::new(
            2.0 * x as f32 / self.width as f32 - 1.0,
            1.0 - 2.0 * y as f32 / self.height as f32,
        )
    }
}
