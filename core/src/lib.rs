pub mod config;
pub mod geometry;
pub mod interaction;
pub mod render;
pub mod scene;

pub use config::{ConfigError, EditorConfig, RenderStyle};
pub use geometry::{GeometryError, Line, WorldPoint};
pub use interaction::{ButtonState, Editor, InputEvent, Mode, MouseButton};
pub use render::{DrawCall, Frame, PrimitiveKind, Renderer, Rgb};
pub use scene::{Scene, SceneError, SceneEvent};

pub fn version() -> &'static str {
    "0.1.0"
}
