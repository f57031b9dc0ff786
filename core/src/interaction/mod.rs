//! Mode-dependent input handling.

pub mod editor;
pub mod input;
pub mod mode;

pub use editor::{Editor, Gesture};
pub use input::{ButtonState, InputEvent, MouseButton, Viewport};
pub use mode::Mode;

#[cfg(test)]
mod tests_support;
#[cfg(test)]
mod tests_modes;
#[cfg(test)]
mod tests_draw_line;
