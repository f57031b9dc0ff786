use super::{ButtonState, Editor, InputEvent, MouseButton};
use crate::geometry::{Line, WorldPoint};
use crate::scene::SceneEvent;

/// Pixel under a world position in the default 600x600 window.
pub fn pixel(x: f32, y: f32) -> (i32, i32) {
    (((x + 1.0) * 300.0).round() as i32, ((1.0 - y) * 300.0).round() as i32)
}

pub fn key(editor: &mut Editor, key: char) {
    editor.handle(InputEvent::Key { key, state: ButtonState::Pressed });
    editor.handle(InputEvent::Key { key, state: ButtonState::Released });
}

pub fn button(editor: &mut Editor, button: MouseButton, state: ButtonState, x: f32, y: f32) {
    let (px, py) = pixel(x, y);
    editor.handle(InputEvent::Button { button, state, x: px, y: py });
}

/// Left press followed by release at the same spot.
pub fn click(editor: &mut Editor, x: f32, y: f32) {
    button(editor, MouseButton::Left, ButtonState::Pressed, x, y);
    button(editor, MouseButton::Left, ButtonState::Released, x, y);
}

pub fn motion(editor: &mut Editor, x: f32, y: f32) {
    let (px, py) = pixel(x, y);
    editor.handle(InputEvent::Motion { x: px, y: py });
}

/// Place both points and fit a line through them, leaving the editor in
/// draw-line mode.
pub fn draw_line(editor: &mut Editor, from: (f32, f32), to: (f32, f32)) -> Line {
    key(editor, 'p');
    click(editor, from.0, from.1);
    click(editor, to.0, to.1);
    key(editor, 'l');
    click(editor, from.0, from.1);
    click(editor, to.0, to.1);
    *editor
        .scene()
        .lines()
        .iter()
        .last()
        .expect("line should have been drawn")
}

pub fn last_point(editor: &Editor) -> WorldPoint {
    *editor.scene().points().iter().last().expect("no points")
}

pub fn points_added(events: &[SceneEvent]) -> usize {
    events.iter().filter(|e| matches!(e, SceneEvent::PointAdded { .. })).count()
}
