use super::tests_support::{button, click, draw_line, key, motion, pixel};
use super::{ButtonState, Editor, InputEvent, Mode, MouseButton};
use crate::config::EditorConfig;
use crate::geometry::{ApproxEq, WorldPoint};
use crate::scene::SceneEvent;

#[test]
fn test_keys_select_modes() {
    let mut editor = Editor::default();
    assert_eq!(editor.mode(), Mode::PlacePoint);

    key(&mut editor, 'l');
    assert_eq!(editor.mode(), Mode::DrawLine);
    key(&mut editor, 'm');
    assert_eq!(editor.mode(), Mode::MoveLine);
    key(&mut editor, 'i');
    assert_eq!(editor.mode(), Mode::Intersect);
    key(&mut editor, 'q');
    assert_eq!(editor.mode(), Mode::Intersect);
    key(&mut editor, 'p');
    assert_eq!(editor.mode(), Mode::PlacePoint);
}

#[test]
fn test_mode_change_logged_once_per_switch() {
    let mut editor = Editor::default();
    // Press and release both select the mode; only the change is recorded.
    key(&mut editor, 'l');
    key(&mut editor, 'l');
    assert_eq!(editor.drain_events(), vec![SceneEvent::ModeChanged { mode: Mode::DrawLine }]);
}

#[test]
fn test_place_point_at_cursor() {
    let mut editor = Editor::default();
    click(&mut editor, 0.5, -0.25);

    let points = editor.scene().points();
    assert_eq!(points.count(), 1);
    assert!(points.get(0).unwrap().approx_eq(&WorldPoint::new(0.5, -0.25)));
    assert_eq!(editor.drain_events(), vec![SceneEvent::PointAdded { x: 0.5, y: -0.25 }]);
    assert!(editor.take_dirty());
}

#[test]
fn test_release_does_not_place_point() {
    let mut editor = Editor::default();
    button(&mut editor, MouseButton::Left, ButtonState::Released, 0.1, 0.1);
    assert!(editor.scene().points().is_empty());
}

#[test]
fn test_middle_and_right_buttons_only_log() {
    let mut editor = Editor::default();
    button(&mut editor, MouseButton::Middle, ButtonState::Pressed, 0.0, 0.5);
    button(&mut editor, MouseButton::Right, ButtonState::Released, -0.5, 0.0);

    assert!(editor.scene().points().is_empty());
    assert!(!editor.take_dirty());
    assert_eq!(
        editor.drain_events(),
        vec![
            SceneEvent::ButtonLogged { button: MouseButton::Middle, state: ButtonState::Pressed, x: 0.0, y: 0.5 },
            SceneEvent::ButtonLogged { button: MouseButton::Right, state: ButtonState::Released, x: -0.5, y: 0.0 },
        ]
    );
}

#[test]
fn test_mode_switch_cancels_pending_line() {
    let mut editor = Editor::default();
    click(&mut editor, -0.5, 0.0);
    click(&mut editor, 0.5, 0.0);
    key(&mut editor, 'l');
    click(&mut editor, -0.5, 0.0);
    assert!(editor.scene().lines().is_drawing());

    key(&mut editor, 'p');
    key(&mut editor, 'l');
    assert!(!editor.scene().lines().is_drawing());
}

#[test]
fn test_mode_switch_keeps_pending_line_when_configured() {
    let config = EditorConfig {
        cancel_gestures_on_mode_switch: false,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(config);
    click(&mut editor, -0.5, 0.0);
    click(&mut editor, 0.5, 0.0);
    key(&mut editor, 'l');
    click(&mut editor, -0.5, 0.0);

    key(&mut editor, 'p');
    key(&mut editor, 'l');
    assert_eq!(editor.scene().lines().pending_start(), Some(WorldPoint::new(-0.5, 0.0)));

    click(&mut editor, 0.5, 0.0);
    assert_eq!(editor.scene().lines().count(), 1);
}

#[test]
fn test_mode_switch_drops_active_drag() {
    let mut editor = Editor::default();
    let original = draw_line(&mut editor, (-0.5, 0.0), (0.5, 0.0));
    key(&mut editor, 'm');
    button(&mut editor, MouseButton::Left, ButtonState::Pressed, 0.0, 0.0);
    assert_eq!(editor.gesture().drag, Some(0));

    key(&mut editor, 'p');
    key(&mut editor, 'm');
    assert_eq!(editor.gesture().drag, None);

    motion(&mut editor, 0.0, 0.6);
    assert_eq!(editor.scene().lines().get(0), Some(&original));
}

#[test]
fn test_config_sets_line_picking() {
    let config = EditorConfig {
        pick_threshold: 0.05,
        pick_distance_cap: 2.0,
        ..EditorConfig::default()
    };
    let editor = Editor::new(config.clone());
    assert_eq!(editor.scene().lines().picking(), config.line_picking());
}

#[test]
fn test_resize_changes_coordinate_mapping() {
    let mut editor = Editor::default();
    editor.handle(InputEvent::Resize { width: 800, height: 400 });
    editor.handle(InputEvent::Button {
        button: MouseButton::Left,
        state: ButtonState::Pressed,
        x: 600,
        y: 100,
    });
    assert!(editor.scene().points().get(0).unwrap().approx_eq(&WorldPoint::new(0.5, 0.5)));

    // Zero-sized windows are ignored rather than dividing by zero.
    editor.handle(InputEvent::Resize { width: 0, height: 400 });
    assert_eq!(editor.viewport().width, 800);
}

#[test]
fn test_pixel_helper_matches_viewport() {
    let editor = Editor::default();
    let (x, y) = pixel(-0.5, 0.5);
    assert_eq!(editor.viewport().to_world(x, y), WorldPoint::new(-0.5, 0.5));
}
