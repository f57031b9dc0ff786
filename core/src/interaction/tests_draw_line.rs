use super::tests_support::{click, draw_line, key};
use super::Editor;
use crate::geometry::{ApproxEq, ImplicitForm, Vector2, WorldPoint};
use crate::scene::SceneEvent;

#[test]
fn test_needs_two_points() {
    let mut editor = Editor::default();
    click(&mut editor, 0.2, 0.2);
    key(&mut editor, 'l');

    click(&mut editor, 0.2, 0.2);
    assert!(!editor.scene().lines().is_drawing());
    assert!(editor.scene().lines().is_empty());
}

#[test]
fn test_line_snaps_to_nearest_points() {
    let mut editor = Editor::default();
    click(&mut editor, -0.5, -0.5);
    click(&mut editor, 0.5, 0.5);
    key(&mut editor, 'l');
    editor.drain_events();

    // Near, not on, the stored points.
    click(&mut editor, -0.45, -0.52);
    assert_eq!(editor.scene().lines().pending_start(), Some(WorldPoint::new(-0.5, -0.5)));
    click(&mut editor, 0.6, 0.4);

    let line = editor.scene().lines().get(0).copied().unwrap();
    assert_eq!(line.p1(), WorldPoint::new(-0.5, -0.5));
    assert_eq!(line.p2(), WorldPoint::new(0.5, 0.5));
    assert_eq!(line.implicit(), ImplicitForm { a: 1.0, b: -1.0, c: 0.0 });
    assert!(line.direction().approx_eq(&Vector2::new(1.0, 1.0)));

    let events = editor.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], SceneEvent::LineAdded { .. }));
}

#[test]
fn test_same_point_twice_keeps_waiting() {
    let mut editor = Editor::default();
    click(&mut editor, -0.5, 0.0);
    click(&mut editor, 0.5, 0.0);
    key(&mut editor, 'l');

    click(&mut editor, -0.5, 0.0);
    click(&mut editor, -0.49, 0.01);
    assert!(editor.scene().lines().is_empty());
    assert!(editor.scene().lines().is_drawing());

    click(&mut editor, 0.5, 0.0);
    assert_eq!(editor.scene().lines().count(), 1);
    assert!(!editor.scene().lines().is_drawing());
}

#[test]
fn test_consecutive_lines() {
    let mut editor = Editor::default();
    draw_line(&mut editor, (-0.5, 0.0), (0.5, 0.0));
    draw_line(&mut editor, (0.0, -0.5), (0.0, 0.5));

    let lines = editor.scene().lines();
    assert_eq!(lines.count(), 2);
    assert!(lines.get(1).unwrap().implicit().is_vertical());
}
