use super::input::{ButtonState, InputEvent, MouseButton, Viewport};
use super::mode::Mode;
use crate::config::EditorConfig;
use crate::geometry::{Line, WorldPoint};
use crate::render::{render_scene, DrawList, Frame, Renderer};
use crate::scene::{Scene, SceneEvent};
use tracing::{debug, info, warn};

/// Selection state carried between clicks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gesture {
    /// First line picked in intersect mode, kept by value.
    pub first_intersect: Option<Line>,
    /// Index of the line following the cursor in move mode.
    pub drag: Option<usize>,
}

/// Owns the scene and turns raw input into edits according to the current
/// mode.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    viewport: Viewport,
    mode: Mode,
    scene: Scene,
    gesture: Gesture,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            viewport: config.viewport(),
            scene: Scene::new(config.line_picking()),
            mode: Mode::default(),
            gesture: Gesture::default(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, state } => self.handle_key(key, state),
            InputEvent::Button { button, state, x, y } => self.handle_button(button, state, x, y),
            InputEvent::Motion { x, y } => self.handle_motion(x, y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Mode keys apply on press and on release alike.
    pub fn handle_key(&mut self, key: char, _state: ButtonState) {
        match Mode::from_key(key) {
            Some(mode) => self.set_mode(mode),
            None => debug!(%key, "Ignoring key with no mode"),
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        if self.config.cancel_gestures_on_mode_switch {
            self.cancel_gestures();
        }
        self.mode = mode;
        info!(?mode, "{}", mode);
        self.scene.push_event(SceneEvent::ModeChanged { mode });
    }

    /// Abandon a half-drawn line, a pending intersect selection and any drag.
    pub fn cancel_gestures(&mut self) {
        let dropped_line = self.scene.cancel_line();
        let had_gesture = self.gesture != Gesture::default();
        self.gesture = Gesture::default();
        if dropped_line || had_gesture {
            debug!(dropped_line, had_gesture, "Cancelled pending gesture");
        }
    }

    pub fn handle_button(&mut self, button: MouseButton, state: ButtonState, x: i32, y: i32) {
        let pos = self.viewport.to_world(x, y);
        match (button, state) {
            (MouseButton::Left, ButtonState::Pressed) => self.on_left_press(pos),
            (MouseButton::Left, ButtonState::Released) => self.on_left_release(),
            (button, state) => {
                info!(?button, ?state, x = pos.x, y = pos.y, "Button event");
                self.scene.push_event(SceneEvent::ButtonLogged {
                    button,
                    state,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }
    }

    pub fn handle_motion(&mut self, x: i32, y: i32) {
        if self.mode != Mode::MoveLine {
            return;
        }
        let Some(index) = self.gesture.drag else {
            return;
        };
        let pos = self.viewport.to_world(x, y);
        if let Err(e) = self.scene.move_line(index, &pos) {
            warn!("Dropping drag: {}", e);
            self.gesture.drag = None;
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!(width, height, "Ignoring degenerate resize");
            return;
        }
        self.viewport = Viewport::new(width, height);
        debug!(width, height, "Viewport resized");
    }

    fn on_left_press(&mut self, pos: WorldPoint) {
        match self.mode {
            Mode::PlacePoint => {
                self.scene.add_point(pos);
            }
            Mode::DrawLine => self.draw_line_click(pos),
            Mode::Intersect => self.intersect_click(pos),
            Mode::MoveLine => {
                self.gesture.drag = self.scene.lines().find_nearest_line(&pos);
                match self.gesture.drag {
                    Some(index) => debug!(index, "Dragging line"),
                    None => debug!(x = pos.x, y = pos.y, "No line under cursor to drag"),
                }
            }
        }
    }

    fn on_left_release(&mut self) {
        if self.gesture.drag.take().is_some() {
            debug!("Drag finished");
        }
    }

    fn draw_line_click(&mut self, pos: WorldPoint) {
        if self.scene.points().count() < 2 {
            debug!("Need at least two points to draw a line");
            return;
        }
        let Some(anchor) = self.scene.nearest_point(&pos) else {
            return;
        };

        let result = if self.scene.lines().is_drawing() {
            self.scene.finish_line(anchor).map(|_| ())
        } else {
            self.scene.start_line(anchor)
        };
        if let Err(e) = result {
            warn!("Line not drawn: {}", e);
        }
    }

    fn intersect_click(&mut self, pos: WorldPoint) {
        let Some(picked) = self
            .scene
            .lines()
            .find_nearest_line(&pos)
            .and_then(|index| self.scene.lines().get(index))
            .copied()
        else {
            debug!(x = pos.x, y = pos.y, "No line under cursor to intersect");
            return;
        };

        let Some(first) = self.gesture.first_intersect.take() else {
            self.gesture.first_intersect = Some(picked);
            return;
        };

        // The first pick may have been moved since it was selected.
        if self.scene.lines().index_of(&first).is_none() {
            warn!("First intersect selection no longer exists, restarting selection");
            self.gesture.first_intersect = Some(picked);
            return;
        }

        match first.find_intersection_point(&picked) {
            Some(p) => {
                self.scene.add_point(p);
            }
            None => warn!("Selected lines are parallel, no intersection"),
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_scene(&self.scene, &self.config.style, renderer);
    }

    /// Snapshot of the current scene as a serializable frame.
    pub fn frame(&self) -> Frame {
        let mut list = DrawList::new();
        self.render(&mut list);
        list.into_frame(&self.config.style)
    }

    /// Take every event recorded since the last drain. Events accumulate
    /// until this is called, so embedders should drain after each input.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.scene.drain_events()
    }

    /// Whether the scene changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        self.scene.take_dirty()
    }
}
