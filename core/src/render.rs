//! Render contract: the core describes what to draw, the collaborator owns
//! how (shaders, buffers, the window).

use crate::config::RenderStyle;
use crate::geometry::WorldPoint;
use crate::scene::Scene;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Points,
    /// Consecutive pairs of positions form independent segments.
    Segments,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(level: f32) -> Self {
        Self::new(level, level, level)
    }
}

pub trait Renderer {
    fn draw_primitives(&mut self, kind: PrimitiveKind, positions: &[WorldPoint], color: Rgb);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    pub positions: Vec<[f32; 2]>,
    pub color: Rgb,
}

/// Everything needed to paint one frame, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear_color: Rgb,
    pub point_size: f32,
    pub line_width: f32,
    pub draws: Vec<DrawCall>,
}

/// A [`Renderer`] that records draw calls instead of submitting them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    draws: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn into_frame(self, style: &RenderStyle) -> Frame {
        Frame {
            clear_color: style.background,
            point_size: style.point_size,
            line_width: style.line_width,
            draws: self.draws,
        }
    }
}

impl Renderer for DrawList {
    fn draw_primitives(&mut self, kind: PrimitiveKind, positions: &[WorldPoint], color: Rgb) {
        self.draws.push(DrawCall {
            kind,
            positions: positions.iter().map(|p| [p.x, p.y]).collect(),
            color,
        });
    }
}

/// Issue one segment batch (every line's render endpoints) followed by one
/// point batch, so points stay on top. Both calls are made even when empty.
pub fn render_scene<R: Renderer + ?Sized>(scene: &Scene, style: &RenderStyle, renderer: &mut R) {
    let segments: Vec<WorldPoint> = scene
        .lines()
        .iter()
        .flat_map(|line| line.render_endpoints())
        .collect();
    renderer.draw_primitives(PrimitiveKind::Segments, &segments, style.line_color);
    renderer.draw_primitives(PrimitiveKind::Points, scene.points().as_slice(), style.point_color);
}
