// File: crates/tickline-core/src/surface.rs
// Summary: Backend-agnostic drawing surface trait and an in-memory recording surface.

use crate::geometry::{PathPoint, RectF};
use crate::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

/// Stroke paint for the series polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStroke {
    pub width: f32,
    pub color: Color,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
}

impl LineStroke {
    /// Rounded caps and joins, anti-aliasing is left to the backend.
    pub fn rounded(width: f32, color: Color) -> Self {
        Self { width, color, cap: StrokeCap::Round, join: StrokeJoin::Round }
    }
}

/// Immediate-mode drawing target the widget issues its frame into.
///
/// `translate` applies to everything drawn until the matching `restore`.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: RectF, color: Color);
    fn stroke_path(&mut self, points: &[PathPoint], stroke: &LineStroke);
    fn save(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn restore(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: RectF, color: Color },
    StrokePath { points: Vec<PathPoint>, stroke: LineStroke },
    Save,
    Translate { dx: f32, dy: f32 },
    Restore,
}

/// Records draw calls instead of rasterizing them. Used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.commands.clear(); }

    pub fn count_fill_rects(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::FillRect { .. })).count()
    }

    pub fn count_stroke_paths(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::StrokePath { .. })).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_path(&mut self, points: &[PathPoint], stroke: &LineStroke) {
        self.commands.push(DrawCommand::StrokePath { points: points.to_vec(), stroke: *stroke });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
}
