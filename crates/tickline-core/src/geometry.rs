// File: crates/tickline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (integer viewport, float rects and points).

use crate::types::Insets;

/// Integer pixel rectangle, edges are `left..right` and `top..bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// True when the rect has no area (zero or negative width or height).
    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Local content area of a `width` x `height` frame once `padding` is removed.
    /// The result is anchored at the padding corner, not at the frame origin.
    pub fn content_area(width: i32, height: i32, padding: &Insets) -> Self {
        // padding past i32::MAX saturates, leaving an empty area
        let px = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::from_ltrb(
            px(padding.left),
            px(padding.top),
            width.saturating_sub(px(padding.right)),
            height.saturating_sub(px(padding.bottom)),
        )
    }
}

/// Float rectangle used for draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
}

/// A point in viewport-local path space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }
}
