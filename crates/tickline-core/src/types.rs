// File: crates/tickline-core/src/types.rs
// Summary: Shared types and constants (default surface size, paddings, bounds, grid steps).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 200;

/// Widget padding, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

/// Visible value range supplied by the caller. `min == max` is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueBounds {
    pub min: f32,
    pub max: f32,
}

impl ValueBounds {
    pub const fn new(min: f32, max: f32) -> Self { Self { min, max } }
    pub fn is_finite(&self) -> bool { self.min.is_finite() && self.max.is_finite() }
}

/// Grid spacing: `x` in nanoseconds, `y` in value units.
/// Stored alongside the series; nothing renders gridlines yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridSteps {
    pub x: i64,
    pub y: f32,
}

impl GridSteps {
    pub const fn new(x: i64, y: f32) -> Self { Self { x, y } }
}
