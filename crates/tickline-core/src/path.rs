// File: crates/tickline-core/src/path.rs
// Summary: Builds the viewport-local polyline for a series from a precomputed transform.

use std::iter::FusedIterator;

use crate::geometry::{PathPoint, RectF};
use crate::metrics::Transform;

/// Lazy sequence of path points, one per sample.
///
/// The first point is always at local x = 0. Callers translate the whole path
/// to `(viewport.left, zero_y)` before stroking.
#[derive(Clone, Debug)]
pub struct PathPoints<'a> {
    transform: Transform,
    times: &'a [i64],
    values: &'a [f32],
    index: usize,
    length: usize,
}

impl Iterator for PathPoints<'_> {
    type Item = PathPoint;

    fn next(&mut self) -> Option<PathPoint> {
        if self.index >= self.length {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let y = self.transform.value_to_local_y(self.values[i]);
        if i == 0 {
            return Some(PathPoint::new(0.0, y));
        }
        Some(PathPoint::new(self.transform.time_to_local_x(self.times[i], self.times[0]), y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.length - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PathPoints<'_> {}
impl FusedIterator for PathPoints<'_> {}

/// Iterate the path for the first `length` samples without allocating.
///
/// # Panics
/// Iteration panics once it reaches an index past `times` or `values`;
/// callers guarantee `length` fits both.
pub fn path_points<'a>(transform: &Transform, times: &'a [i64], values: &'a [f32], length: usize) -> PathPoints<'a> {
    PathPoints { transform: *transform, times, values, index: 0, length }
}

/// Collect the path for the first `length` samples.
///
/// # Panics
/// When `length` exceeds `times.len()` or `values.len()`.
pub fn build_path(transform: &Transform, times: &[i64], values: &[f32], length: usize) -> RenderPath {
    let mut points = Vec::with_capacity(length);
    points.extend(path_points(transform, times, values, length));
    RenderPath { points }
}

/// Materialized polyline, reused across frames until the next rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderPath {
    points: Vec<PathPoint>,
}

impl RenderPath {
    pub fn points(&self) -> &[PathPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, PathPoint> { self.points.iter() }
    pub fn first(&self) -> Option<PathPoint> { self.points.first().copied() }
    pub fn last(&self) -> Option<PathPoint> { self.points.last().copied() }

    /// Local bounding box of all points, `None` when empty.
    pub fn bounds(&self) -> Option<RectF> {
        let first = self.first()?;
        let init = RectF::from_ltrb(first.x, first.y, first.x, first.y);
        Some(self.points.iter().fold(init, |r, p| {
            RectF::from_ltrb(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y))
        }))
    }

    pub(crate) fn clear(&mut self) {
        self.points.clear();
    }

    /// Rebuild in place, reusing the allocation.
    pub(crate) fn rebuild(&mut self, transform: &Transform, times: &[i64], values: &[f32], length: usize) {
        self.points.clear();
        self.points.extend(path_points(transform, times, values, length));
    }
}

impl<'a> IntoIterator for &'a RenderPath {
    type Item = &'a PathPoint;
    type IntoIter = std::slice::Iter<'a, PathPoint>;

    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
