// File: crates/tickline-core/src/metrics.rs
// Summary: Viewport transform (value multiplier, time divisor, zero-line row) derived from bounds and series span.

use tracing::debug;

use crate::geometry::RectI32;

/// Cached mapping from data space to viewport-local pixels.
///
/// Y is inverted: larger values land on smaller pixel rows. Values are
/// relative to the zero line, times are relative to the first sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    mult_y: f32,
    div_x: f64,
    zero_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { mult_y: 0.0, div_x: 1.0, zero_y: 0.0 }
    }
}

impl Transform {
    /// Pixels per value unit (negative for a normal `min < max` range).
    pub fn mult_y(&self) -> f32 { self.mult_y }
    /// Nanoseconds per pixel column. Never zero.
    pub fn div_x(&self) -> f64 { self.div_x }
    /// Absolute pixel row where value 0 falls.
    pub fn zero_y(&self) -> f32 { self.zero_y }

    #[inline]
    pub fn value_to_local_y(&self, value: f32) -> f32 {
        value * self.mult_y
    }

    #[inline]
    pub fn time_to_local_x(&self, time: i64, first: i64) -> f32 {
        (nanos_between(first, time) / self.div_x) as f32
    }
}

/// `to - from` without `i64` overflow.
#[inline]
fn nanos_between(from: i64, to: i64) -> f64 {
    (i128::from(to) - i128::from(from)) as f64
}

/// Recompute the transform for `viewport` and the first `length` entries of `times`.
///
/// Degenerate inputs never fail:
/// - `min == max` keeps `previous.mult_y` and puts the zero line on `viewport.top`.
/// - a non-finite multiplier (NaN or infinite bounds) also keeps `previous.mult_y`,
///   or falls to `0` when that is not finite either.
/// - no samples or zero width keeps `previous.div_x`.
/// - a zero divisor becomes `1`.
///
/// # Panics
/// When `length > times.len()`.
pub fn compute_transform(
    previous: &Transform,
    viewport: &RectI32,
    times: &[i64],
    length: usize,
    min: f32,
    max: f32,
) -> Transform {
    let width = viewport.width();
    let height = viewport.height() as f32;

    let mut mult_y = if min != max {
        // min - max inverts the axis, pixel rows grow downwards
        height / (min - max)
    } else {
        debug!(min, max, mult_y = previous.mult_y, "zero value span; keeping previous y multiplier");
        previous.mult_y
    };
    if !mult_y.is_finite() {
        debug!(min, max, "non-finite y multiplier; keeping previous");
        mult_y = if previous.mult_y.is_finite() { previous.mult_y } else { 0.0 };
    }

    let mut div_x = previous.div_x;
    if length > 0 && width != 0 {
        div_x = nanos_between(times[0], times[length - 1]) / f64::from(width);
    }
    if div_x == 0.0 {
        div_x = 1.0;
    }

    let top = viewport.top as f32;
    let mut zero_y = if max != min { top + height * max / (max - min) } else { top };
    if !zero_y.is_finite() {
        zero_y = top;
    }

    Transform { mult_y, div_x, zero_y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn viewport(w: i32, h: i32) -> RectI32 {
        RectI32::from_ltwh(0, 0, w, h)
    }

    #[test]
    fn scenario_values_zero_to_ten() {
        let t = compute_transform(&Transform::default(), &viewport(100, 100), &[0, 10, 20], 3, 0.0, 10.0);
        assert_relative_eq!(t.mult_y(), -10.0);
        assert_relative_eq!(t.div_x(), 0.2);
        // value 0 is the bottom edge when min is 0
        assert_relative_eq!(t.zero_y(), 100.0);
    }

    #[test]
    fn zero_line_sits_between_signed_bounds() {
        let vp = RectI32::from_ltrb(4, 10, 104, 110);
        let t = compute_transform(&Transform::default(), &vp, &[0, 1], 2, -5.0, 15.0);
        assert_relative_eq!(t.zero_y(), 10.0 + 100.0 * 15.0 / 20.0);
        assert_relative_eq!(t.mult_y(), -5.0);
    }

    #[test]
    fn flat_bounds_default_to_zero_multiplier() {
        let t = compute_transform(&Transform::default(), &viewport(50, 40), &[0, 10], 2, 3.0, 3.0);
        assert_eq!(t.mult_y(), 0.0);
        assert_eq!(t.zero_y(), 0.0);
    }

    #[test]
    fn flat_bounds_keep_previous_multiplier() {
        let vp = RectI32::from_ltrb(0, 7, 50, 47);
        let first = compute_transform(&Transform::default(), &vp, &[0, 10], 2, 0.0, 4.0);
        let second = compute_transform(&first, &vp, &[0, 10], 2, 2.0, 2.0);
        assert_relative_eq!(second.mult_y(), first.mult_y());
        assert_eq!(second.zero_y(), 7.0);
        assert!(second.zero_y().is_finite());
    }

    #[test]
    fn identical_timestamps_force_unit_divisor() {
        let t = compute_transform(&Transform::default(), &viewport(100, 100), &[5, 5, 5], 3, 0.0, 1.0);
        assert_eq!(t.div_x(), 1.0);
    }

    #[test]
    fn empty_series_keeps_previous_divisor() {
        let first = compute_transform(&Transform::default(), &viewport(10, 10), &[0, 100], 2, 0.0, 1.0);
        let second = compute_transform(&first, &viewport(20, 10), &[], 0, 0.0, 1.0);
        assert_relative_eq!(second.div_x(), 10.0);
    }

    #[test]
    fn zero_width_keeps_previous_divisor() {
        let first = compute_transform(&Transform::default(), &viewport(10, 10), &[0, 50], 2, 0.0, 1.0);
        let second = compute_transform(&first, &RectI32::from_ltrb(3, 0, 3, 10), &[0, 500], 2, 0.0, 1.0);
        assert_relative_eq!(second.div_x(), 5.0);
    }

    #[test]
    fn length_limits_the_span() {
        let t = compute_transform(&Transform::default(), &viewport(10, 10), &[0, 20, 1_000], 2, 0.0, 1.0);
        assert_relative_eq!(t.div_x(), 2.0);
    }

    #[test]
    fn full_i64_time_span_does_not_overflow() {
        let times = [i64::MIN + 1, i64::MAX];
        let t = compute_transform(&Transform::default(), &viewport(100, 10), &times, 2, 0.0, 1.0);
        assert_relative_eq!(t.div_x(), (i64::MAX as f64 * 2.0) / 100.0, max_relative = 1e-12);
        assert_relative_eq!(t.time_to_local_x(times[1], times[0]), 100.0, max_relative = 1e-6);

        let times = [-5_000_000_000_000_000_000, 5_000_000_000_000_000_000];
        let t = compute_transform(&Transform::default(), &viewport(100, 10), &times, 2, 0.0, 1.0);
        assert_relative_eq!(t.div_x(), 1e17, max_relative = 1e-12);
        assert_relative_eq!(t.time_to_local_x(0, times[0]), 50.0, max_relative = 1e-6);
    }

    #[test]
    fn nan_bounds_never_produce_nan_multiplier() {
        let vp = viewport(50, 40);
        let t = compute_transform(&Transform::default(), &vp, &[0, 10], 2, f32::NAN, 1.0);
        assert_eq!(t.mult_y(), 0.0);
        assert_eq!(t.zero_y(), 0.0);

        let good = compute_transform(&Transform::default(), &vp, &[0, 10], 2, 0.0, 4.0);
        let t = compute_transform(&good, &vp, &[0, 10], 2, 0.0, f32::NAN);
        assert_relative_eq!(t.mult_y(), good.mult_y());

        // a later flat range keeps a finite multiplier
        let flat = compute_transform(&t, &vp, &[0, 10], 2, 2.0, 2.0);
        assert!(flat.mult_y().is_finite());
        assert_relative_eq!(flat.mult_y(), -10.0);
    }

    #[test]
    fn infinite_bounds_flatten_series_and_clamp_zero_line() {
        let vp = RectI32::from_ltrb(0, 5, 50, 45);
        let good = compute_transform(&Transform::default(), &vp, &[0, 10], 2, 0.0, 4.0);
        let t = compute_transform(&good, &vp, &[0, 10], 2, f32::NEG_INFINITY, f32::INFINITY);
        assert_eq!(t.mult_y(), 0.0);
        assert_eq!(t.zero_y(), 5.0);
    }

    #[test]
    #[should_panic]
    fn length_past_times_panics() {
        let _ = compute_transform(&Transform::default(), &viewport(10, 10), &[0, 1], 3, 0.0, 1.0);
    }
}
