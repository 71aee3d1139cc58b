// File: crates/tickline-core/src/widget.rs
// Summary: Single-series chart widget: owns style, viewport, data snapshot and cached transform/path.

use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::geometry::{RectF, RectI32};
use crate::metrics::{compute_transform, Transform};
use crate::path::RenderPath;
use crate::series::SeriesData;
use crate::style::ChartStyle;
use crate::surface::{DrawSurface, LineStroke};
use crate::types::{GridSteps, Insets, ValueBounds};

/// Where the widget is in its host-driven lifecycle.
///
/// Derived from three signals: style loaded, geometry established, data supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// No style yet.
    Uninitialized,
    /// Styled, viewport still empty.
    Configured,
    /// Viewport established, no data.
    LaidOut,
    /// Viewport and data present; transform and path are current.
    Ready,
}

#[derive(Debug, Default)]
pub struct TimeSeriesChart {
    style: Option<ChartStyle>,
    viewport: RectI32,
    series: Option<SeriesData>,
    transform: Transform,
    path: RenderPath,
    computed: bool,
    redraw_requested: bool,
}

impl TimeSeriesChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ChartStyle) -> Self {
        Self { style: Some(style), ..Self::default() }
    }

    /// Install the style. It is read once; later calls fail.
    pub fn configure(&mut self, style: ChartStyle) -> ChartResult<()> {
        if self.style.is_some() {
            return Err(ChartError::AlreadyConfigured);
        }
        self.style = Some(style);
        Ok(())
    }

    pub fn state(&self) -> LifecycleState {
        match (&self.style, self.viewport.is_empty(), &self.series) {
            (None, _, _) => LifecycleState::Uninitialized,
            (Some(_), true, _) => LifecycleState::Configured,
            (Some(_), false, None) => LifecycleState::LaidOut,
            (Some(_), false, Some(_)) => LifecycleState::Ready,
        }
    }

    pub fn style(&self) -> Option<&ChartStyle> { self.style.as_ref() }
    pub fn viewport(&self) -> RectI32 { self.viewport }
    pub fn series(&self) -> Option<&SeriesData> { self.series.as_ref() }
    pub fn path(&self) -> &RenderPath { &self.path }

    /// Current transform, `None` until both geometry and data have been seen.
    pub fn transform(&self) -> Option<Transform> {
        self.computed.then_some(self.transform)
    }

    /// Replace the series and bounds wholesale with a copy of the first `length` samples.
    ///
    /// Recomputes and requests a redraw only once the viewport is non-empty;
    /// before that the data is stored and picked up by the next layout.
    #[allow(clippy::too_many_arguments)]
    pub fn set_data(
        &mut self,
        times: &[i64],
        values: &[f32],
        length: usize,
        min: f32,
        max: f32,
        step_x: i64,
        step_y: f32,
    ) -> ChartResult<()> {
        let series = SeriesData::from_slices(
            times,
            values,
            length,
            ValueBounds::new(min, max),
            GridSteps::new(step_x, step_y),
        )?;
        self.set_series(series);
        Ok(())
    }

    pub fn set_series(&mut self, series: SeriesData) {
        let bounds = series.bounds();
        debug!(len = series.len(), min = bounds.min, max = bounds.max, "set chart data");
        self.series = Some(series);
        if self.viewport.is_empty() {
            self.computed = false;
            self.path.clear();
            return;
        }
        self.recompute();
        self.redraw_requested = true;
    }

    /// Host layout callback. `frame` is the widget's own rect in parent space.
    pub fn on_layout(&mut self, changed: bool, frame: RectI32, padding: Insets) {
        if !changed {
            return;
        }
        let area = RectI32::content_area(frame.width(), frame.height(), &padding);
        debug!(?frame, ?area, "chart layout");
        self.set_viewport(area);
    }

    pub fn set_viewport(&mut self, viewport: RectI32) {
        self.viewport = viewport;
        if viewport.is_empty() {
            self.computed = false;
            self.path.clear();
            return;
        }
        self.recompute();
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn recompute(&mut self) {
        let Some(series) = self.series.as_ref() else { return };
        let bounds = series.bounds();
        self.transform = compute_transform(
            &self.transform,
            &self.viewport,
            series.times(),
            series.len(),
            bounds.min,
            bounds.max,
        );
        self.path.rebuild(&self.transform, series.times(), series.values(), series.len());
        self.computed = true;
        trace!(
            mult_y = self.transform.mult_y(),
            div_x = self.transform.div_x(),
            zero_y = self.transform.zero_y(),
            points = self.path.len(),
            "recomputed chart metrics"
        );
    }

    /// Issue one frame: zero axis, series path (if any), then the left axis over it.
    /// Draws nothing unless the widget is `Ready`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        if self.state() != LifecycleState::Ready {
            trace!(state = ?self.state(), "skip draw");
            return;
        }
        let (Some(style), Some(series)) = (self.style.as_ref(), self.series.as_ref()) else { return };

        let vp = self.viewport;
        let left = vp.left as f32;
        let thickness = style.axis_thickness as f32;
        let half = thickness / 2.0;
        let zero_y = self.transform.zero_y();

        surface.fill_rect(
            RectF::from_ltrb(left, zero_y - half, vp.right as f32, zero_y + half),
            style.axis_color,
        );

        if !series.is_empty() {
            surface.save();
            surface.translate(left, zero_y);
            surface.stroke_path(self.path.points(), &LineStroke::rounded(style.line_thickness, style.line_color));
            surface.restore();
        }

        surface.fill_rect(
            RectF::from_ltrb(left - thickness, vp.top as f32, left, vp.bottom as f32),
            style.axis_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_follows_signals() {
        let mut chart = TimeSeriesChart::new();
        assert_eq!(chart.state(), LifecycleState::Uninitialized);
        chart.configure(ChartStyle::default()).unwrap();
        assert_eq!(chart.state(), LifecycleState::Configured);
        chart.set_viewport(RectI32::from_ltwh(0, 0, 10, 10));
        assert_eq!(chart.state(), LifecycleState::LaidOut);
        chart.set_data(&[0, 1], &[0.0, 1.0], 2, 0.0, 1.0, 1, 1.0).unwrap();
        assert_eq!(chart.state(), LifecycleState::Ready);
        chart.set_viewport(RectI32::default());
        assert_eq!(chart.state(), LifecycleState::Configured);
        assert_eq!(chart.transform(), None);
    }

    #[test]
    fn second_configure_fails() {
        let mut chart = TimeSeriesChart::with_style(ChartStyle::default());
        assert!(matches!(chart.configure(ChartStyle::dark()), Err(ChartError::AlreadyConfigured)));
        assert_eq!(chart.style(), Some(&ChartStyle::default()));
    }

    #[test]
    fn redraw_request_is_cleared_on_take() {
        let mut chart = TimeSeriesChart::with_style(ChartStyle::default());
        chart.set_viewport(RectI32::from_ltwh(0, 0, 10, 10));
        chart.set_data(&[0], &[0.5], 1, 0.0, 1.0, 1, 1.0).unwrap();
        assert!(chart.take_redraw_request());
        assert!(!chart.take_redraw_request());
    }
}
