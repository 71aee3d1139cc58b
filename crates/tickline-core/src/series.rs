// File: crates/tickline-core/src/series.rs
// Summary: Owned snapshot of a single time/value series with its bounds and grid steps.
// Notes:
// - Ingestion copies the caller's buffers, so callers are free to keep
//   mutating their own arrays after handing them over.

use crate::error::{ChartError, ChartResult};
use crate::types::{GridSteps, ValueBounds};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    times: Vec<i64>,   // nanoseconds, non-decreasing
    values: Vec<f32>,  // same length as times
    bounds: ValueBounds,
    steps: GridSteps,
}

impl SeriesData {
    /// Take ownership of already-built sample vectors.
    pub fn new(times: Vec<i64>, values: Vec<f32>, bounds: ValueBounds, steps: GridSteps) -> ChartResult<Self> {
        if times.len() != values.len() {
            return Err(ChartError::MismatchedLengths { times: times.len(), values: values.len() });
        }
        check_bounds(bounds)?;
        check_monotonic(&times)?;
        Ok(Self { times, values, bounds, steps })
    }

    /// Copy the first `length` entries of `times` and `values`.
    pub fn from_slices(
        times: &[i64],
        values: &[f32],
        length: usize,
        bounds: ValueBounds,
        steps: GridSteps,
    ) -> ChartResult<Self> {
        if length > times.len() || length > values.len() {
            return Err(ChartError::LengthOutOfBounds { length, times: times.len(), values: values.len() });
        }
        check_bounds(bounds)?;
        let times = times[..length].to_vec();
        check_monotonic(&times)?;
        Ok(Self { times, values: values[..length].to_vec(), bounds, steps })
    }

    pub fn times(&self) -> &[i64] { &self.times }
    pub fn values(&self) -> &[f32] { &self.values }
    pub fn len(&self) -> usize { self.times.len() }
    pub fn is_empty(&self) -> bool { self.times.is_empty() }
    pub fn bounds(&self) -> ValueBounds { self.bounds }
    pub fn steps(&self) -> GridSteps { self.steps }

    /// Nanoseconds between first and last sample, `None` for an empty series.
    /// Exact for any pair of `i64` timestamps.
    pub fn span_nanos(&self) -> Option<u64> {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => Some(last.abs_diff(*first)),
            _ => None,
        }
    }
}

fn check_bounds(bounds: ValueBounds) -> ChartResult<()> {
    if bounds.is_finite() {
        Ok(())
    } else {
        Err(ChartError::NonFiniteBounds { min: bounds.min, max: bounds.max })
    }
}

fn check_monotonic(times: &[i64]) -> ChartResult<()> {
    match times.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(ChartError::NonMonotonicTime { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slices_copies_prefix() {
        let times = [0, 10, 20, 30];
        let values = [1.0, 2.0, 3.0, 4.0];
        let s = SeriesData::from_slices(&times, &values, 3, ValueBounds::new(0.0, 5.0), GridSteps::new(10, 1.0))
            .unwrap();
        assert_eq!(s.times(), &[0, 10, 20]);
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.span_nanos(), Some(20));
        assert_eq!(s.steps(), GridSteps::new(10, 1.0));
    }

    #[test]
    fn snapshot_is_detached_from_caller_buffers() {
        let mut times = vec![0, 1, 2];
        let mut values = vec![0.0, 1.0, 2.0];
        let s = SeriesData::from_slices(&times, &values, 3, ValueBounds::new(0.0, 2.0), GridSteps::default())
            .unwrap();
        times[2] = 99;
        values[0] = -7.0;
        assert_eq!(s.times(), &[0, 1, 2]);
        assert_eq!(s.values()[0], 0.0);
    }

    #[test]
    fn length_past_either_buffer_is_rejected() {
        let err = SeriesData::from_slices(&[0, 1, 2], &[0.0, 1.0], 3, ValueBounds::default(), GridSteps::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::LengthOutOfBounds { length: 3, times: 3, values: 2 }));
    }

    #[test]
    fn decreasing_time_is_rejected() {
        let err = SeriesData::new(vec![0, 5, 4], vec![0.0; 3], ValueBounds::default(), GridSteps::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::NonMonotonicTime { index: 2 }));
    }

    #[test]
    fn equal_times_are_allowed() {
        let s = SeriesData::new(vec![5, 5, 5], vec![1.0; 3], ValueBounds::default(), GridSteps::default()).unwrap();
        assert_eq!(s.span_nanos(), Some(0));
    }

    #[test]
    fn mismatched_vectors_are_rejected() {
        let err = SeriesData::new(vec![0, 1], vec![0.0], ValueBounds::default(), GridSteps::default()).unwrap_err();
        assert!(matches!(err, ChartError::MismatchedLengths { times: 2, values: 1 }));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let err = SeriesData::new(vec![0, 1], vec![0.0; 2], ValueBounds::new(f32::NAN, 1.0), GridSteps::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::NonFiniteBounds { max, .. } if max == 1.0));
        let err = SeriesData::from_slices(&[0], &[0.0], 1, ValueBounds::new(0.0, f32::INFINITY), GridSteps::default())
            .unwrap_err();
        assert!(matches!(err, ChartError::NonFiniteBounds { min, .. } if min == 0.0));
    }

    #[test]
    fn span_covers_full_i64_range() {
        let s = SeriesData::new(vec![i64::MIN, i64::MAX], vec![0.0; 2], ValueBounds::default(), GridSteps::default())
            .unwrap();
        assert_eq!(s.span_nanos(), Some(u64::MAX));
    }

    #[test]
    fn empty_series_has_no_span() {
        let s = SeriesData::from_slices(&[], &[], 0, ValueBounds::default(), GridSteps::default()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.span_nanos(), None);
    }
}
