// File: crates/tickline-core/src/error.rs
// Summary: Error type shared by the core crate.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("length {length} exceeds sample buffers (times={times}, values={values})")]
    LengthOutOfBounds { length: usize, times: usize, values: usize },

    #[error("times and values differ in length (times={times}, values={values})")]
    MismatchedLengths { times: usize, values: usize },

    #[error("sample times must be non-decreasing (first decrease at index {index})")]
    NonMonotonicTime { index: usize },

    #[error("value bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f32, max: f32 },

    #[error("chart style is already configured")]
    AlreadyConfigured,

    #[error("invalid style config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
