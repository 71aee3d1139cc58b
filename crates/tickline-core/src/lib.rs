// File: crates/tickline-core/src/lib.rs
// Summary: Core library entry point; exports transform math, path building and the chart widget.

pub mod error;
pub mod geometry;
pub mod metrics;
pub mod path;
pub mod series;
pub mod style;
pub mod surface;
pub mod types;
pub mod widget;

pub use error::{ChartError, ChartResult};
pub use geometry::{PathPoint, RectF, RectI32};
pub use metrics::{compute_transform, Transform};
pub use path::{build_path, path_points, PathPoints, RenderPath};
pub use series::SeriesData;
pub use style::{ChartStyle, Color};
pub use surface::{DrawCommand, DrawSurface, LineStroke, RecordingSurface, StrokeCap, StrokeJoin};
pub use types::{GridSteps, Insets, ValueBounds};
pub use widget::{LifecycleState, TimeSeriesChart};
