// File: crates/tickline-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: DrawSurface over a skia Canvas plus headless PNG output.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use tickline_core::surface::{DrawSurface, LineStroke, StrokeCap, StrokeJoin};
use tickline_core::types::{HEIGHT, WIDTH};
use tickline_core::{Color, PathPoint, RectF, TimeSeriesChart};

pub struct RasterOptions {
    pub width: i32,
    pub height: i32,
    pub background: Color,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, background: Color::WHITE }
    }
}

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// `DrawSurface` implementation that forwards to a borrowed skia canvas.
pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self { Self { canvas } }
}

impl DrawSurface for SkiaSurface<'_> {
    fn fill_rect(&mut self, rect: RectF, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        self.canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &paint);
    }

    fn stroke_path(&mut self, points: &[PathPoint], stroke: &LineStroke) {
        let Some((first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_skia(stroke.color));
        paint.set_stroke_cap(match stroke.cap {
            StrokeCap::Butt => skia::paint::Cap::Butt,
            StrokeCap::Round => skia::paint::Cap::Round,
            StrokeCap::Square => skia::paint::Cap::Square,
        });
        paint.set_stroke_join(match stroke.join {
            StrokeJoin::Miter => skia::paint::Join::Miter,
            StrokeJoin::Round => skia::paint::Join::Round,
            StrokeJoin::Bevel => skia::paint::Join::Bevel,
        });

        self.canvas.draw_path(&path, &paint);
    }

    fn save(&mut self) {
        self.canvas.save();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }
}

/// Render one frame of `chart` into PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(chart: &TimeSeriesChart, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let canvas = surface.canvas();
    canvas.clear(to_skia(opts.background));
    chart.draw(&mut SkiaSurface::new(canvas));

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width = opts.width, height = opts.height, bytes = data.as_bytes().len(), "rendered chart png");
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(
    chart: &TimeSeriesChart,
    opts: &RasterOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}
