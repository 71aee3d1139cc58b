// File: crates/tickline-demo/src/main.rs
// Summary: Demo loads a time,value CSV (or synthesizes a sensor trace) and renders it to PNG.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tickline_core::{style, ChartStyle, Insets, RectI32, TimeSeriesChart};
use tickline_render_skia::{render_to_png, RasterOptions};

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 320;
const PADDING: u32 = 16;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Args: [input.csv|-] [style.toml|preset] [output.png]
    let mut args = std::env::args().skip(1);
    let input = args.next().filter(|a| a != "-");
    let style_arg = args.next();
    let out = args.next().map(PathBuf::from);

    let (times, values, stem) = match &input {
        Some(raw) => {
            let path = Path::new(raw);
            let (t, v) = load_series_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (t, v, stem)
        }
        None => {
            info!("no input given, synthesizing a sensor trace");
            let (t, v) = synth_trace(2_000);
            (t, v, "synthetic".to_string())
        }
    };
    info!(samples = times.len(), "loaded series");
    if times.is_empty() {
        warn!("series is empty; only axes will be drawn");
    }

    let chart_style = load_style(style_arg.as_deref())?;

    let (min, max) = minmax(&values);
    let step_x = ((span(&times) / 10).max(1)) as i64;
    let step_y = ((max - min) / 10.0).max(f32::EPSILON);
    info!(min, max, step_x, step_y, "value range");

    let mut chart = TimeSeriesChart::with_style(chart_style);
    chart.set_data(&times, &values, times.len(), min, max, step_x, step_y)?;
    chart.on_layout(true, RectI32::from_ltwh(0, 0, WIDTH, HEIGHT), Insets::uniform(PADDING));

    let opts = RasterOptions { width: WIDTH, height: HEIGHT, ..RasterOptions::default() };
    let out = out.unwrap_or_else(|| PathBuf::from(format!("target/out/tickline_{stem}.png")));
    render_to_png(&chart, &opts, &out)?;
    info!("wrote {}", out.display());
    Ok(())
}

/// A path to a TOML file, or the name of a built-in preset.
fn load_style(arg: Option<&str>) -> Result<ChartStyle> {
    match arg {
        None => Ok(ChartStyle::light()),
        Some(a) if Path::new(a).is_file() => {
            ChartStyle::load(a).with_context(|| format!("failed to read style '{a}'"))
        }
        Some(name) => Ok(style::find(name)),
    }
}

/// Load a `time,value` CSV. Time is integer nanoseconds or RFC 3339.
fn load_series_csv(path: &Path) -> Result<(Vec<i64>, Vec<f32>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut times = Vec::new();
    let mut values = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let (Some(t), Some(v)) = (rec.get(0), rec.get(1)) else {
            warn!(row, "skipping short record");
            continue;
        };
        let t = parse_time_nanos(t).with_context(|| format!("row {row}: bad time '{t}'"))?;
        let v = v.parse::<f32>().with_context(|| format!("row {row}: bad value '{v}'"))?;
        times.push(t);
        values.push(v);
    }
    Ok((times, values))
}

fn parse_time_nanos(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    chrono::DateTime::parse_from_rfc3339(s).ok()?.timestamp_nanos_opt()
}

/// Damped oscillation sampled at an irregular ~10ms cadence.
fn synth_trace(n: usize) -> (Vec<i64>, Vec<f32>) {
    let start = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);
    let mut t = start;
    let mut times = Vec::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        t += 10_000_000 + (i as i64 % 5) * 400_000;
        let secs = (t - start) as f32 / 1e9;
        times.push(t);
        values.push((secs * 6.0).sin() * 9.81 * (-secs / 8.0).exp());
    }
    (times, values)
}

fn minmax(v: &[f32]) -> (f32, f32) {
    let mut min_v = f32::INFINITY;
    let mut max_v = f32::NEG_INFINITY;
    for &y in v {
        min_v = min_v.min(y);
        max_v = max_v.max(y);
    }
    if !min_v.is_finite() || !max_v.is_finite() {
        return (-1.0, 1.0);
    }
    (min_v, max_v)
}

fn span(times: &[i64]) -> u64 {
    match (times.first(), times.last()) {
        (Some(a), Some(b)) => b.saturating_sub(*a).unsigned_abs(),
        _ => 0,
    }
}
