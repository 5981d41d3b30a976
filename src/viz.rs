//! Thin rendering layer: hand the transformed data to plotters and write
//! **SVG** or **PNG**, chosen by file extension. All axis scaling and drawing
//! is plotters' job; nothing here re-derives data.

use crate::chart::{ChartAdapter, ScatterSeries};
use crate::weekly::{WEEK_MS, WeekBucket};
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};
use std::sync::Once;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Default axis/tooltip label for a week-start timestamp.
pub fn week_date_label(week_start_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(week_start_ms) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => week_start_ms.to_string(),
    }
}

fn date_label(ms: &i64) -> String {
    week_date_label(*ms)
}

/// Render a scatter series produced by [`crate::chart::scatter_series`].
pub fn plot_scatter<P: AsRef<Path>>(
    series: &ScatterSeries,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if series.points.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    let (mut min_x, mut max_x) = (
        series.points.iter().map(|p| p.x_ms).min().unwrap_or(0),
        series.points.iter().map(|p| p.x_ms).max().unwrap_or(0),
    );
    if min_x == max_x {
        min_x -= DAY_MS;
        max_x += DAY_MS;
    }

    let ys: Vec<f64> = series
        .points
        .iter()
        .map(|p| p.y)
        .filter(|y| y.is_finite())
        .collect();
    if ys.is_empty() {
        return Err(anyhow!("no finite values to plot"));
    }
    let (mut min_y, mut max_y) = (
        ys.iter().cloned().fold(f64::INFINITY, f64::min),
        ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    );
    if (max_y - min_y).abs() < f64::EPSILON {
        min_y -= 1.0;
        max_y += 1.0;
    }

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_scatter_chart(root, series, min_x, max_x, min_y, max_y)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_scatter_chart(root, series, min_x, max_x, min_y, max_y)?;
    }

    Ok(())
}

/// Helper that draws scatter points to any plotters backend.
fn draw_scatter_chart<DB>(
    root: DrawingArea<DB, Shift>,
    series: &ScatterSeries,
    min_x: i64,
    max_x: i64,
    min_y: f64,
    max_y: f64,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(min_x..max_x, min_y..max_y)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .y_desc(series.title_y)
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&date_label)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .draw_series(
            series
                .points
                .iter()
                .filter(|p| p.y.is_finite())
                .map(|p| Circle::new((p.x_ms, p.y), 3, p.color.filled())),
        )
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// Render weekly buckets produced by [`crate::chart::weekly_series`] as a
/// contiguous bar chart, one bar per week.
pub fn plot_weekly_bars<P: AsRef<Path>>(
    buckets: &[WeekBucket],
    title_y: &str,
    label_of: &dyn Fn(i64) -> String,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if buckets.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bar_chart(root, buckets, title_y, label_of)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bar_chart(root, buckets, title_y, label_of)?;
    }

    Ok(())
}

/// Helper that draws weekly bars to any plotters backend.
fn draw_bar_chart<DB>(
    root: DrawingArea<DB, Shift>,
    buckets: &[WeekBucket],
    title_y: &str,
    label_of: &dyn Fn(i64) -> String,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Buckets are contiguous and sorted by construction.
    let min_x = buckets.first().map(|b| b.week_start_ms).unwrap_or(0);
    let max_x = buckets.last().map(|b| b.week_start_ms).unwrap_or(0) + WEEK_MS;
    let mut max_y = buckets.iter().map(|b| b.value).fold(0.0, f64::max);
    if max_y <= 0.0 {
        max_y = 1.0;
    }

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(min_x..max_x, 0.0..max_y * 1.05)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .y_desc(title_y)
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&|x| label_of(*x))
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .draw_series(buckets.iter().map(|b| {
            Rectangle::new(
                [(b.week_start_ms, 0.0), (b.week_start_ms + WEEK_MS, b.value)],
                BLUE.filled(),
            )
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

/// [`ChartAdapter`] that writes each draw call to a file; the extension
/// picks the backend.
#[derive(Debug, Clone)]
pub struct FileChartAdapter {
    pub out_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl FileChartAdapter {
    pub fn new<P: Into<PathBuf>>(out_path: P, width: u32, height: u32) -> Self {
        FileChartAdapter {
            out_path: out_path.into(),
            width,
            height,
        }
    }
}

impl ChartAdapter for FileChartAdapter {
    fn draw_scatter(&mut self, series: &ScatterSeries) -> Result<()> {
        plot_scatter(series, &self.out_path, self.width, self.height)
    }

    fn draw_weekly_bars(
        &mut self,
        buckets: &[WeekBucket],
        title_y: &str,
        label_of: &dyn Fn(i64) -> String,
    ) -> Result<()> {
        plot_weekly_bars(
            buckets,
            title_y,
            label_of,
            &self.out_path,
            self.width,
            self.height,
        )
    }
}
