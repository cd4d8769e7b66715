//! Chart rendering with the `plotters` bitmap backend

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::data::Series;

use super::config::PlotConfig;

/// Errors from chart rendering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlotError {
    /// The series holds no observations
    #[error("Cannot plot an empty series")]
    EmptySeries,

    /// Every point in the series has a NaN or infinite coordinate
    #[error("Series contains no finite points to plot")]
    NoFinitePoints,

    /// Error from the drawing backend (font loading, file I/O, layout)
    #[error("Chart rendering failed: {0}")]
    Backend(String),
}

/// Render the concentration-time line chart to a PNG file
///
/// Circle markers at each observation with a connecting line, matching the
/// classic PK profile plot.
pub fn plot_concentration_time(
    series: &Series,
    path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    let cfg = config
        .cloned()
        .unwrap_or_else(PlotConfig::concentration_time);
    draw(series, path.as_ref(), &cfg, false)
}

/// Render the filled AUC area chart to a PNG file
///
/// The area under the curve is shaded down to the zero baseline with the
/// profile line overlaid.
pub fn plot_auc_area(
    series: &Series,
    path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<(), PlotError> {
    let cfg = config.cloned().unwrap_or_else(PlotConfig::auc_area);
    draw(series, path.as_ref(), &cfg, true)
}

fn draw(series: &Series, path: &Path, cfg: &PlotConfig, filled: bool) -> Result<(), PlotError> {
    let (x_range, y_range) = axis_ranges(series, filled)?;

    let root = BitMapBackend::new(path, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(cfg.title.as_str(), ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(52)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc(cfg.x_label.as_str())
        .y_desc(cfg.y_label.as_str())
        .draw()
        .map_err(backend)?;

    let points = series.points();
    let line = RGBColor(cfg.line_rgb.0, cfg.line_rgb.1, cfg.line_rgb.2);

    if filled {
        let fill = RGBColor(cfg.fill_rgb.0, cfg.fill_rgb.1, cfg.fill_rgb.2).mix(0.4);
        chart
            .draw_series(
                AreaSeries::new(points.clone(), 0.0, fill)
                    .border_style(line.stroke_width(2)),
            )
            .map_err(backend)?;
    } else {
        chart
            .draw_series(LineSeries::new(points.clone(), line.stroke_width(2)))
            .map_err(backend)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), cfg.marker_size as i32, line.filled())),
            )
            .map_err(backend)?;
    }

    root.present().map_err(backend)?;
    Ok(())
}

fn backend(e: impl std::fmt::Display) -> PlotError {
    PlotError::Backend(e.to_string())
}

/// Axis ranges padded 5% beyond the finite data extent
///
/// Degenerate extents (single point, constant series) are widened so the
/// backend always receives a non-empty range. The area chart additionally
/// anchors the Y range at the zero baseline.
fn axis_ranges(series: &Series, include_zero: bool) -> Result<(Range<f64>, Range<f64>), PlotError> {
    if series.is_empty() {
        return Err(PlotError::EmptySeries);
    }

    let finite: Vec<(f64, f64)> = series
        .points()
        .into_iter()
        .filter(|(t, c)| t.is_finite() && c.is_finite())
        .collect();
    if finite.is_empty() {
        return Err(PlotError::NoFinitePoints);
    }

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (t, c) in finite {
        x_min = x_min.min(t);
        x_max = x_max.max(t);
        y_min = y_min.min(c);
        y_max = y_max.max(c);
    }

    if include_zero {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }

    Ok((pad_range(x_min, x_max), pad_range(y_min, y_max)))
}

fn pad_range(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        lo.abs().max(1.0) * 0.05
    };
    (lo - pad)..(hi + pad)
}
