// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;
use skia_safe::Contains;

use crate::axis::{extent, Axis};
use crate::geometry::RectI32;
use crate::grid::{format_tick, linear_ticks, log_ticks};
use crate::scale::ValueScale;
use crate::series::{LineStyle, Marker, RefLine, Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::{with_alpha, Theme};
use crate::types::{figsize_px, Insets, HEIGHT, WIDTH};

const TITLE_SIZE: f32 = 17.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const LEGEND_SIZE: f32 = 12.0;
const MARKER_RADIUS: f32 = 4.5;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Titles, tick labels, axis labels and legend text. Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Surface sized from a figure size in inches.
    pub fn figsize(width_in: f32, height_in: f32) -> Self {
        let (width, height) = figsize_px(width_in, height_in);
        Self { width, height, ..Self::default() }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub ref_lines: Vec<RefLine>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
    /// Opacity of the major grid, 0 disables it.
    pub grid_alpha: f32,
    /// Draw minor grid lines on log axes too.
    pub minor_grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            ref_lines: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: false,
            grid_alpha: 0.3,
            minor_grid: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_ref_line(&mut self, line: RefLine) {
        self.ref_lines.push(line);
    }

    /// Fit both axes to the data (series points and reference lines) with `margin`
    /// as a fraction of the span on each side. Axis kinds are kept.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let xs: Vec<Vec<f64>> = self.series.iter().map(|s| s.data_xy.iter().map(|p| p.0).collect()).collect();
        let mut ys: Vec<Vec<f64>> = self.series.iter().map(Series::ys).collect();
        ys.push(self.ref_lines.iter().map(|r| r.y).collect());

        if let Some((lo, hi)) = extent(xs.iter().map(Vec::as_slice)) {
            self.x_axis.autoscale(lo, hi, margin);
        }
        let positive_only = self.y_axis.is_log();
        let y_cols: Vec<Vec<f64>> = if positive_only {
            ys.into_iter().map(|c| c.into_iter().filter(|v| *v > 0.0).collect()).collect()
        } else {
            ys
        };
        if let Some((lo, hi)) = extent(y_cols.iter().map(Vec::as_slice)) {
            self.y_axis.autoscale(lo, hi, margin);
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(output_png_path.as_ref(), &bytes)
    }

    /// Render the chart and return the encoded PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = raster(opts, |canvas, shaper| {
            self.draw(canvas, shaper, RectI32::from_ltwh(0, 0, opts.width, opts.height), opts);
        })?;
        encode_png(&mut surface)
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = raster(opts, |canvas, shaper| {
            self.draw(canvas, shaper, RectI32::from_ltwh(0, 0, opts.width, opts.height), opts);
        })?;
        read_rgba8(&mut surface, opts)
    }

    /// Draw the whole chart (title, grid, axes, series, legend) inside `area`.
    pub fn draw(&self, canvas: &skia::Canvas, shaper: &TextShaper, area: RectI32, opts: &RenderOptions) {
        let theme = &opts.theme;
        let plot = area.inset(&opts.insets);
        if plot.width() <= 0 || plot.height() <= 0 {
            return;
        }

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        let xs = ValueScale::for_axis(&self.x_axis, plot.left as f32, plot.right as f32);
        let ys = ValueScale::for_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);
        let x_ticks = AxisTicks::for_axis(&self.x_axis, 10);
        let y_ticks = AxisTicks::for_axis(&self.y_axis, 6);

        draw_grid(canvas, plot, &xs, &ys, &x_ticks, &y_ticks, self.grid_alpha, self.minor_grid, theme);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for r in &self.ref_lines {
            draw_ref_line(canvas, plot, &ys, r);
        }
        for (i, s) in self.series.iter().enumerate() {
            let color = s.style.color.unwrap_or_else(|| theme.series_color(i));
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &xs, &ys, s, color),
            }
        }
        canvas.restore();

        draw_axes(canvas, plot, theme);

        if !opts.draw_labels {
            return;
        }
        draw_tick_labels(canvas, shaper, plot, &xs, &ys, &x_ticks, &y_ticks, theme);

        let x_label_y = plot.bottom as f32 + 48.0;
        shaper.draw(canvas, &self.x_axis.label, (plot.left + plot.right) as f32 * 0.5, x_label_y, LABEL_SIZE, theme.axis_label, Anchor::Center, false);
        let y_label_x = area.left as f32 + 18.0;
        shaper.draw_vertical(canvas, &self.y_axis.label, y_label_x, (plot.top + plot.bottom) as f32 * 0.5, LABEL_SIZE, theme.axis_label);

        if let Some(title) = &self.title {
            shaper.draw(canvas, title, (plot.left + plot.right) as f32 * 0.5, plot.top as f32 - 16.0, TITLE_SIZE, theme.title, Anchor::Center, true);
        }

        if self.legend {
            self.draw_legend(canvas, shaper, plot, &xs, &ys, theme);
        }
    }

    fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry<'_>> {
        let mut entries = Vec::new();
        for (i, s) in self.series.iter().enumerate() {
            if let Some(label) = &s.label {
                entries.push(LegendEntry {
                    label,
                    color: s.style.color.unwrap_or_else(|| theme.series_color(i)),
                    line: s.style.line,
                    marker: s.style.marker,
                    width: s.style.width,
                });
            }
        }
        for r in &self.ref_lines {
            if let Some(label) = &r.label {
                entries.push(LegendEntry {
                    label,
                    color: with_alpha(r.color, r.alpha),
                    line: r.line,
                    marker: Marker::None,
                    width: r.width,
                });
            }
        }
        entries
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: &TextShaper, plot: RectI32, xs: &ValueScale, ys: &ValueScale, theme: &Theme) {
        let entries = self.legend_entries(theme);
        if entries.is_empty() {
            return;
        }
        let row_h = LEGEND_SIZE + 8.0;
        let sample_w = 28.0;
        let pad = 8.0;
        let text_w = entries
            .iter()
            .map(|e| shaper.measure_width(e.label, LEGEND_SIZE))
            .fold(0.0f32, f32::max);
        let w = pad * 3.0 + sample_w + text_w;
        let h = pad * 2.0 + row_h * entries.len() as f32;

        let points: Vec<(f32, f32)> = self
            .series
            .iter()
            .flat_map(|s| s.data_xy.iter().map(|&(x, y)| (xs.to_px(x), ys.to_px(y))))
            .collect();
        let rect = best_legend_rect(plot, w, h, &points);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(rect, 4.0, 4.0, &border);

        for (i, e) in entries.iter().enumerate() {
            let cy = rect.top + pad + row_h * (i as f32 + 0.5);
            let x0 = rect.left + pad;
            let x1 = x0 + sample_w;
            let stroke = stroke_paint(e.color, e.width, e.line);
            canvas.draw_line((x0, cy), (x1, cy), &stroke);
            draw_marker(canvas, e.marker, (x0 + x1) * 0.5, cy, e.color);
            shaper.draw(canvas, e.label, x1 + pad, cy + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label, Anchor::Left, false);
        }
    }
}

struct LegendEntry<'a> {
    label: &'a str,
    color: skia::Color,
    line: LineStyle,
    marker: Marker,
    width: f32,
}

/// Tick positions and labels for one axis.
struct AxisTicks {
    major: Vec<f64>,
    minor: Vec<f64>,
    step: f64,
}

impl AxisTicks {
    fn for_axis(axis: &Axis, target: usize) -> Self {
        if axis.is_log() {
            let (major, minor) = log_ticks(axis.min.max(crate::axis::LOG_EPS), axis.max);
            Self { major, minor, step: 0.0 }
        } else {
            let (major, step) = linear_ticks(axis.min, axis.max, target);
            Self { major, minor: Vec::new(), step }
        }
    }

    fn label(&self, v: f64) -> String {
        format_tick(v, self.step)
    }
}

// ---- surface helpers ---------------------------------------------------------

/// Create a raster surface cleared to the theme background and run `draw` on it.
pub(crate) fn raster<F>(opts: &RenderOptions, draw: F) -> Result<skia::Surface>
where
    F: FnOnce(&skia::Canvas, &TextShaper),
{
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {}x{}", opts.width, opts.height))?;
    let shaper = TextShaper::new();
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    draw(canvas, &shaper);
    Ok(surface)
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn read_rgba8(surface: &mut skia::Surface, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (opts.width.max(0) as u32, opts.height.max(0) as u32);
    let stride = w as usize * 4;
    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("failed to read back {}x{} pixels", w, h);
    }
    Ok((pixels, w, h, stride))
}

/// Write `bytes` to `path`, creating parent directories; replaces any existing file.
pub(crate) fn write_png(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

// ---- drawing helpers ---------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32, line: LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(color);
    if line == LineStyle::Dashed {
        stroke.set_path_effect(skia::PathEffect::dash(&[width * 4.0, width * 2.5], 0.0));
    }
    stroke
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &ValueScale,
    ys: &ValueScale,
    x_ticks: &AxisTicks,
    y_ticks: &AxisTicks,
    alpha: f32,
    minor: bool,
    theme: &Theme,
) {
    if alpha <= 0.0 {
        return;
    }
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_color(with_alpha(theme.grid, alpha));

    for &x in &x_ticks.major {
        let px = xs.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for &y in &y_ticks.major {
        let py = ys.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }

    if minor {
        paint.set_color(with_alpha(theme.grid, alpha * 0.6));
        paint.set_stroke_width(0.8);
        for &x in &x_ticks.minor {
            let px = xs.to_px(x);
            canvas.draw_line((px, t), (px, b), &paint);
        }
        for &y in &y_ticks.minor {
            let py = ys.to_px(y);
            canvas.draw_line((l, py), (r, py), &paint);
        }
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.25);
    canvas.draw_rect(plot.to_skia(), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    xs: &ValueScale,
    ys: &ValueScale,
    x_ticks: &AxisTicks,
    y_ticks: &AxisTicks,
    theme: &Theme,
) {
    let mut tick = skia::Paint::default();
    tick.set_anti_alias(true);
    tick.set_stroke_width(1.0);
    tick.set_color(theme.tick);
    let b = plot.bottom as f32;
    let l = plot.left as f32;

    for &x in &x_ticks.major {
        let px = xs.to_px(x);
        canvas.draw_line((px, b), (px, b + 4.0), &tick);
        shaper.draw(canvas, &x_ticks.label(x), px, b + 20.0, TICK_SIZE, theme.tick, Anchor::Center, false);
    }
    for &y in &y_ticks.major {
        let py = ys.to_px(y);
        canvas.draw_line((l - 4.0, py), (l, py), &tick);
        shaper.draw(canvas, &y_ticks.label(y), l - 8.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Anchor::Right, false);
    }
}

fn draw_ref_line(canvas: &skia::Canvas, plot: RectI32, ys: &ValueScale, line: &RefLine) {
    if !ys.contains(line.y) {
        return;
    }
    let py = ys.to_px(line.y);
    let paint = stroke_paint(with_alpha(line.color, line.alpha), line.width, line.line);
    canvas.draw_line((plot.left as f32, py), (plot.right as f32, py), &paint);
}

fn draw_line_series(canvas: &skia::Canvas, xs: &ValueScale, ys: &ValueScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    // NaN gaps split the polyline
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if x.is_nan() || y.is_nan() {
            pen_down = false;
            continue;
        }
        let p = (xs.to_px(x), ys.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let stroke = stroke_paint(color, series.style.width, series.style.line);
    canvas.draw_path(&path, &stroke);

    if series.style.marker != Marker::None {
        for &(x, y) in data.iter().filter(|(x, y)| !x.is_nan() && !y.is_nan()) {
            draw_marker(canvas, series.style.marker, xs.to_px(x), ys.to_px(y), color);
        }
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    let r = MARKER_RADIUS;
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_xywh(x - r, y - r, r * 2.0, r * 2.0), &fill);
        }
        Marker::TriangleUp => {
            let mut tri = skia::Path::new();
            tri.move_to((x, y - r * 1.2));
            tri.line_to((x + r * 1.1, y + r * 0.8));
            tri.line_to((x - r * 1.1, y + r * 0.8));
            tri.close();
            canvas.draw_path(&tri, &fill);
        }
    }
}

/// Pick the plot corner whose legend box would cover the fewest data points.
/// Ties go to the first candidate (upper right, then upper left, lower left, lower right).
fn best_legend_rect(plot: RectI32, w: f32, h: f32, points: &[(f32, f32)]) -> skia::Rect {
    let m = 10.0;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let candidates = [
        skia::Rect::from_xywh(r - m - w, t + m, w, h),
        skia::Rect::from_xywh(l + m, t + m, w, h),
        skia::Rect::from_xywh(l + m, b - m - h, w, h),
        skia::Rect::from_xywh(r - m - w, b - m - h, w, h),
    ];
    let covered = |rect: &skia::Rect| points.iter().filter(|&&(x, y)| rect.contains(skia::Point::new(x, y))).count();
    let mut best = candidates[0];
    let mut best_count = covered(&best);
    for c in &candidates[1..] {
        let n = covered(c);
        if n < best_count {
            best = *c;
            best_count = n;
        }
    }
    best
}
