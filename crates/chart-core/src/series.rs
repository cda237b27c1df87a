// File: crates/chart-core/src/series.rs
// Summary: Line series model with per-series styling (colour, width, markers, dashes).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
}

/// Point marker drawn at every data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
    TriangleUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    /// `None` picks the next colour from the theme cycle.
    pub color: Option<skia::Color>,
    pub width: f32,
    pub marker: Marker,
    pub line: LineStyle,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self { color: None, width: 1.5, marker: Marker::None, line: LineStyle::Solid }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type, label: None, data_xy: Vec::new(), style: SeriesStyle::default() }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { series_type, label: None, data_xy: data, style: SeriesStyle::default() }
    }

    /// Pair `xs` with `ys` by index; extra values on the longer side are dropped.
    pub fn from_columns(xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(SeriesType::Line, data)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.style.width = width.max(0.1);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.style.marker = marker;
        self
    }

    /// Y values only, in data order.
    pub fn ys(&self) -> Vec<f64> {
        self.data_xy.iter().map(|&(_, y)| y).collect()
    }
}

/// Horizontal reference line spanning the whole x range.
#[derive(Clone, Debug)]
pub struct RefLine {
    pub y: f64,
    pub label: Option<String>,
    pub color: skia::Color,
    pub line: LineStyle,
    pub alpha: f32,
    pub width: f32,
}

impl RefLine {
    pub fn horizontal(y: f64, color: skia::Color) -> Self {
        Self { y, label: None, color, line: LineStyle::Solid, alpha: 1.0, width: 1.5 }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line = LineStyle::Dashed;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}
