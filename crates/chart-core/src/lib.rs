// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for line chart construction and rendering.

pub mod chart;
pub mod figure;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderOptions};
pub use figure::Figure;
pub use series::{LineStyle, Marker, RefLine, Series, SeriesStyle, SeriesType};
pub use axis::{padded_bounds, Axis, ScaleKind};
pub use theme::Theme;
pub use text::TextShaper;
pub use skia_safe::Color;
