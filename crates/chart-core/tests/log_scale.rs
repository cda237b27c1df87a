// File: crates/chart-core/tests/log_scale.rs
// Purpose: Log-axis and multi-panel figures render without error.

use chart_core::{Axis, Chart, Color, Figure, LineStyle, Marker, RefLine, RenderOptions, Series};

fn speedup_chart() -> Chart {
    let mut chart = Chart::new().with_title("Speedup");
    chart.x_axis = Axis::new("Size", 0.0, 1.0);
    chart.y_axis = Axis::log10("Speedup", 1.0, 10.0);
    chart.minor_grid = true;
    chart.add_series(
        Series::from_columns(&[10.0, 100.0, 1000.0], &[10.0, 83.0, 640.0])
            .with_color(chart_core::theme::colors::GREEN)
            .with_marker(Marker::Circle)
            .with_width(2.0),
    );
    chart.autoscale_axes(0.05);
    chart
}

#[test]
fn log_axis_renders_png() {
    let bytes = speedup_chart()
        .render_to_png_bytes(&RenderOptions::default())
        .expect("log render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.width(), 1200);
    assert_eq!(img.height(), 720);
}

#[test]
fn ref_line_and_legend_render() {
    let mut chart = Chart::new();
    chart.legend = true;
    chart.add_series(
        Series::from_columns(&[1.0, 2.0, 3.0], &[0.5, 1.2, 2.0])
            .with_label("ratio")
            .with_marker(Marker::TriangleUp),
    );
    chart.add_ref_line(
        RefLine::horizontal(1.0, Color::RED)
            .dashed()
            .with_alpha(0.7)
            .with_label("Equal Performance"),
    );
    chart.autoscale_axes(0.05);
    assert_eq!(chart.ref_lines[0].line, LineStyle::Dashed);
    chart.render_to_png_bytes(&RenderOptions::default()).expect("render");
}

#[test]
fn two_panel_figure() {
    let mut fig = Figure::new();
    fig.add_panel(speedup_chart());
    fig.add_panel(speedup_chart());
    let opts = RenderOptions::figsize(12.0, 8.0);
    let bytes = fig.render_to_png_bytes(&opts).expect("figure render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1440, 960));
}

#[test]
fn empty_figure_is_an_error() {
    assert!(Figure::new().render_to_png_bytes(&RenderOptions::default()).is_err());
}
