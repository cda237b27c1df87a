// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale and padded bounds over several line series.

use chart_core::{padded_bounds, Axis, Chart, RefLine, Series};

#[test]
fn autoscale_multiple_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_columns(&[0.0, 5.0], &[1.0, 3.0]));
    chart.add_series(Series::from_columns(&[2.0, 3.0], &[1.5, 6.0]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_margin_widens_range() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_columns(&[0.0, 10.0], &[0.0, 10.0]));
    chart.autoscale_axes(0.05);
    assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
    assert!((chart.x_axis.max - 10.5).abs() < 1e-9);
}

#[test]
fn autoscale_log_axis_stays_positive() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::log10("Y", 1.0, 10.0);
    chart.add_series(Series::from_columns(&[10.0, 100.0], &[10.0, 83.0]));
    chart.add_ref_line(RefLine::horizontal(1.0, chart_core::Color::RED));
    chart.autoscale_axes(0.05);
    assert!(chart.y_axis.min > 0.0 && chart.y_axis.min < 1.0);
    assert!(chart.y_axis.max > 83.0);
}

#[test]
fn padded_bounds_for_ten_to_hundred() {
    let a = [10.0, 50.0];
    let b = [20.0, 100.0];
    let (lo, hi) = padded_bounds([&a[..], &b[..]], 0.9, 1.1).expect("bounds");
    assert!((lo - 9.0).abs() < 1e-9);
    assert!((hi - 110.0).abs() < 1e-9);
}
