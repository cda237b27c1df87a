// File: crates/bench-report/src/request.rs
// Summary: One chart request (table, columns, labels, scale) and its translation into a chart.

use chart_core::{padded_bounds, Axis, Chart, Marker, Series};

use crate::error::{ReportError, Result};
use crate::table::{Table, SIZE_COLUMN};

/// X-axis label shared by every report chart.
pub const X_LABEL: &str = "Number of Euros";

/// Fixed y padding: the axis spans `[min * 0.9, max * 1.1]`.
pub const Y_PAD_LOWER: f64 = 0.9;
pub const Y_PAD_UPPER: f64 = 1.1;

#[derive(Clone, Debug)]
pub struct ChartRequest<'a> {
    pub table: &'a Table,
    pub x_column: &'a str,
    pub y_columns: Vec<&'a str>,
    pub title: &'a str,
    /// Output stem; the image lands at `<output_dir>/<filename>.png`.
    pub filename: &'a str,
    pub y_label: &'a str,
    pub x_label: &'a str,
    pub log_scale: bool,
}

impl<'a> ChartRequest<'a> {
    pub fn new(
        table: &'a Table,
        y_columns: &[&'a str],
        title: &'a str,
        filename: &'a str,
        y_label: &'a str,
    ) -> Self {
        Self {
            table,
            x_column: SIZE_COLUMN,
            y_columns: y_columns.to_vec(),
            title,
            filename,
            y_label,
            x_label: X_LABEL,
            log_scale: false,
        }
    }

    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    pub fn x_column(mut self, column: &'a str) -> Self {
        self.x_column = column;
        self
    }

    /// The y-columns as parsed numbers, in request order.
    fn y_values(&self) -> Result<Vec<Vec<f64>>> {
        if self.y_columns.is_empty() {
            return Err(ReportError::EmptySeries(self.filename.to_string()));
        }
        self.y_columns.iter().map(|c| self.table.column(c)).collect()
    }

    /// `[min * 0.9, max * 1.1]` across every requested y-column.
    pub fn y_bounds(&self) -> Result<(f64, f64)> {
        let cols = self.y_values()?;
        padded_bounds(cols.iter().map(Vec::as_slice), Y_PAD_LOWER, Y_PAD_UPPER)
            .ok_or_else(|| ReportError::EmptySeries(self.filename.to_string()))
    }

    /// Build the chart: one circle-marked line per y-column, legend, light grid,
    /// padded y-range, log axis (with minor grid) when requested.
    pub fn to_chart(&self) -> Result<Chart> {
        let xs = self.table.column(self.x_column)?;
        let cols = self.y_values()?;
        let (y_min, y_max) = padded_bounds(cols.iter().map(Vec::as_slice), Y_PAD_LOWER, Y_PAD_UPPER)
            .ok_or_else(|| ReportError::EmptySeries(self.filename.to_string()))?;

        let mut chart = Chart::new().with_title(self.title);
        chart.x_axis = Axis::new(self.x_label, 0.0, 1.0);
        chart.y_axis = Axis::new(self.y_label, 0.0, 1.0);
        chart.legend = true;
        chart.grid_alpha = 0.3;
        for (name, ys) in self.y_columns.iter().zip(&cols) {
            chart.add_series(Series::from_columns(&xs, ys).with_label(*name).with_marker(Marker::Circle));
        }
        chart.autoscale_axes(0.05);

        chart.y_axis = if self.log_scale {
            chart.minor_grid = true;
            Axis::log10(self.y_label, y_min, y_max)
        } else {
            Axis::new(self.y_label, y_min, y_max)
        };
        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::ScaleKind;
    use std::path::PathBuf;

    fn table() -> Table {
        Table::from_reader("t.csv", PathBuf::from("t.csv"), "Size,A,B\n1,10,40\n2,55,100\n".as_bytes()).unwrap()
    }

    #[test]
    fn bounds_pad_min_and_max() {
        let t = table();
        let req = ChartRequest::new(&t, &["A", "B"], "t", "t", "y");
        let (lo, hi) = req.y_bounds().unwrap();
        assert!((lo - 9.0).abs() < 1e-9);
        assert!((hi - 110.0).abs() < 1e-9);
    }

    #[test]
    fn chart_has_one_series_per_column() {
        let t = table();
        let chart = ChartRequest::new(&t, &["A", "B"], "Title", "t", "Time (ms)").to_chart().unwrap();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].label.as_deref(), Some("B"));
        assert_eq!(chart.series[0].data_xy, vec![(1.0, 10.0), (2.0, 55.0)]);
        assert_eq!(chart.x_axis.label, X_LABEL);
        assert_eq!(chart.title.as_deref(), Some("Title"));
        assert!(chart.legend);
        assert!((chart.y_axis.min - 9.0).abs() < 1e-9);
    }

    #[test]
    fn log_request_switches_axis() {
        let t = table();
        let chart = ChartRequest::new(&t, &["A"], "t", "t", "y").log_scale(true).to_chart().unwrap();
        assert_eq!(chart.y_axis.kind, ScaleKind::Log10);
        assert!(chart.minor_grid);
    }

    #[test]
    fn no_columns_is_empty_series() {
        let t = table();
        let err = ChartRequest::new(&t, &[], "t", "t", "y").to_chart().unwrap_err();
        assert!(matches!(err, ReportError::EmptySeries(_)));
    }

    #[test]
    fn headers_only_table_is_empty_series() {
        let t = Table::from_reader("t.csv", PathBuf::from("t.csv"), "Size,A,B\n".as_bytes()).unwrap();
        assert!(t.is_empty());
        let req = ChartRequest::new(&t, &["A", "B"], "t", "empty", "y");
        assert!(matches!(req.y_bounds(), Err(ReportError::EmptySeries(ref f)) if f == "empty"));
        assert!(matches!(req.to_chart(), Err(ReportError::EmptySeries(_))));
    }

    #[test]
    fn x_column_can_be_overridden() {
        let t = table();
        let chart = ChartRequest::new(&t, &["B"], "t", "t", "y").x_column("A").to_chart().unwrap();
        assert_eq!(chart.series[0].data_xy, vec![(10.0, 40.0), (55.0, 100.0)]);
    }

    #[test]
    fn unknown_column_fails_at_chart_time() {
        let t = table();
        let err = ChartRequest::new(&t, &["C"], "t", "t", "y").to_chart().unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { .. }));
    }
}
