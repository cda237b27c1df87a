// File: crates/bench-report/src/plan.rs
// Summary: The fixed set of report blocks; each loads its CSVs, then renders its charts.
// A block whose input file is missing is skipped with a notice; any other error aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use chart_core::theme::colors;
use chart_core::{Axis, Chart, Color, Figure, Marker, RefLine, RenderOptions, Series};
use tracing::{debug, warn};

use crate::error::Result;
use crate::render::Renderer;
use crate::request::{ChartRequest, X_LABEL};
use crate::table::{Table, SIZE_COLUMN};

pub const TRANSACTION_TIME: &str = "transaction_processing_time";
pub const DOUBLE_SPENDING_TIME: &str = "double_spending_detection_time";
pub const MEMORY_USAGE: &str = "memory_usage";
pub const FALSE_POSITIVE: &str = "false_positive_rate";
pub const DETECTION_NEW_TOKEN: &str = "double_spending_detection_performance";
pub const DETECTION_EXISTING_TOKEN: &str = "double_spending_detection_existing_token";
pub const HASH_CREATION: &str = "hash_creation_performance";

const TIME_MICROS: &str = "Time (microseconds)";
const SPEEDUP_LABEL: &str = "Speedup Factor (x)";

/// Where the benchmark CSVs live; `<dir>/<name>.csv`.
#[derive(Clone, Debug)]
pub struct ReportInputs {
    dir: PathBuf,
}

impl ReportInputs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }

    pub fn load(&self, name: &str) -> Result<Table> {
        Table::from_path(self.path(name))
    }
}

type BlockFn = fn(&ReportInputs, &Renderer) -> Result<Vec<PathBuf>>;

/// A group of charts sharing input tables; the unit of skip-on-missing.
pub struct Block {
    pub name: &'static str,
    /// Printed when one of the block's CSVs is missing.
    pub skip_notice: &'static str,
    run: BlockFn,
}

impl Block {
    pub fn run(&self, inputs: &ReportInputs, renderer: &Renderer) -> Result<Vec<PathBuf>> {
        (self.run)(inputs, renderer)
    }
}

/// All blocks in run order.
pub fn blocks() -> Vec<Block> {
    vec![
        Block {
            name: "existing results",
            skip_notice: "Some existing CSV files not found, skipping existing plots",
            run: existing_results,
        },
        Block {
            name: "new token detection",
            skip_notice: "double_spending_detection_performance.csv not found",
            run: new_token_detection,
        },
        Block {
            name: "existing token detection",
            skip_notice: "double_spending_detection_existing_token.csv not found",
            run: existing_token_detection,
        },
        Block {
            name: "hash creation",
            skip_notice: "hash_creation_performance.csv not found",
            run: hash_creation,
        },
        Block {
            name: "comprehensive comparison",
            skip_notice: "Cannot create comprehensive comparison - missing data files",
            run: comprehensive_comparison,
        },
    ]
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<&'static str>,
    /// Skip notices for the user, in block order.
    pub notices: Vec<&'static str>,
}

/// Run every block in order. Missing inputs skip their block; other errors are returned.
/// The output directory is created first, even if every block ends up skipped.
pub fn run_report(inputs: &ReportInputs, renderer: &Renderer) -> Result<Summary> {
    fs::create_dir_all(renderer.output_dir())?;
    let mut summary = Summary::default();
    for block in blocks() {
        debug!(block = block.name, "running block");
        match block.run(inputs, renderer) {
            Ok(paths) => summary.written.extend(paths),
            Err(e) if e.is_missing_input() => {
                warn!(block = block.name, error = %e, "skipping block");
                summary.skipped.push(block.name);
                summary.notices.push(block.skip_notice);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}

fn existing_results(inputs: &ReportInputs, r: &Renderer) -> Result<Vec<PathBuf>> {
    // all four load before anything is drawn
    let transaction_time = inputs.load(TRANSACTION_TIME)?;
    let double_spending = inputs.load(DOUBLE_SPENDING_TIME)?;
    let memory_usage = inputs.load(MEMORY_USAGE)?;
    let false_positive = inputs.load(FALSE_POSITIVE)?;

    let methods = ["OldMethodTime(ms)", "BloomFilterTime(ms)"];
    let memory = ["OldMethodMemory(bytes)", "BloomFilterMemory(bytes)"];
    Ok(vec![
        r.render(&ChartRequest::new(
            &transaction_time,
            &methods,
            "Transaction Processing Time Comparison",
            TRANSACTION_TIME,
            "Time (ms)",
        ))?,
        r.render(&ChartRequest::new(
            &double_spending,
            &methods,
            "Double Spending Detection Time Comparison",
            DOUBLE_SPENDING_TIME,
            "Time (ms)",
        ))?,
        r.render(&ChartRequest::new(
            &memory_usage,
            &memory,
            "Memory Usage Comparison",
            MEMORY_USAGE,
            "Memory Usage (bytes)",
        ))?,
        r.render(&ChartRequest::new(
            &false_positive,
            &["FalsePositiveRate"],
            "Bloom Filter False Positive Rate",
            FALSE_POSITIVE,
            "False Positive Rate",
        ))?,
    ])
}

fn new_token_detection(inputs: &ReportInputs, r: &Renderer) -> Result<Vec<PathBuf>> {
    let perf = inputs.load(DETECTION_NEW_TOKEN)?;
    let timing = r.render(
        &ChartRequest::new(
            &perf,
            &["LinearSearchTime(micros)", "BloomFilterTime(micros)"],
            "Double Spending Detection Performance (New Token)",
            DETECTION_NEW_TOKEN,
            TIME_MICROS,
        )
        .log_scale(true),
    )?;
    let speedup = speedup_figure(
        &perf,
        "BloomFilter Speedup Factor vs Linear Search",
        Marker::Circle,
        colors::GREEN,
    )?;
    let speedup = r.render_figure(&speedup, "double_spending_speedup_factor", None)?;
    Ok(vec![timing, speedup])
}

fn existing_token_detection(inputs: &ReportInputs, r: &Renderer) -> Result<Vec<PathBuf>> {
    let perf = inputs.load(DETECTION_EXISTING_TOKEN)?;
    let timing = r.render(
        &ChartRequest::new(
            &perf,
            &["LinearSearchTime(micros)", "BloomFilterTime(micros)"],
            "Double Spending Detection Performance (Existing Token)",
            DETECTION_EXISTING_TOKEN,
            TIME_MICROS,
        )
        .log_scale(true),
    )?;
    let speedup = speedup_figure(
        &perf,
        "BloomFilter Speedup Factor vs Linear Search (Existing Token)",
        Marker::Square,
        colors::RED,
    )?;
    let speedup = r.render_figure(&speedup, "double_spending_speedup_factor_existing", None)?;
    Ok(vec![timing, speedup])
}

fn hash_creation(inputs: &ReportInputs, r: &Renderer) -> Result<Vec<PathBuf>> {
    let hash = inputs.load(HASH_CREATION)?;
    let timing = r.render(
        &ChartRequest::new(
            &hash,
            &["HashCreationTime(micros)", "LinearSearchTime(micros)"],
            "Hash Creation vs Linear Search Performance",
            HASH_CREATION,
            TIME_MICROS,
        )
        .log_scale(true),
    )?;

    let mut chart = Chart::new().with_title("Hash Creation Efficiency vs Linear Search");
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::new("Hash Creation Time / Linear Search Time", 0.0, 1.0);
    chart.legend = true;
    chart.add_series(
        Series::from_columns(&hash.column(SIZE_COLUMN)?, &hash.column("HashVsLinearRatio")?)
            .with_marker(Marker::TriangleUp)
            .with_color(colors::PURPLE)
            .with_width(2.0),
    );
    chart.add_ref_line(
        RefLine::horizontal(1.0, colors::RED)
            .dashed()
            .with_alpha(0.7)
            .with_label("Equal Performance"),
    );
    chart.autoscale_axes(0.05);
    let ratio = r.render_figure(&Figure::single(chart), "hash_creation_ratio", None)?;
    Ok(vec![timing, ratio])
}

fn comprehensive_comparison(inputs: &ReportInputs, r: &Renderer) -> Result<Vec<PathBuf>> {
    let new_token = inputs.load(DETECTION_NEW_TOKEN)?;
    let existing_token = inputs.load(DETECTION_EXISTING_TOKEN)?;

    let mut speedups = log_panel("BloomFilter Performance Improvement", SPEEDUP_LABEL);
    speedups.add_series(
        Series::from_columns(&new_token.column(SIZE_COLUMN)?, &new_token.column("SpeedupFactor")?)
            .with_label("New Token")
            .with_marker(Marker::Circle)
            .with_width(2.0),
    );
    speedups.add_series(
        Series::from_columns(&existing_token.column(SIZE_COLUMN)?, &existing_token.column("SpeedupFactor")?)
            .with_label("Existing Token")
            .with_marker(Marker::Square)
            .with_width(2.0),
    );
    speedups.autoscale_axes(0.05);

    let sizes = new_token.column(SIZE_COLUMN)?;
    let mut absolute = log_panel("Absolute Performance Comparison", TIME_MICROS);
    absolute.add_series(
        Series::from_columns(&sizes, &new_token.column("LinearSearchTime(micros)")?)
            .with_label("Linear Search")
            .with_marker(Marker::Circle)
            .with_width(2.0),
    );
    absolute.add_series(
        Series::from_columns(&sizes, &new_token.column("BloomFilterTime(micros)")?)
            .with_label("BloomFilter")
            .with_marker(Marker::Square)
            .with_width(2.0),
    );
    absolute.autoscale_axes(0.05);

    let mut figure = Figure::new();
    figure.add_panel(speedups);
    figure.add_panel(absolute);
    let opts = RenderOptions { theme: r.options().theme, ..RenderOptions::figsize(12.0, 8.0) };
    let path = r.render_figure(&figure, "comprehensive_performance_comparison", Some(&opts))?;
    Ok(vec![path])
}

/// Single speedup line on a log axis, no legend; the y-range follows the data.
fn speedup_figure(table: &Table, title: &str, marker: Marker, color: Color) -> Result<Figure> {
    let mut chart = log_panel(title, SPEEDUP_LABEL);
    chart.legend = false;
    chart.add_series(
        Series::from_columns(&table.column(SIZE_COLUMN)?, &table.column("SpeedupFactor")?)
            .with_marker(marker)
            .with_color(color)
            .with_width(2.0),
    );
    chart.autoscale_axes(0.05);
    Ok(Figure::single(chart))
}

fn log_panel(title: &str, y_label: &str) -> Chart {
    let mut chart = Chart::new().with_title(title);
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::log10(y_label, 1.0, 10.0);
    chart.legend = true;
    chart
}
