// File: crates/bench-report/tests/report.rs
// Purpose: End-to-end report runs against scratch input/output directories.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use bench_report::{run_report, ChartRequest, ReportError, ReportInputs, Renderer, Table};
use chart_core::RenderOptions;

const DETECTION_NEW: &str = "Size,LinearSearchTime(micros),BloomFilterTime(micros),SpeedupFactor\n\
10,50,5,10\n\
100,500,6,83\n";

const DETECTION_EXISTING: &str = "Size,LinearSearchTime(micros),BloomFilterTime(micros),SpeedupFactor\n\
10,40,4,10\n\
100,420,5,84\n";

const HASH: &str = "Size,HashCreationTime(micros),LinearSearchTime(micros),HashVsLinearRatio\n\
10,20,50,0.4\n\
100,220,500,0.44\n\
1000,2500,5000,0.5\n";

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(format!("{name}.csv")), body).unwrap();
}

fn fast_options() -> RenderOptions {
    let mut opts = RenderOptions::figsize(4.0, 3.0);
    opts.draw_labels = false;
    opts
}

fn png_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "{} is not a PNG", path.display());
}

#[test]
fn present_table_produces_png() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "sample", "Size,A,B\n1,10,20\n2,50,100\n");
    let table = Table::from_path(tmp.path().join("sample.csv")).unwrap();

    let out = tmp.path().join("graphs");
    let renderer = Renderer::new(&out, fast_options());
    let path = renderer
        .render(&ChartRequest::new(&table, &["A", "B"], "Sample", "sample", "Value"))
        .unwrap();

    assert_eq!(path, out.join("sample.png"));
    assert_png(&path);
}

#[test]
fn log_scale_request_renders() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "mem", "Size,A\n10,1000\n100,250000\n1000,9000000\n");
    let table = Table::from_path(tmp.path().join("mem.csv")).unwrap();
    let renderer = Renderer::new(tmp.path(), fast_options());
    let path = renderer
        .render(&ChartRequest::new(&table, &["A"], "Mem", "mem_log", "bytes").log_scale(true))
        .unwrap();
    assert_png(&path);
}

#[test]
fn detection_performance_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("test-results");
    fs::create_dir_all(&input).unwrap();
    write(&input, "double_spending_detection_performance", DETECTION_NEW);

    let out = input.join("graphs");
    let summary = run_report(&ReportInputs::new(&input), &Renderer::new(&out, fast_options())).unwrap();

    assert_png(&out.join("double_spending_detection_performance.png"));
    assert_png(&out.join("double_spending_speedup_factor.png"));
    assert_eq!(summary.written.len(), 2);
    // existing results, existing token, hash creation, comprehensive
    assert_eq!(summary.skipped.len(), 4);
}

#[test]
fn missing_inputs_skip_blocks_and_later_blocks_still_run() {
    let tmp = tempfile::tempdir().unwrap();
    // only the last independent block's own input is present
    write(tmp.path(), "hash_creation_performance", HASH);

    let out = tmp.path().join("graphs");
    let summary = run_report(&ReportInputs::new(tmp.path()), &Renderer::new(&out, fast_options())).unwrap();

    assert_eq!(
        png_names(&out),
        ["hash_creation_performance.png", "hash_creation_ratio.png"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    );
    assert!(summary.skipped.contains(&"existing results"));
    assert!(summary.skipped.contains(&"comprehensive comparison"));
}

#[test]
fn nothing_present_completes_without_output() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("graphs");
    let summary = run_report(&ReportInputs::new(tmp.path().join("absent")), &Renderer::new(&out, fast_options())).unwrap();
    assert!(summary.written.is_empty());
    assert_eq!(summary.skipped.len(), 5);
    // the output directory is prepared up front, even with nothing to draw
    assert!(out.is_dir());
    assert!(png_names(&out).is_empty());
    assert_eq!(
        summary.notices,
        vec![
            "Some existing CSV files not found, skipping existing plots",
            "double_spending_detection_performance.csv not found",
            "double_spending_detection_existing_token.csv not found",
            "hash_creation_performance.csv not found",
            "Cannot create comprehensive comparison - missing data files",
        ]
    );
}

#[test]
fn full_input_set_renders_every_chart() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    write(dir, "transaction_processing_time", "Size,OldMethodTime(ms),BloomFilterTime(ms)\n10,5,2\n100,40,3\n");
    write(dir, "double_spending_detection_time", "Size,OldMethodTime(ms),BloomFilterTime(ms)\n10,6,2\n100,55,3\n");
    write(dir, "memory_usage", "Size,OldMethodMemory(bytes),BloomFilterMemory(bytes)\n10,1200,800\n100,12000,800\n");
    write(dir, "false_positive_rate", "Size,FalsePositiveRate\n10,0.001\n100,0.01\n");
    write(dir, "double_spending_detection_performance", DETECTION_NEW);
    write(dir, "double_spending_detection_existing_token", DETECTION_EXISTING);
    write(dir, "hash_creation_performance", HASH);

    let out = dir.join("graphs");
    let summary = run_report(&ReportInputs::new(dir), &Renderer::new(&out, fast_options())).unwrap();
    assert!(summary.skipped.is_empty());

    let expected: BTreeSet<String> = [
        "transaction_processing_time",
        "double_spending_detection_time",
        "memory_usage",
        "false_positive_rate",
        "double_spending_detection_performance",
        "double_spending_speedup_factor",
        "double_spending_detection_existing_token",
        "double_spending_speedup_factor_existing",
        "hash_creation_performance",
        "hash_creation_ratio",
        "comprehensive_performance_comparison",
    ]
    .iter()
    .map(|s| format!("{s}.png"))
    .collect();
    assert_eq!(png_names(&out), expected);
    assert_eq!(summary.written.len(), 11);

    // the comparison figure uses its own, larger canvas
    let img = image::open(out.join("comprehensive_performance_comparison.png")).unwrap();
    assert_eq!((img.width(), img.height()), (1440, 960));
}

#[test]
fn rerun_overwrites_instead_of_accumulating() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "double_spending_detection_performance", DETECTION_NEW);
    let inputs = ReportInputs::new(tmp.path());
    let out = tmp.path().join("graphs");
    let renderer = Renderer::new(&out, fast_options());

    run_report(&inputs, &renderer).unwrap();
    let first = png_names(&out);
    let first_bytes = fs::read(out.join("double_spending_speedup_factor.png")).unwrap();

    run_report(&inputs, &renderer).unwrap();
    assert_eq!(png_names(&out), first);
    assert_eq!(fs::read(out.join("double_spending_speedup_factor.png")).unwrap(), first_bytes);
}

#[test]
fn headers_only_table_aborts_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "double_spending_detection_performance", "Size,LinearSearchTime(micros),BloomFilterTime(micros),SpeedupFactor\n");
    let err = run_report(&ReportInputs::new(tmp.path()), &Renderer::new(tmp.path().join("g"), fast_options()))
        .unwrap_err();
    assert!(matches!(err, ReportError::EmptySeries(ref f) if f == "double_spending_detection_performance"));
}

#[test]
fn missing_column_aborts_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "double_spending_detection_performance", "Size,LinearSearchTime(micros)\n10,50\n");
    let err = run_report(&ReportInputs::new(tmp.path()), &Renderer::new(tmp.path().join("g"), fast_options()))
        .unwrap_err();
    assert!(matches!(err, ReportError::MissingColumn { ref column, .. } if column == "BloomFilterTime(micros)"));
}

#[test]
fn non_numeric_value_aborts_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "hash_creation_performance",
        "Size,HashCreationTime(micros),LinearSearchTime(micros),HashVsLinearRatio\n10,fast,50,0.4\n",
    );
    let err = run_report(&ReportInputs::new(tmp.path()), &Renderer::new(tmp.path().join("g"), fast_options()))
        .unwrap_err();
    assert!(matches!(err, ReportError::NotNumeric { row: 1, .. }));
}
