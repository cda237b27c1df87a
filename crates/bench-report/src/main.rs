// File: crates/bench-report/src/main.rs
// Summary: Loads the benchmark CSVs and renders every report chart to PNG.

use anyhow::Result;
use bench_report::{run_report, ReportConfig, ReportInputs, Renderer};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cfg = ReportConfig::parse();

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bench_report={},chart_core={}", cfg.log_level(), cfg.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let inputs = ReportInputs::new(&cfg.input_dir);
    let renderer = Renderer::new(&cfg.output_dir, cfg.render_options());
    info!(input = %inputs.dir().display(), output = %renderer.output_dir().display(), "generating graphs");

    let summary = run_report(&inputs, &renderer)?;
    for notice in &summary.notices {
        println!("{notice}");
    }
    info!(written = summary.written.len(), skipped = summary.skipped.len(), "done");
    println!("Graph generation complete!");
    Ok(())
}
