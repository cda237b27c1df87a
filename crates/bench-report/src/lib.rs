// File: crates/bench-report/src/lib.rs
// Summary: Benchmark report renderer: CSV tables in, PNG line charts out.

pub mod config;
pub mod error;
pub mod plan;
pub mod render;
pub mod request;
pub mod table;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use plan::{run_report, ReportInputs, Summary};
pub use render::Renderer;
pub use request::ChartRequest;
pub use table::Table;
