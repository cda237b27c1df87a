// File: crates/bench-report/src/error.rs
// Summary: Report error kinds; only `MissingInput` is recoverable (the block is skipped).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("column '{column}' not found in {table}")]
    MissingColumn { table: String, column: String },

    #[error("{table}: column '{column}' row {row} is not numeric: {value:?}")]
    NotNumeric { table: String, column: String, row: usize, value: String },

    #[error("no data to plot for '{0}'")]
    EmptySeries(String),

    #[error("reading {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("rendering {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ReportError {
    /// True for the one error kind the report skips instead of aborting on.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, ReportError::MissingInput { .. })
    }
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
