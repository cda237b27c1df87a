// File: crates/bench-report/src/config.rs
// Summary: Command-line configuration; defaults reproduce the fixed relative paths.

use std::path::PathBuf;

use chart_core::{theme, RenderOptions};
use clap::{Parser, ValueEnum};
use tracing::Level;

pub const DEFAULT_INPUT_DIR: &str = "test-results";
pub const DEFAULT_OUTPUT_DIR: &str = "test-results/graphs";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bench-report")]
#[command(about = "Render benchmark CSV results as PNG line charts", long_about = None)]
pub struct ReportConfig {
    /// Directory holding the benchmark CSV files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory the PNG charts are written to (created if missing)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Colour theme for all charts
    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    pub theme: ThemeName,

    /// Increase logging verbosity (Info -> Debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl ReportConfig {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default().with_theme(theme::find(self.theme.as_str()))
    }
}
