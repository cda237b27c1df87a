// File: crates/bench-report/src/render.rs
// Summary: Report renderer; writes chart requests and ad hoc figures as PNGs under one output directory.

use std::path::{Path, PathBuf};

use chart_core::{Figure, RenderOptions};
use tracing::info;

use crate::error::{ReportError, Result};
use crate::request::ChartRequest;

pub struct Renderer {
    output_dir: PathBuf,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(output_dir: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self { output_dir: output_dir.into(), opts }
    }

    pub fn output_dir(&self) -> &Path { &self.output_dir }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// `<output_dir>/<stem>.png`
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{stem}.png"))
    }

    /// Plot every y-column of `request` against its x-column and save the image.
    pub fn render(&self, request: &ChartRequest<'_>) -> Result<PathBuf> {
        let chart = request.to_chart()?;
        self.render_figure(&Figure::single(chart), request.filename, None)
    }

    /// Save a hand-built figure as `<stem>.png`; `opts` overrides the default size/theme.
    pub fn render_figure(&self, figure: &Figure, stem: &str, opts: Option<&RenderOptions>) -> Result<PathBuf> {
        let path = self.output_path(stem);
        let opts = opts.unwrap_or(&self.opts);
        figure
            .render_to_png(opts, &path)
            .map_err(|source| ReportError::Render { path: path.clone(), source })?;
        info!(path = %path.display(), panels = figure.panels.len(), "wrote chart");
        Ok(path)
    }
}
