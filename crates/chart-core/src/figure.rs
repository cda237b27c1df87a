// File: crates/chart-core/src/figure.rs
// Summary: Multi-panel figure: charts stacked top to bottom on one surface.

use anyhow::Result;

use crate::chart::{encode_png, raster, write_png, Chart, RenderOptions};
use crate::geometry::RectI32;

/// One or more charts sharing a single output image.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    pub panels: Vec<Chart>,
}

impl Figure {
    pub fn new() -> Self { Self::default() }

    pub fn single(chart: Chart) -> Self {
        Self { panels: vec![chart] }
    }

    pub fn add_panel(&mut self, chart: Chart) {
        self.panels.push(chart);
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        if self.panels.is_empty() {
            anyhow::bail!("figure has no panels");
        }
        let full = RectI32::from_ltwh(0, 0, opts.width, opts.height);
        let rows = full.split_rows(self.panels.len());
        let mut surface = raster(opts, |canvas, shaper| {
            for (chart, area) in self.panels.iter().zip(rows) {
                chart.draw(canvas, shaper, area, opts);
            }
        })?;
        encode_png(&mut surface)
    }

    /// Render and write to `path`, replacing any previous file.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_png(path.as_ref(), &bytes)
    }
}
