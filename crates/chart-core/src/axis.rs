// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and bound helpers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }

    pub fn is_log(&self) -> bool { self.kind == ScaleKind::Log10 }

    /// Fit the range to `[lo, hi]` plus `margin` (fraction of span) on each side.
    /// Log axes pad in decades, so the margin is symmetric on screen.
    pub fn autoscale(&mut self, lo: f64, hi: f64, margin: f64) {
        match self.kind {
            ScaleKind::Linear => {
                let (lo, hi) = if (hi - lo).abs() < 1e-12 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
                let m = (hi - lo) * margin;
                self.min = lo - m;
                self.max = hi + m;
            }
            ScaleKind::Log10 => {
                let lo = lo.max(LOG_EPS);
                let hi = hi.max(lo);
                let (llo, lhi) = (lo.log10(), hi.log10());
                let (llo, lhi) = if (lhi - llo).abs() < 1e-12 { (llo - 0.5, lhi + 0.5) } else { (llo, lhi) };
                let m = (lhi - llo) * margin;
                self.min = 10f64.powf(llo - m);
                self.max = 10f64.powf(lhi + m);
            }
        }
    }
}

/// Smallest value a log axis will map; anything at or below is clamped.
pub const LOG_EPS: f64 = 1e-12;

/// Min and max over every value of every column, ignoring NaN.
/// Returns `None` when there is no finite value.
pub fn extent<'a, I>(columns: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for col in columns {
        for &v in col {
            if v.is_nan() { continue; }
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

/// Bounds as `[min * lower, max * upper]` over all columns.
/// With `lower = 0.9, upper = 1.1` this is the report's fixed y padding.
pub fn padded_bounds<'a, I>(columns: I, lower: f64, upper: f64) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    extent(columns).map(|(lo, hi)| (lo * lower, hi * upper))
}
