// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind, LOG_EPS};

/// Value coordinate (data units).
pub type Value = f64;

/// Maps a value range onto a pixel interval. `from_px` is `to_px`'s inverse.
///
/// `start_px` is where `vmin` lands; for a vertical axis that is the bottom
/// edge, so `start_px > end_px`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: Value, mut vmax: Value) -> Self {
        // Ensure strictly positive range for log scale
        vmin = if vmin <= LOG_EPS { LOG_EPS } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    /// Scale for `axis` spanning `start_px..end_px`.
    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
        }
    }

    /// Position of `v` as a fraction of the axis (0 at `vmin`, 1 at `vmax`).
    #[inline]
    pub fn fraction(&self, v: Value) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(LOG_EPS).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let frac = ((px - self.start_px) / (self.end_px - self.start_px)) as f64;
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            10f64.powf(self.log_min + frac * span)
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            self.vmin + frac * span
        }
    }

    /// True when `v` lies inside the visible range (inclusive, with slack for rounding).
    pub fn contains(&self, v: Value) -> bool {
        let f = self.fraction(v);
        (-1e-9..=1.0 + 1e-9).contains(&f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_round_trips_and_flips_for_vertical() {
        // vertical: vmin at bottom (500), vmax at top (100)
        let s = ValueScale::new_linear(500.0, 100.0, 0.0, 10.0);
        assert!((s.to_px(0.0) - 500.0).abs() < 1e-4);
        assert!((s.to_px(10.0) - 100.0).abs() < 1e-4);
        assert!((s.from_px(300.0) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn log_places_decades_evenly() {
        let s = ValueScale::new_log10(0.0, 300.0, 1.0, 1000.0);
        assert!((s.to_px(10.0) - 100.0).abs() < 1e-3);
        assert!((s.to_px(100.0) - 200.0).abs() < 1e-3);
        assert!((s.from_px(200.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn log_clamps_non_positive_range() {
        let s = ValueScale::new_log10(0.0, 100.0, -5.0, 0.0);
        assert!(s.vmin > 0.0);
        assert!(s.vmax > s.vmin);
        assert!(s.to_px(-1.0).is_finite());
    }
}
