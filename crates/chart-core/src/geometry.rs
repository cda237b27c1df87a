// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for panel and plot-area pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (collapses to a zero-size rect instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    /// Split into `n` equal rows, top to bottom.
    pub fn split_rows(&self, n: usize) -> Vec<RectI32> {
        if n == 0 { return Vec::new(); }
        let h = self.height() / n as i32;
        (0..n as i32)
            .map(|i| {
                let top = self.top + i * h;
                let bottom = if i == n as i32 - 1 { self.bottom } else { top + h };
                RectI32::from_ltrb(self.left, top, self.right, bottom)
            })
            .collect()
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rows_covers_rect() {
        let r = RectI32::from_ltwh(0, 0, 100, 101);
        let rows = r.split_rows(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].top, 0);
        assert_eq!(rows[0].bottom, rows[1].top);
        assert_eq!(rows[1].bottom, 101);
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectI32::from_ltwh(0, 0, 10, 10);
        let shrunk = r.inset(&Insets::new(8, 8, 8, 8));
        assert_eq!(shrunk.width(), 0);
        assert_eq!(shrunk.height(), 0);
    }
}
