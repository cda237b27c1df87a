// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure sizes, paddings).

/// Pixels per figure inch.
pub const DPI: f32 = 120.0;
/// Default surface width in pixels (10in).
pub const WIDTH: i32 = 1200;
/// Default surface height in pixels (6in).
pub const HEIGHT: i32 = 720;

/// Convert a figure size in inches to whole pixels at [`DPI`].
pub fn figsize_px(width_in: f32, height_in: f32) -> (i32, i32) {
    ((width_in * DPI).round() as i32, (height_in * DPI).round() as i32)
}

/// Screen margins around a plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels + rotated y label, title on top, x label below
        Self::new(96, 32, 56, 68)
    }
}
