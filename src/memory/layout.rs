//! Mapping of a linear address range onto a square-ish 2-D grid
//!
//! The grid is at least `min_grid_width` cells wide and otherwise the ceiling
//! of the square root of the unit count. Cells past the end of the range are
//! padding. Each cell is magnified to `cell_size` pixels so that the grid
//! fills roughly `max_canvas_px` pixels, without going under 1 or over
//! `max_cell_size`.

use crate::config::RenderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Real address units, `max_offset - min_offset`
    pub units: usize,
    pub width: usize,
    pub height: usize,
    /// Trailing cells with no address behind them
    pub padding: usize,
    pub cell_size: u32,
}

impl GridLayout {
    pub fn new(units: usize, config: &RenderConfig) -> Self {
        let width = (ceil_sqrt(units as u64).max(config.min_grid_width)).max(1) as usize;
        let height = units.div_ceil(width);
        let padding = width * height - units;

        let cell_size = (config.max_canvas_px / width as u64)
            .min(config.max_cell_size as u64)
            .max(1) as u32;

        GridLayout {
            units,
            width,
            height,
            padding,
            cell_size,
        }
    }

    /// Total cells, real and padding
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Pixel size of the magnified grid
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }

    /// Whether linear cell `index` is padding
    pub fn is_padding(&self, index: usize) -> bool {
        index >= self.units
    }
}

/// Smallest `r` with `r * r >= n`
pub fn ceil_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    // Correct float rounding in both directions
    while root.checked_mul(root).is_some_and(|sq| sq > n) {
        root -= 1;
    }
    while root.checked_mul(root).is_some_and(|sq| sq < n) {
        root += 1;
    }
    root
}
