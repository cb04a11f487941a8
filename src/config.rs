// Rendering and replay constants

/// Layout, annotation and limit settings for one replay run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Grids are never narrower than this many cells
    pub min_grid_width: u64,
    /// Target width in pixels used to pick the cell magnification
    pub max_canvas_px: u64,
    /// Upper bound on the side of a magnified cell
    pub max_cell_size: u32,
    pub margin: u32,
    pub text_height: u32,
    /// Vertical gap between annotation lines
    pub text_margin: u32,
    /// Delay attached to every encoded frame
    pub frame_delay_ms: u32,
    /// Largest address range (in units) the occupancy buffer may span
    pub max_units: u64,
}

impl RenderConfig {
    /// Number of annotation lines drawn under the grid
    pub const TEXT_LINES: u32 = 3;
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            min_grid_width: 32,
            max_canvas_px: 2048,
            max_cell_size: 10,
            margin: 10,
            text_height: 10,
            text_margin: 2,
            frame_delay_ms: 10,
            max_units: 1 << 32,
        }
    }
}
