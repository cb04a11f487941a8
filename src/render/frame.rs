//! Occupancy snapshot → annotated frame
//!
//! Canvas layout, top to bottom:
//!
//! ```text
//! margin
//! grid (height * cell_size)        indented by margin on both sides
//! 2 * margin
//! "Event ID: 7"                    text_height
//! text_margin
//! "Free: 42.00%"                   text_height
//! text_margin
//! "alloc 0x00001000 : 64"          text_height
//! margin
//! ```

use super::palette::PalettedImage;
use super::text::{draw_text, percent};
use super::theme::Theme;
use crate::config::RenderConfig;
use crate::memory::{GridLayout, Occupancy, UnitState};
use crate::parser::event::Event;
use image::{imageops, RgbImage};

/// One rendered step of the timeline
#[derive(Debug, Clone)]
pub struct Frame {
    /// Position of the triggering event in the log
    pub index: usize,
    /// Share of real units that are free after the event
    pub free_fraction: f64,
    pub event: Event,
    pub image: PalettedImage,
}

impl Frame {
    /// The three annotation lines drawn under the grid
    pub fn annotation(&self) -> [String; 3] {
        annotation_lines(self.index, self.free_fraction, &self.event)
    }
}

fn annotation_lines(index: usize, free_fraction: f64, event: &Event) -> [String; 3] {
    [
        format!("Event ID: {}", index),
        format!("Free: {}", percent(free_fraction)),
        event.to_string(),
    ]
}

/// Draws occupancy snapshots for a fixed grid layout
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    layout: GridLayout,
    config: RenderConfig,
    theme: Theme,
}

impl FrameRenderer {
    pub fn new(layout: GridLayout, config: RenderConfig, theme: Theme) -> Self {
        FrameRenderer {
            layout,
            config,
            theme,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Pixel dimensions of every frame this renderer produces
    pub fn canvas_size(&self) -> (u32, u32) {
        let (grid_w, grid_h) = self.layout.pixel_size();
        let c = &self.config;
        (
            grid_w + c.margin * 2,
            grid_h
                + c.margin * 3
                + c.text_height * RenderConfig::TEXT_LINES
                + c.text_margin * (RenderConfig::TEXT_LINES - 1),
        )
    }

    /// Top-left corner of the grid on the canvas
    pub fn grid_origin(&self) -> (u32, u32) {
        (self.config.margin, self.config.margin)
    }

    /// Cell state for linear grid position `index`
    fn cell_state(&self, occupancy: &Occupancy, index: usize) -> UnitState {
        if self.layout.is_padding(index) {
            UnitState::Padding
        } else {
            occupancy.state(index)
        }
    }

    /// One pixel per cell, row-major over the address range
    fn grid_image(&self, occupancy: &Occupancy) -> RgbImage {
        let width = self.layout.width;
        RgbImage::from_fn(width as u32, self.layout.height as u32, |x, y| {
            let index = y as usize * width + x as usize;
            self.theme.cell_color(self.cell_state(occupancy, index))
        })
    }

    /// Render the state after `event`, which is event number `index`
    pub fn render(&self, occupancy: &Occupancy, event: &Event, index: usize) -> Frame {
        let grid = magnify(&self.grid_image(occupancy), self.layout.cell_size);

        let (width, height) = self.canvas_size();
        let mut canvas = RgbImage::from_pixel(width, height, self.theme.background);
        let (grid_x, grid_y) = self.grid_origin();
        imageops::replace(&mut canvas, &grid, grid_x as i64, grid_y as i64);

        let free_fraction = occupancy.free_fraction();
        let text_x = self.config.margin;
        let text_y = self.config.margin * 2 + grid.height();
        let line_step = self.config.text_height + self.config.text_margin;

        for (line, text) in annotation_lines(index, free_fraction, event)
            .iter()
            .enumerate()
        {
            draw_text(
                &mut canvas,
                text_x,
                text_y + line_step * line as u32,
                text,
                self.theme.text,
            );
        }

        Frame {
            index,
            free_fraction,
            event: *event,
            image: PalettedImage::quantize(&canvas, &self.theme.palette()),
        }
    }
}

/// Nearest-neighbour upscale by an integer factor, each pixel becomes a `factor`² block
pub fn magnify(image: &RgbImage, factor: u32) -> RgbImage {
    if factor <= 1 {
        return image.clone();
    }
    RgbImage::from_fn(image.width() * factor, image.height() * factor, |x, y| {
        *image.get_pixel(x / factor, y / factor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::DEFAULT_THEME;
    use image::Rgb;

    fn renderer(units: usize) -> FrameRenderer {
        let config = RenderConfig::default();
        let layout = GridLayout::new(units, &config);
        FrameRenderer::new(layout, config, DEFAULT_THEME)
    }

    /// Colour at the centre of grid cell `(col, row)`
    fn cell_pixel(renderer: &FrameRenderer, frame: &Frame, col: u32, row: u32) -> Rgb<u8> {
        let cell = renderer.layout().cell_size;
        let (ox, oy) = renderer.grid_origin();
        frame
            .image
            .pixel(ox + col * cell + cell / 2, oy + row * cell + cell / 2)
    }

    #[test]
    fn test_canvas_size() {
        let r = renderer(10);
        // 32 x 1 cells of 10px, 10px margins, three text lines
        assert_eq!(r.canvas_size(), (340, 10 + 30 + 30 + 4));
    }

    #[test]
    fn test_cell_colors() {
        let r = renderer(10);
        let mut occ = Occupancy::with_len(0, 10);
        occ.apply(&Event::alloc(0, 2));
        occ.apply(&Event::alloc(1, 1));
        let frame = r.render(&occ, &Event::alloc(1, 1), 1);

        assert_eq!(cell_pixel(&r, &frame, 0, 0), DEFAULT_THEME.used);
        assert_eq!(cell_pixel(&r, &frame, 1, 0), DEFAULT_THEME.invalid);
        assert_eq!(cell_pixel(&r, &frame, 2, 0), DEFAULT_THEME.free);
        assert_eq!(cell_pixel(&r, &frame, 9, 0), DEFAULT_THEME.free);
        // padding
        assert_eq!(cell_pixel(&r, &frame, 10, 0), DEFAULT_THEME.background);
        assert_eq!(cell_pixel(&r, &frame, 31, 0), DEFAULT_THEME.background);
    }

    #[test]
    fn test_padding_ignores_counters() {
        let r = renderer(1000);
        let occ = Occupancy::with_len(0, 1000);
        let frame = r.render(&occ, &Event::alloc(0, 1), 0);
        // last row holds 1000 - 31 * 32 = 8 real cells
        assert_eq!(cell_pixel(&r, &frame, 7, 31), DEFAULT_THEME.free);
        assert_eq!(cell_pixel(&r, &frame, 8, 31), DEFAULT_THEME.background);
    }

    #[test]
    fn test_cells_have_hard_edges() {
        let r = renderer(10);
        let mut occ = Occupancy::with_len(0, 10);
        occ.apply(&Event::alloc(0, 1));
        let frame = r.render(&occ, &Event::alloc(0, 1), 0);
        let (ox, oy) = r.grid_origin();

        assert_eq!(frame.image.pixel(ox, oy), DEFAULT_THEME.used);
        assert_eq!(frame.image.pixel(ox + 9, oy + 9), DEFAULT_THEME.used);
        assert_eq!(frame.image.pixel(ox + 10, oy), DEFAULT_THEME.free);
        // margin stays background
        assert_eq!(frame.image.pixel(ox - 1, oy), DEFAULT_THEME.background);
    }

    #[test]
    fn test_annotation() {
        let r = renderer(10);
        let mut occ = Occupancy::with_len(0, 10);
        let event = Event::alloc(0, 5);
        occ.apply(&event);
        let frame = r.render(&occ, &event, 3);

        assert_eq!(frame.free_fraction, 0.5);
        assert_eq!(
            frame.annotation(),
            [
                "Event ID: 3".to_string(),
                "Free: 50.00%".to_string(),
                "alloc 0x00000000 : 5".to_string(),
            ]
        );
    }

    #[test]
    fn test_text_is_drawn_below_grid() {
        let r = renderer(10);
        let occ = Occupancy::with_len(0, 10);
        let frame = r.render(&occ, &Event::free(0, 5), 0);
        let (width, height) = r.canvas_size();
        let (_, grid_h) = r.layout().pixel_size();

        let mut ink_rows = (0..height)
            .filter(|&y| (0..width).any(|x| frame.image.pixel(x, y) == DEFAULT_THEME.text));
        let first = ink_rows.next().expect("annotation has ink");
        assert!(first >= 10 * 2 + grid_h);
    }

    #[test]
    fn test_zero_units_renders_text_only() {
        let r = renderer(0);
        let occ = Occupancy::with_len(5, 0);
        let frame = r.render(&occ, &Event::alloc(5, 0), 0);
        assert_eq!(frame.image.width(), 340);
        assert_eq!(frame.image.height(), 64);
        assert_eq!(frame.free_fraction, 1.0);
    }

    #[test]
    fn test_magnify() {
        let mut image = RgbImage::from_pixel(2, 1, Rgb([0, 0, 0]));
        image.put_pixel(1, 0, Rgb([255, 255, 255]));
        let big = magnify(&image, 3);
        assert_eq!(big.dimensions(), (6, 3));
        assert_eq!(*big.get_pixel(2, 2), Rgb([0, 0, 0]));
        assert_eq!(*big.get_pixel(3, 0), Rgb([255, 255, 255]));
    }
}
