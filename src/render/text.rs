//! Annotation text drawn with the 8×8 `font8x8` bitmap font

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};

/// Width and height of one glyph in pixels
pub const GLYPH_SIZE: u32 = 8;

/// Draw `text` with its top-left corner at `(x, y)`, clipping at the canvas edge
///
/// Characters outside the basic Latin set have no glyph and leave a blank.
pub fn draw_text(canvas: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>) {
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            draw_glyph(canvas, pen_x, y, &glyph, color);
        }
        pen_x = pen_x.saturating_add(GLYPH_SIZE);
    }
}

fn draw_glyph(canvas: &mut RgbImage, x: u32, y: u32, glyph: &[u8; 8], color: Rgb<u8>) {
    for (row, bits) in glyph.iter().enumerate() {
        let py = y + row as u32;
        if py >= canvas.height() {
            break;
        }
        // Least significant bit is the leftmost pixel
        for col in 0..GLYPH_SIZE {
            let px = x.saturating_add(col);
            if bits & (1 << col) != 0 && px < canvas.width() {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// Pixel width of `text` when drawn with [`draw_text`]
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * GLYPH_SIZE
}

/// Format a fraction as a percentage with two decimals, `0.5` → `50.00%`
pub fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
