//! Indexed-colour images for frame encoding

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use rustc_hash::FxHashMap;

/// An image stored as palette indices, at most 256 colours
#[derive(Debug, Clone, PartialEq)]
pub struct PalettedImage {
    width: u32,
    height: u32,
    palette: Vec<Rgb<u8>>,
    indices: Vec<u8>,
}

impl PalettedImage {
    /// Map every pixel of `image` onto `palette`
    ///
    /// Colours present in the palette map exactly; anything else goes to the
    /// nearest entry by squared RGB distance.
    pub fn quantize(image: &RgbImage, palette: &[Rgb<u8>]) -> Self {
        assert!(
            !palette.is_empty() && palette.len() <= 256,
            "palette must hold 1..=256 colours, got {}",
            palette.len()
        );

        let mut lookup: FxHashMap<[u8; 3], u8> = FxHashMap::default();
        for (i, color) in palette.iter().enumerate().rev() {
            lookup.insert(color.0, i as u8);
        }

        let indices = image
            .pixels()
            .map(|pixel| {
                *lookup
                    .entry(pixel.0)
                    .or_insert_with(|| nearest(palette, *pixel))
            })
            .collect();

        PalettedImage {
            width: image.width(),
            height: image.height(),
            palette: palette.to_vec(),
            indices,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &[Rgb<u8>] {
        &self.palette
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Colour at `(x, y)`, panics when out of bounds like [`RgbImage::get_pixel`]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let index = self.indices[(y as usize) * (self.width as usize) + x as usize];
        self.palette[index as usize]
    }

    /// Expand back to opaque RGBA, the form the GIF encoder takes
    pub fn to_rgba(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let Rgb([r, g, b]) = self.pixel(x, y);
            Rgba([r, g, b, 255])
        })
    }
}

fn nearest(palette: &[Rgb<u8>], pixel: Rgb<u8>) -> u8 {
    let distance = |color: &Rgb<u8>| -> u32 {
        color
            .0
            .iter()
            .zip(pixel.0.iter())
            .map(|(&a, &b)| (a as i32 - b as i32).pow(2) as u32)
            .sum()
    };

    palette
        .iter()
        .enumerate()
        .min_by_key(|(_, color)| distance(color))
        .map_or(0, |(i, _)| i as u8)
}
